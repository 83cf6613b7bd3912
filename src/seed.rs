use crate::models::{Activity, ChatMessage, Notification, NotificationKind, User};
use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use rand::Rng;

const SEED_ACTIVITY_COUNT: u32 = 65;

const SPORTS: [&str; 6] = ["Fudbal", "Košarka", "Tenis", "Odbojka", "Trčanje", "Plivanje"];

const LOCATIONS: [&str; 15] = [
    "Sportski centar \"Partizan\"",
    "Hala \"Pinki\"",
    "Teniski klub \"Novak\"",
    "Plaža \"Ada Ciganlija\"",
    "Park \"Kalemegdan\"",
    "Bazen \"25. Maj\"",
    "Sportski centar \"Tašmajdan\"",
    "Hala \"Pionir\"",
    "Arena \"Kombank\"",
    "Park \"Ušće\"",
    "Sportski centar \"11. April\"",
    "Bazen \"Olymp\"",
    "Teniski klub \"Dril\"",
    "Plaža \"Savski kej\"",
    "Stadion \"Obilić\"",
];

const TITLES: [[&str; 5]; 6] = [
    [
        "Fudbal - Večernja utakmica",
        "Fudbal - Jutarnja liga",
        "Fudbal - Vikend turnir",
        "Fudbal - Prijateljska utakmica",
        "Fudbal - Trening za početnike",
    ],
    [
        "Košarka - Jutarnji trening",
        "Košarka - Popodnevna liga",
        "Košarka - 3x3 turnir",
        "Košarka - Rekreativna igra",
        "Košarka - Veče kosarke",
    ],
    [
        "Tenis - Turnir parova",
        "Tenis - Singles takmičenje",
        "Tenis - Jutarnji trening",
        "Tenis - Rekreativno",
        "Tenis - Advanced tehnika",
    ],
    [
        "Odbojka - Rekreativno",
        "Odbojka - Plaža turnir",
        "Odbojka - Liga vikenda",
        "Odbojka - Trening za napredne",
        "Odbojka - Otvorena igra",
    ],
    [
        "Trčanje - Grupno",
        "Trčanje - Maraton priprema",
        "Trčanje - Sprint trening",
        "Trčanje - Jutarnja šetnja",
        "Trčanje - Trail running",
    ],
    [
        "Plivanje - Jutarnje",
        "Plivanje - Večernji trening",
        "Plivanje - Tehnika plivanja",
        "Plivanje - Kondicija",
        "Plivanje - Masters grupa",
    ],
];

const DESCRIPTIONS: [&str; 10] = [
    "Pozivamo sve ljubitelje sporta na odličnu aktivnost! Dođite i uživajte u igri.",
    "Trening prilagođen svim nivoima iskustva. Svi su dobrodošli!",
    "Organizujemo sjajnu aktivnost za sve zainteresovane. Pridružite nam se!",
    "Rekreativna igra u opuštenoj atmosferi. Donesite dobro raspoloženje!",
    "Profesionalni trening sa iskusnim trenerom. Unapredite svoje veštine!",
    "Zabavna aktivnost za sve uzraste. Porodice su dobrodošle!",
    "Takmičarski duh i sportska igra. Budite deo tima!",
    "Jutarnja energija i motivacija uz sport. Počnite dan kako treba!",
    "Večernja opuštajuća aktivnost. Odličan način da završite dan!",
    "Grupna aktivnost sa sjajnom atmosferom. Upoznajte nove ljude!",
];

const TIMES: [&str; 13] = [
    "06:00", "06:30", "07:00", "08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00",
    "18:00", "19:00", "20:00",
];

static SEED_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "1".to_string(),
            name: "Marko Petrović".to_string(),
            avatar: None,
            sports: vec![
                "Fudbal".to_string(),
                "Tenis".to_string(),
                "Košarka".to_string(),
            ],
            organized_activities: 15,
        },
        User {
            id: "2".to_string(),
            name: "Ana Jovanović".to_string(),
            avatar: None,
            sports: vec!["Tenis".to_string(), "Odbojka".to_string()],
            organized_activities: 8,
        },
        User {
            id: "3".to_string(),
            name: "Stefan Nikolić".to_string(),
            avatar: None,
            sports: vec!["Košarka".to_string(), "Trčanje".to_string()],
            organized_activities: 12,
        },
        User {
            id: "4".to_string(),
            name: "Milica Stojanović".to_string(),
            avatar: None,
            sports: vec!["Plivanje".to_string(), "Tenis".to_string()],
            organized_activities: 6,
        },
    ]
});

// Generated once per process so the seed catalog is stable for the session.
static SEED_ACTIVITIES: Lazy<Vec<Activity>> = Lazy::new(generate_activities);

fn capacity_for(sport: &str) -> u32 {
    match sport {
        "Fudbal" => 22,
        "Košarka" => 10,
        "Odbojka" => 12,
        "Trčanje" => 20,
        "Plivanje" => 15,
        _ => 8,
    }
}

fn generate_activities() -> Vec<Activity> {
    let users = &*SEED_USERS;
    let base_date = NaiveDate::from_ymd_opt(2024, 12, 15).expect("seed base date");
    let mut rng = rand::rng();

    (1..=SEED_ACTIVITY_COUNT)
        .map(|index| {
            let offset = (index - 1) as usize;
            let sport_index = offset % SPORTS.len();
            let sport = SPORTS[sport_index];
            let title = TITLES[sport_index][offset % TITLES[sport_index].len()];
            let location = LOCATIONS[offset % LOCATIONS.len()];
            let description = DESCRIPTIONS[offset % DESCRIPTIONS.len()];
            let time = TIMES[offset % TIMES.len()];
            let organizer = users[offset % users.len()].clone();
            let second = users[(offset + 1) % users.len()].clone();

            let date = base_date + Duration::days((offset * 3) as i64);
            let max_participants = capacity_for(sport);
            let participants = rng.random_range(2..max_participants);

            Activity {
                id: index.to_string(),
                title: title.to_string(),
                sport: sport.to_string(),
                location: location.to_string(),
                date: date.format("%d.%m.%Y").to_string(),
                time: time.to_string(),
                participants,
                max_participants,
                description: description.to_string(),
                organizer: organizer.clone(),
                participants_list: vec![organizer, second],
                sport_tag: sport.to_string(),
            }
        })
        .collect()
}

pub fn seed_users() -> Vec<User> {
    SEED_USERS.clone()
}

pub fn seed_catalog() -> Vec<Activity> {
    SEED_ACTIVITIES.clone()
}

/// The local session user. The board is single-user; every created activity
/// is organized by this user.
pub fn current_user() -> User {
    SEED_USERS[0].clone()
}

pub fn seed_messages() -> Vec<ChatMessage> {
    let entries = [
        (
            "1",
            "1",
            "Marko Petrović",
            "Pozdrav svima! Radujemo se večerašnjoj utakmici. Molim vas da dođete 15 minuta prije za zagrijavanje.",
            "14:30",
        ),
        (
            "2",
            "2",
            "Ana Jovanović",
            "Super! Ja ću biti tu. Da li neko može da podijeli prevoz?",
            "14:45",
        ),
        (
            "3",
            "3",
            "Stefan Nikolić",
            "Mogu da pokupim 3 osobe iz centra grada. Javite se u privatnoj poruci.",
            "15:10",
        ),
        (
            "4",
            "4",
            "Milica Stojanović",
            "Odlično! Hvala Stefan. Da li je potrebno da donesemo loptu ili imate?",
            "15:25",
        ),
        (
            "5",
            "1",
            "Marko Petrović",
            "Imam loptu, ne brinite. Vidimo se večeras!",
            "15:30",
        ),
    ];

    entries
        .into_iter()
        .map(|(id, user_id, user_name, message, timestamp)| ChatMessage {
            id: id.to_string(),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
        })
        .collect()
}

pub fn seed_notifications() -> Vec<Notification> {
    let entries = [
        (
            "1",
            NotificationKind::Join,
            "Nova prijava",
            "Marko Marković se prijavio na tvoju aktivnost \"Košarka u Pioniru\"",
            "2025-10-08T10:30:00",
            false,
            "1",
            "Košarka u Pioniru",
        ),
        (
            "2",
            NotificationKind::Message,
            "Nova poruka",
            "Ana Anić je poslala poruku u grupi \"Fudbal - Subota\"",
            "2025-10-08T09:15:00",
            false,
            "2",
            "Fudbal - Subota",
        ),
        (
            "3",
            NotificationKind::Reminder,
            "Podsjetnik",
            "Tvoja aktivnost \"Planinarenje - Trebević\" počinje za 2 sata",
            "2025-10-08T08:00:00",
            false,
            "3",
            "Planinarenje - Trebević",
        ),
        (
            "4",
            NotificationKind::Update,
            "Ažuriranje aktivnosti",
            "Organizator je promijenio vrijeme za \"Tenis u Grbavici\" sa 18:00 na 19:00",
            "2025-10-07T16:45:00",
            true,
            "4",
            "Tenis u Grbavici",
        ),
        (
            "5",
            NotificationKind::Join,
            "Nova prijava",
            "Petar Petrović se prijavio na tvoju aktivnost \"Odbojka na plaži\"",
            "2025-10-07T14:20:00",
            true,
            "5",
            "Odbojka na plaži",
        ),
        (
            "6",
            NotificationKind::Message,
            "Nova poruka",
            "Ivan Ivanović: \"Može li neko da donese loptu?\"",
            "2025-10-07T12:30:00",
            true,
            "1",
            "Košarka u Pioniru",
        ),
        (
            "7",
            NotificationKind::Reminder,
            "Podsjetnik",
            "Ne zaboravi da potvrdiš svoju prijavu za \"Yoga u parku\" do sutra",
            "2025-10-06T18:00:00",
            true,
            "6",
            "Yoga u parku",
        ),
    ];

    entries
        .into_iter()
        .map(
            |(id, kind, title, message, timestamp, read, activity_id, activity_title)| {
                Notification {
                    id: id.to_string(),
                    kind,
                    title: title.to_string(),
                    message: message.to_string(),
                    timestamp: timestamp.to_string(),
                    read,
                    activity_id: Some(activity_id.to_string()),
                    activity_title: Some(activity_title.to_string()),
                }
            },
        )
        .collect()
}
