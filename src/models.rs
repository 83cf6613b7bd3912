use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub sports: Vec<String>,
    pub organized_activities: u32,
}

impl User {
    pub fn favorite_sport(&self) -> Option<&str> {
        self.sports.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub sport: String,
    pub location: String,
    /// Display-formatted date, `DD.MM.YYYY`.
    pub date: String,
    pub time: String,
    pub participants: u32,
    pub max_participants: u32,
    pub description: String,
    pub organizer: User,
    pub participants_list: Vec<User>,
    pub sport_tag: String,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }
}

/// Form submission payload for create and edit. The date arrives in the
/// picker format `YYYY-MM-DD` and is normalized on save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    pub sport: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub max_participants: Option<u32>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Join,
    Message,
    Reminder,
    Update,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Message => "message",
            Self::Reminder => "reminder",
            Self::Update => "update",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_title: Option<String>,
}

/// Derived read-only state the view layer renders the dashboard from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub activities: Vec<Activity>,
    pub total_matches: usize,
    pub has_more: bool,
    pub loading: bool,
    pub joined: Vec<String>,
}

/// Push notifications to the view layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BoardEvent {
    #[serde(rename_all = "camelCase")]
    ActivitySaved { activity: Activity, message: String },
    ReturnToDashboard,
    #[serde(rename_all = "camelCase")]
    UndoOffered {
        activity: Activity,
        expires_in_ms: u64,
    },
    #[serde(rename_all = "camelCase")]
    UndoExpired { activity_id: String },
    #[serde(rename_all = "camelCase")]
    ActivityRestored { activity: Activity },
    DashboardChanged,
}
