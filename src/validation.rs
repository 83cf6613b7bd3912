use crate::errors::{AppError, AppResult, FieldError};
use crate::models::ActivityDraft;
use chrono::NaiveDate;

pub const MIN_PARTICIPANTS: u32 = 2;
pub const MAX_PARTICIPANTS: u32 = 100;
pub const MIN_LOCATION_CHARS: usize = 3;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

const PICKER_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

const REQUIRED_MESSAGE: &str = "Molimo popunite sva obavezna polja.";
const LOCATION_MESSAGE: &str = "Lokacija mora imati najmanje 3 karaktera.";
const DATE_MESSAGE: &str = "Datum mora biti danas ili kasnije.";
const PARTICIPANTS_MESSAGE: &str = "Broj igrača mora biti između 2 i 100.";
const DESCRIPTION_MESSAGE: &str = "Opis može imati najviše 500 karaktera.";

/// Validates a create/edit draft against `today`. All failures are
/// collected so the form can render every message at once; submission is
/// rejected as a whole, never partially saved.
pub fn validate_draft(draft: &ActivityDraft, today: NaiveDate) -> AppResult<()> {
    let mut failures = Vec::new();

    if draft.sport.trim().is_empty() {
        failures.push(FieldError::new("sport", REQUIRED_MESSAGE));
    }

    let location = draft.location.trim();
    if location.is_empty() {
        failures.push(FieldError::new("location", REQUIRED_MESSAGE));
    } else if location.chars().count() < MIN_LOCATION_CHARS {
        failures.push(FieldError::new("location", LOCATION_MESSAGE));
    }

    if draft.date.trim().is_empty() {
        failures.push(FieldError::new("date", REQUIRED_MESSAGE));
    } else {
        match NaiveDate::parse_from_str(draft.date.trim(), PICKER_DATE_FORMAT) {
            Ok(date) if date >= today => {}
            _ => failures.push(FieldError::new("date", DATE_MESSAGE)),
        }
    }

    if draft.time.trim().is_empty() {
        failures.push(FieldError::new("time", REQUIRED_MESSAGE));
    }

    match draft.max_participants {
        None => failures.push(FieldError::new("maxParticipants", REQUIRED_MESSAGE)),
        Some(count) if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&count) => {
            failures.push(FieldError::new("maxParticipants", PARTICIPANTS_MESSAGE));
        }
        Some(_) => {}
    }

    if draft.description.chars().count() > MAX_DESCRIPTION_CHARS {
        failures.push(FieldError::new("description", DESCRIPTION_MESSAGE));
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(failures))
    }
}

/// Converts a validated picker date (`YYYY-MM-DD`) to the display format
/// stored on activities (`DD.MM.YYYY`). Unparseable input is passed through
/// untouched; validation has already rejected it by the time this runs.
pub fn display_date(picker_value: &str) -> String {
    NaiveDate::parse_from_str(picker_value.trim(), PICKER_DATE_FORMAT)
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|_| picker_value.to_string())
}

#[cfg(test)]
mod tests {
    use super::{display_date, validate_draft, MAX_DESCRIPTION_CHARS};
    use crate::errors::AppError;
    use crate::models::ActivityDraft;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("date")
    }

    fn valid_draft() -> ActivityDraft {
        ActivityDraft {
            sport: "Fudbal".to_string(),
            location: "Sportski centar \"Partizan\"".to_string(),
            date: "2025-06-15".to_string(),
            time: "18:00".to_string(),
            max_participants: Some(10),
            description: "Rekreativna igra.".to_string(),
        }
    }

    fn failing_fields(draft: &ActivityDraft) -> Vec<String> {
        match validate_draft(draft, today()) {
            Err(AppError::Validation(fields)) => {
                fields.into_iter().map(|entry| entry.field).collect()
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate_draft(&valid_draft(), today()).is_ok());
    }

    #[test]
    fn todays_date_is_accepted() {
        let draft = ActivityDraft {
            date: "2025-06-01".to_string(),
            ..valid_draft()
        };
        assert!(validate_draft(&draft, today()).is_ok());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let draft = ActivityDraft::default();
        let fields = failing_fields(&draft);
        for expected in ["sport", "location", "date", "time", "maxParticipants"] {
            assert!(fields.iter().any(|field| field == expected), "missing {expected}");
        }
    }

    #[test]
    fn past_date_is_rejected() {
        let draft = ActivityDraft {
            date: "2025-05-31".to_string(),
            ..valid_draft()
        };
        assert_eq!(failing_fields(&draft), vec!["date"]);
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let draft = ActivityDraft {
            date: "15.06.2025".to_string(),
            ..valid_draft()
        };
        assert_eq!(failing_fields(&draft), vec!["date"]);
    }

    #[test]
    fn participant_count_bounds_are_enforced() {
        for count in [1, 101] {
            let draft = ActivityDraft {
                max_participants: Some(count),
                ..valid_draft()
            };
            assert_eq!(failing_fields(&draft), vec!["maxParticipants"]);
        }
        for count in [2, 100] {
            let draft = ActivityDraft {
                max_participants: Some(count),
                ..valid_draft()
            };
            assert!(validate_draft(&draft, today()).is_ok());
        }
    }

    #[test]
    fn short_location_is_rejected() {
        let draft = ActivityDraft {
            location: "NS".to_string(),
            ..valid_draft()
        };
        assert_eq!(failing_fields(&draft), vec!["location"]);
    }

    #[test]
    fn oversized_description_is_rejected() {
        let draft = ActivityDraft {
            description: "š".repeat(MAX_DESCRIPTION_CHARS + 1),
            ..valid_draft()
        };
        assert_eq!(failing_fields(&draft), vec!["description"]);

        let at_limit = ActivityDraft {
            description: "š".repeat(MAX_DESCRIPTION_CHARS),
            ..valid_draft()
        };
        assert!(validate_draft(&at_limit, today()).is_ok());
    }

    #[test]
    fn picker_date_converts_to_display_format() {
        assert_eq!(display_date("2025-06-15"), "15.06.2025");
        assert_eq!(display_date("not-a-date"), "not-a-date");
    }
}
