use crate::models::Activity;
use serde::{Deserialize, Serialize};

pub const ALL_SPORTS: &str = "Svi sportovi";
pub const ALL_LOCATIONS: &str = "Sve lokacije";

/// Dashboard filter state. Owned by the view layer, consumed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search: String,
    pub sport: String,
    pub location: String,
    /// Picker format `YYYY-MM-DD`.
    pub date: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            sport: ALL_SPORTS.to_string(),
            location: ALL_LOCATIONS.to_string(),
            date: None,
        }
    }
}

/// Reorders a `YYYY-MM-DD` picker value into the `DD.MM.YYYY` token the
/// stored display dates are matched against.
pub fn date_token(picker_value: &str) -> String {
    picker_value
        .split('-')
        .rev()
        .collect::<Vec<_>>()
        .join(".")
}

pub fn matches(activity: &Activity, criteria: &FilterCriteria) -> bool {
    let search = criteria.search.to_lowercase();
    let matches_search = activity.title.to_lowercase().contains(&search)
        || activity.description.to_lowercase().contains(&search);

    let matches_sport = criteria.sport == ALL_SPORTS || activity.sport == criteria.sport;

    let matches_location = criteria.location == ALL_LOCATIONS
        || activity
            .location
            .to_lowercase()
            .contains(&criteria.location.to_lowercase());

    let matches_date = match criteria.date.as_deref() {
        None | Some("") => true,
        Some(picker_value) => activity.date.contains(&date_token(picker_value)),
    };

    matches_search && matches_sport && matches_location && matches_date
}

/// Pure conjunctive filter. Preserves the collection's order; never sorts.
pub fn filter_activities(activities: &[Activity], criteria: &FilterCriteria) -> Vec<Activity> {
    activities
        .iter()
        .filter(|activity| matches(activity, criteria))
        .cloned()
        .collect()
}
