use crate::filter::FilterCriteria;
use crate::models::Activity;
use crate::pager::Pager;
use std::collections::HashSet;

/// Per-session dashboard state: the active filter criteria, the
/// incremental loader and the join set. None of this is persisted; it
/// lives and dies with the viewing session.
#[derive(Debug, Default)]
pub struct DashboardSession {
    criteria: FilterCriteria,
    pager: Pager,
    joined: HashSet<String>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the criteria. Any actual change invalidates the current
    /// scroll depth, so the pager snaps back to the first page.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria == criteria {
            return;
        }
        self.criteria = criteria;
        self.pager.reset();
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn is_joined(&self, activity_id: &str) -> bool {
        self.joined.contains(activity_id)
    }

    pub fn joined_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.joined.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Session-local join toggle. Toggling on is rejected while the
    /// activity is full; toggling off always succeeds. Returns the
    /// membership state after the call.
    pub fn toggle_join(&mut self, activity: &Activity) -> bool {
        if self.joined.remove(&activity.id) {
            return false;
        }
        if activity.is_full() {
            tracing::debug!(activity_id = %activity.id, "join rejected, activity is full");
            return false;
        }
        self.joined.insert(activity.id.clone());
        true
    }

    /// Joined entries for activities that no longer exist are dropped so a
    /// deleted activity does not linger in the join set.
    pub fn retain_joined(&mut self, exists: impl Fn(&str) -> bool) {
        self.joined.retain(|id| exists(id));
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardSession;
    use crate::filter::FilterCriteria;
    use crate::models::{Activity, User};
    use crate::pager::PAGE_SIZE;

    fn activity(id: &str, participants: u32, max_participants: u32) -> Activity {
        Activity {
            id: id.to_string(),
            title: "Fudbal - Nova aktivnost".to_string(),
            sport: "Fudbal".to_string(),
            location: "Beograd".to_string(),
            date: "15.12.2024".to_string(),
            time: "18:00".to_string(),
            participants,
            max_participants,
            description: String::new(),
            organizer: User {
                id: "1".to_string(),
                name: "Marko Petrović".to_string(),
                avatar: None,
                sports: vec![],
                organized_activities: 0,
            },
            participants_list: vec![],
            sport_tag: "Fudbal".to_string(),
        }
    }

    #[test]
    fn toggle_joins_then_leaves() {
        let mut session = DashboardSession::new();
        let open = activity("a", 3, 10);

        assert!(session.toggle_join(&open));
        assert!(session.is_joined("a"));
        assert!(!session.toggle_join(&open));
        assert!(!session.is_joined("a"));
    }

    #[test]
    fn full_activity_cannot_be_freshly_joined() {
        let mut session = DashboardSession::new();
        let full = activity("a", 10, 10);

        assert!(!session.toggle_join(&full));
        assert!(!session.is_joined("a"));
    }

    #[test]
    fn full_activity_can_still_be_left() {
        let mut session = DashboardSession::new();
        let mut entry = activity("a", 9, 10);

        assert!(session.toggle_join(&entry));
        entry.participants = 10;
        assert!(!session.toggle_join(&entry));
        assert!(!session.is_joined("a"));
    }

    #[test]
    fn criteria_change_resets_the_pager() {
        let mut session = DashboardSession::new();
        assert!(session.pager_mut().begin_load(40));
        session.pager_mut().complete_load(40);
        assert_eq!(session.pager().displayed(), 2 * PAGE_SIZE);

        session.set_criteria(FilterCriteria {
            search: "tenis".to_string(),
            ..FilterCriteria::default()
        });
        assert_eq!(session.pager().displayed(), PAGE_SIZE);
    }

    #[test]
    fn unchanged_criteria_keep_scroll_depth() {
        let mut session = DashboardSession::new();
        assert!(session.pager_mut().begin_load(40));
        session.pager_mut().complete_load(40);

        session.set_criteria(FilterCriteria::default());
        assert_eq!(session.pager().displayed(), 2 * PAGE_SIZE);
    }

    #[test]
    fn stale_join_entries_are_dropped() {
        let mut session = DashboardSession::new();
        session.toggle_join(&activity("a", 2, 10));
        session.toggle_join(&activity("b", 2, 10));

        session.retain_joined(|id| id == "b");
        assert!(!session.is_joined("a"));
        assert!(session.is_joined("b"));
    }
}
