use crate::errors::{AppError, AppResult};
use crate::models::{Activity, ActivityDraft, User};
use crate::seed;
use crate::storage::{Storage, ACTIVITIES_SLOT};
use crate::validation::display_date;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

const FALLBACK_TITLE_SUFFIX: &str = "Nova aktivnost";

/// Single source of truth for the activity collection: user-authored
/// records (durably persisted in the activities slot) merged in front of
/// the immutable seed catalog.
pub struct ActivityCatalog {
    storage: Arc<dyn Storage>,
    working: Vec<Activity>,
    durable: Vec<Activity>,
}

impl ActivityCatalog {
    /// Reads the persisted user-authored list and merges it with the seed
    /// catalog. A missing or unreadable slot degrades to an empty list.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let durable = match storage.get(ACTIVITIES_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Activity>>(&raw) {
                Ok(list) => list,
                Err(error) => {
                    tracing::warn!(%error, "stored activities unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "activity slot read failed, starting empty");
                Vec::new()
            }
        };

        let mut working = durable.clone();
        let seen: HashSet<String> = working.iter().map(|entry| entry.id.clone()).collect();
        working.extend(
            seed::seed_catalog()
                .into_iter()
                .filter(|entry| !seen.contains(&entry.id)),
        );

        Self {
            storage,
            working,
            durable,
        }
    }

    pub fn collection(&self) -> &[Activity] {
        &self.working
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.working.iter().find(|entry| entry.id == id)
    }

    pub fn is_durable(&self, id: &str) -> bool {
        self.durable.iter().any(|entry| entry.id == id)
    }

    /// Builds the canonical record from a validated draft, appends it to
    /// the persisted list and prepends it to the working collection.
    pub fn create(&mut self, draft: &ActivityDraft, organizer: &User) -> AppResult<Activity> {
        let max_participants = draft
            .max_participants
            .ok_or_else(|| AppError::Internal("draft missing participant count".to_string()))?;

        let record = Activity {
            id: Uuid::new_v4().to_string(),
            title: format!("{} - {}", draft.sport, FALLBACK_TITLE_SUFFIX),
            sport: draft.sport.clone(),
            location: draft.location.trim().to_string(),
            date: display_date(&draft.date),
            time: draft.time.clone(),
            participants: 1,
            max_participants,
            description: draft.description.clone(),
            organizer: organizer.clone(),
            participants_list: Vec::new(),
            sport_tag: draft.sport.clone(),
        };

        self.durable.push(record.clone());
        self.working.insert(0, record.clone());
        self.save()?;
        tracing::info!(activity_id = %record.id, sport = %record.sport, "activity created");
        Ok(record)
    }

    /// Replaces a user-authored record. Seed-catalog entries are not
    /// editable; ids unknown to the working collection are not found.
    pub fn update(&mut self, id: &str, draft: &ActivityDraft) -> AppResult<Activity> {
        let Some(durable_index) = self.durable.iter().position(|entry| entry.id == id) else {
            if self.get(id).is_some() {
                return Err(AppError::NotEditable(format!(
                    "activity {id} is part of the seed catalog"
                )));
            }
            return Err(AppError::NotFound(format!("activity {id}")));
        };

        let max_participants = draft
            .max_participants
            .ok_or_else(|| AppError::Internal("draft missing participant count".to_string()))?;

        let current = self.durable[durable_index].clone();
        let suffix = current
            .title
            .split_once(" - ")
            .map(|(_, rest)| rest)
            .unwrap_or(FALLBACK_TITLE_SUFFIX);

        let updated = Activity {
            id: current.id.clone(),
            title: format!("{} - {}", draft.sport, suffix),
            sport: draft.sport.clone(),
            location: draft.location.trim().to_string(),
            date: display_date(&draft.date),
            time: draft.time.clone(),
            participants: current.participants,
            max_participants,
            description: draft.description.clone(),
            organizer: current.organizer,
            participants_list: current.participants_list,
            sport_tag: draft.sport.clone(),
        };

        self.durable[durable_index] = updated.clone();
        if let Some(index) = self.working.iter().position(|entry| entry.id == id) {
            self.working[index] = updated.clone();
        }
        self.save()?;
        tracing::info!(activity_id = %id, "activity updated");
        Ok(updated)
    }

    /// Removes the record from the working collection and, when it is
    /// user-authored, from the persisted list. Returns the removed record
    /// and whether it was durable so a later restore can put both back.
    /// Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> AppResult<Option<(Activity, bool)>> {
        let Some(index) = self.working.iter().position(|entry| entry.id == id) else {
            return Ok(None);
        };
        let removed = self.working.remove(index);

        let was_durable = match self.durable.iter().position(|entry| entry.id == id) {
            Some(durable_index) => {
                self.durable.remove(durable_index);
                self.save()?;
                true
            }
            None => false,
        };

        tracing::info!(activity_id = %id, was_durable, "activity deleted");
        Ok(Some((removed, was_durable)))
    }

    /// Re-inserts a previously deleted record. Idempotent: an id already in
    /// the working collection is left untouched.
    pub fn restore(&mut self, record: Activity, was_durable: bool) -> AppResult<()> {
        if self.get(&record.id).is_some() {
            return Ok(());
        }

        self.working.insert(0, record.clone());
        if was_durable {
            self.durable.push(record);
            self.save()?;
        }
        Ok(())
    }

    fn save(&self) -> AppResult<()> {
        let payload = serde_json::to_string(&self.durable)?;
        self.storage.set(ACTIVITIES_SLOT, &payload)
    }
}
