use crate::errors::AppResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// Slot holding the JSON-encoded list of user-authored activities.
pub const ACTIVITIES_SLOT: &str = "activities";

/// Durable key/value storage for named JSON blobs. Injected into the
/// catalog so tests can substitute an in-memory double.
pub trait Storage: Send + Sync {
    fn get(&self, slot: &str) -> AppResult<Option<String>>;
    fn set(&self, slot: &str, value: &str) -> AppResult<()>;
}

#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, slot: &str) -> AppResult<Option<String>> {
        let slots = self.slots.lock().expect("storage mutex");
        Ok(slots.get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> AppResult<()> {
        let mut slots = self.slots.lock().expect("storage mutex");
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorage, Storage};

    #[test]
    fn set_then_get_round_trips() {
        let storage = MemoryStorage::new();
        assert!(storage.get("activities").expect("get").is_none());

        storage.set("activities", "[]").expect("set");
        assert_eq!(storage.get("activities").expect("get").as_deref(), Some("[]"));

        storage.set("activities", "[1]").expect("overwrite");
        assert_eq!(storage.get("activities").expect("get").as_deref(), Some("[1]"));
    }
}
