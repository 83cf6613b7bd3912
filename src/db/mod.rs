use crate::errors::{AppError, AppResult};
use crate::storage::Storage;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// SQLite-backed slot store. One row per named slot, rewritten in full on
/// every set, mirroring the browser storage the board persists into.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    pub fn new(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| AppError::Storage(err.to_string()))?;
        }
        let conn = Connection::open(path).map_err(AppError::from)?;
        conn.execute_batch(SCHEMA_SQL).map_err(AppError::from)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl Storage for SqliteStorage {
    fn get(&self, slot: &str) -> AppResult<Option<String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| AppError::Internal("storage mutex poisoned".to_string()))?;
        let value = conn
            .query_row(
                "SELECT value FROM slots WHERE name = ?1",
                params![slot],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, slot: &str, value: &str) -> AppResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| AppError::Internal("storage mutex poisoned".to_string()))?;
        conn.execute(
            "INSERT INTO slots (name, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![slot, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteStorage;
    use crate::storage::{Storage, ACTIVITIES_SLOT};

    #[test]
    fn slot_round_trips_through_sqlite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("board.db");
        let storage = SqliteStorage::new(&db_path).expect("storage");

        assert!(storage.get(ACTIVITIES_SLOT).expect("get").is_none());
        storage.set(ACTIVITIES_SLOT, "[]").expect("set");
        assert_eq!(
            storage.get(ACTIVITIES_SLOT).expect("get").as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn set_overwrites_existing_slot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("board.db");
        let storage = SqliteStorage::new(&db_path).expect("storage");

        storage.set("activities", "[\"a\"]").expect("first write");
        storage.set("activities", "[\"b\"]").expect("second write");
        assert_eq!(
            storage.get("activities").expect("get").as_deref(),
            Some("[\"b\"]")
        );
    }

    #[test]
    fn reopening_the_database_keeps_slots() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("board.db");

        {
            let storage = SqliteStorage::new(&db_path).expect("storage");
            storage.set("activities", "[1,2,3]").expect("set");
        }

        let reopened = SqliteStorage::new(&db_path).expect("reopen");
        assert_eq!(
            reopened.get("activities").expect("get").as_deref(),
            Some("[1,2,3]")
        );
    }
}
