//! Key-value persistence backing the session store.
//!
//! Two logical keys exist: one for the settings record, one for the
//! statistics record. The trait keeps the session store independent of the
//! storage mechanics so tests can run against an in-memory map.

use std::collections::HashMap;

use rusqlite::params;

use crate::error::FocusError;
use crate::storage::Database;

/// Key under which the settings record is stored.
pub const SETTINGS_KEY: &str = "settings";

/// Key under which the statistics record is stored.
pub const STATS_KEY: &str = "stats";

/// A synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, FocusError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Storage` if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), FocusError>;

    /// Remove the value stored under `key`. Removing an absent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Storage` if the delete fails.
    fn remove(&mut self, key: &str) -> Result<(), FocusError>;
}

/// Key-value store backed by the `records` table in the local database.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open the store over the database at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, FocusError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a store over an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, FocusError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare("SELECT value FROM records WHERE key = ?1")
            .map_err(|e| FocusError::Storage(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([key], |row| row.get(0))
            .optional()
            .map_err(|e| FocusError::Storage(format!("Failed to read key {key}: {e}")))?;

        Ok(result)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FocusError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO records (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(|e| FocusError::Storage(format!("Failed to write key {key}: {e}")))?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), FocusError> {
        self.db
            .connection()
            .execute("DELETE FROM records WHERE key = ?1", [key])
            .map_err(|e| FocusError::Storage(format!("Failed to remove key {key}: {e}")))?;

        Ok(())
    }
}

/// In-memory key-value store for tests and storage-less operation.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FocusError> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FocusError> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), FocusError> {
        self.records.remove(key);
        Ok(())
    }
}

// Add optional() extension for rusqlite
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> SqliteStore {
        let db = Database::open_in_memory().unwrap();
        SqliteStore::with_database(db)
    }

    #[test]
    fn test_sqlite_get_missing_key() {
        let store = create_test_store();
        assert_eq!(store.get(SETTINGS_KEY).unwrap(), None);
    }

    #[test]
    fn test_sqlite_set_and_get() {
        let mut store = create_test_store();

        store.set(SETTINGS_KEY, r#"{"focus_minutes":30}"#).unwrap();
        assert_eq!(
            store.get(SETTINGS_KEY).unwrap().as_deref(),
            Some(r#"{"focus_minutes":30}"#)
        );
    }

    #[test]
    fn test_sqlite_set_replaces_value() {
        let mut store = create_test_store();

        store.set(STATS_KEY, "first").unwrap();
        store.set(STATS_KEY, "second").unwrap();
        assert_eq!(store.get(STATS_KEY).unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_sqlite_remove() {
        let mut store = create_test_store();

        store.set(STATS_KEY, "value").unwrap();
        store.remove(STATS_KEY).unwrap();
        assert_eq!(store.get(STATS_KEY).unwrap(), None);

        // Removing again is not an error
        store.remove(STATS_KEY).unwrap();
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();

        assert_eq!(store.get("key").unwrap(), None);
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
        store.remove("key").unwrap();
        assert_eq!(store.get("key").unwrap(), None);
    }
}
