//! SQLite-backed key-value store.
//!
//! One `kv` table maps each key to its JSON text and the time it was last
//! written.

use std::path::Path;

use chrono::Utc;
use meetcost_core::{MeetcostError, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use tracing::debug;

use crate::kv::KvStore;

/// A [`KvStore`] persisted in a SQLite database file.
///
/// # Examples
///
/// ```
/// use meetcost_store::{KvStore, SqliteStore};
///
/// let store = SqliteStore::in_memory().unwrap();
/// store.set("config:settings", &serde_json::json!({"currency": "EUR"})).unwrap();
/// assert!(store.get("config:settings").unwrap().is_some());
/// ```
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a database at `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`MeetcostError::Store`] if the directory or database cannot
    /// be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use meetcost_store::SqliteStore;
    ///
    /// let store = SqliteStore::open(Path::new(".meetcost/meetcost.db")).unwrap();
    /// ```
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                MeetcostError::Store(format!("failed to create store directory: {e}"))
            })?;
        }
        let conn = Connection::open(path)
            .map_err(|e| MeetcostError::Store(format!("failed to open database: {e}")))?;
        debug!(path = %path.display(), "opened store");

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`MeetcostError::Store`] if schema creation fails.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            MeetcostError::Store(format!("failed to create in-memory database: {e}"))
        })?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "
                CREATE TABLE IF NOT EXISTS kv (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                ",
            )
            .map_err(|e| MeetcostError::Store(format!("failed to create schema: {e}")))?;
        Ok(())
    }

    /// When `key` was last written, as an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`MeetcostError::Store`] on query failure.
    pub fn updated_at(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT updated_at FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| MeetcostError::Store(format!("failed to read '{key}': {e}")))
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let text: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| MeetcostError::Store(format!("failed to read '{key}': {e}")))?;

        match text {
            Some(text) => serde_json::from_str(&text).map(Some).map_err(|e| {
                MeetcostError::Store(format!("stored value for '{key}' is not valid JSON: {e}"))
            }),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.conn
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, text, Utc::now().to_rfc3339()],
            )
            .map_err(|e| MeetcostError::Store(format!("failed to write '{key}': {e}")))?;
        debug!(key, bytes = text.len(), "stored value");
        Ok(())
    }
}
