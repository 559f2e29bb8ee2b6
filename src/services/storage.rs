//! Scoped key-value persistence.
//!
//! Every persisted value in the site is a single string under a fixed key.
//! `SqliteStore` backs the desktop app; `MemoryStore` backs tests and the demo
//! and can simulate a full disk with a byte quota.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::database::connection::Database;
use crate::types::errors::StorageError;

/// Scope used unless a store is built with another one.
pub const DEFAULT_SCOPE: &str = "site";

/// Handle shared by every component that persists something.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Trait defining the key-value persistence interface.
///
/// A `set` either stores the whole value or leaves the previous one in place.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// ─── SQLite ───

/// Key-value store over the `kv_store` table.
pub struct SqliteStore {
    db: Arc<Database>,
    scope: String,
}

impl SqliteStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_scope(db, DEFAULT_SCOPE)
    }

    pub fn with_scope(db: Arc<Database>, scope: &str) -> Self {
        Self {
            db,
            scope: scope.to_string(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM kv_store WHERE scope = ?1 AND key = ?2",
                params![self.scope, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db.connection().execute(
            "INSERT INTO kv_store (scope, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(scope, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![self.scope, key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db.connection().execute(
            "DELETE FROM kv_store WHERE scope = ?1 AND key = ?2",
            params![self.scope, key],
        )?;
        Ok(())
    }
}

// ─── In-memory ───

#[derive(Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: usize,
}

/// Mutex-guarded map, optionally capped at a total byte size.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects any write that would push the total size of keys and
    /// values past `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            inner: Mutex::new(MemoryInner::default()),
            quota: Some(bytes),
        }
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.lock().map(|inner| inner.writes).unwrap_or(0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryInner>, StorageError> {
        self.inner
            .lock()
            .map_err(|e| StorageError::Backend(format!("memory store poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        if let Some(quota) = self.quota {
            let others: usize = inner
                .entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let size = key.len() + value.len();
            if others + size > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    size,
                    quota,
                });
            }
        }
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.entries.remove(key);
        Ok(())
    }
}
