//! SQLite connection handling for ThinkUp.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::migrations;

/// The site's SQLite connection, migrated on open.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Opens (or creates) the database file, creating missing parent directories first.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the file cannot be opened or a migration fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(dir = %parent.display(), error = %e, "Could not create data directory");
            }
        }
        let db = Self::migrated(Connection::open(path)?, Some(path.to_path_buf()))?;
        debug!(path = %path.display(), "Database opened");
        Ok(db)
    }

    /// An in-memory database, used by tests and the demo binary.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if a migration fails.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::migrated(Connection::open_in_memory()?, None)
    }

    fn migrated(conn: Connection, path: Option<PathBuf>) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&conn)?;
        Ok(Self { conn, path })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// File backing the database; `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
