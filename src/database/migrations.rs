//! Schema migrations for the ThinkUp SQLite database.
//!
//! Migrations live in [`MIGRATIONS`] in version order. `run_all` applies the ones newer than
//! the highest version recorded in `schema_version`, each inside its own transaction.

use rusqlite::Connection;
use tracing::info;

/// One schema step: version, description recorded alongside it, and the SQL to run.
pub struct Migration {
    pub version: i32,
    pub description: &'static str,
    pub sql: &'static str,
}

pub static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "Scoped key-value store",
    sql: "CREATE TABLE IF NOT EXISTS kv_store (
              scope TEXT NOT NULL,
              key TEXT NOT NULL,
              value TEXT NOT NULL,
              updated_at INTEGER NOT NULL,
              PRIMARY KEY (scope, key)
          );",
}];

/// Highest version in [`MIGRATIONS`].
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Version recorded in the database, 0 when nothing has been applied yet.
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .unwrap_or(0)
}

/// Brings the schema up to [`CURRENT_SCHEMA_VERSION`]. Safe to call on every open.
///
/// # Errors
/// Returns `rusqlite::Error` if any statement fails; the failing step is rolled back.
pub fn run_all(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             applied_at INTEGER NOT NULL,
             description TEXT NOT NULL
         );",
    )?;

    let current = get_schema_version(conn);
    for step in MIGRATIONS.iter().filter(|m| m.version > current) {
        apply(conn, step)?;
        info!(version = step.version, "Applied migration: {}", step.description);
    }
    Ok(())
}

fn apply(conn: &Connection, step: &Migration) -> Result<(), rusqlite::Error> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(step.sql)?;
    tx.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
        rusqlite::params![step.version, chrono::Utc::now().timestamp(), step.description],
    )?;
    tx.commit()
}
