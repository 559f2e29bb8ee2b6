//! Unit tests for the ThinkUp database layer (connection, migrations, SQLite store).

use std::sync::Arc;

use thinkup::database::migrations::{get_schema_version, run_all, CURRENT_SCHEMA_VERSION};
use thinkup::database::Database;
use thinkup::services::storage::{KeyValueStore, SqliteStore, DEFAULT_SCOPE};

fn table_exists(db: &Database, table: &str) -> bool {
    db.connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
            [table],
            |row| row.get(0),
        )
        .unwrap_or(false)
}

// ─── Migrations ───

#[test]
fn test_open_in_memory_succeeds() {
    assert!(Database::open_in_memory().is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_all_tables() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    for table in ["schema_version", "kv_store"] {
        assert!(table_exists(&db, table), "Table '{}' should exist after migrations", table);
    }
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    assert!(run_all(db.connection()).is_ok(), "Running migrations twice should succeed");
    let rows: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .expect("count failed");
    assert_eq!(rows, 1);
}

// ─── File-backed database ───

#[test]
fn test_open_file_database_creates_parent_dirs() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("nested").join("thinkup.db");
    let db = Database::open(&path).expect("open failed");
    assert!(path.exists());
    assert_eq!(db.path(), Some(path.as_path()));
    assert!(table_exists(&db, "kv_store"));
}

#[test]
fn test_in_memory_database_has_no_path() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    assert!(db.path().is_none());
}

#[test]
fn test_values_survive_reopen() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("thinkup.db");
    {
        let store = SqliteStore::new(Arc::new(Database::open(&path).expect("open failed")));
        store.set("theme", "dark").expect("set failed");
    }
    let store = SqliteStore::new(Arc::new(Database::open(&path).expect("reopen failed")));
    assert_eq!(store.get("theme").expect("get failed"), Some("dark".to_string()));
}

// ─── SqliteStore ───

#[test]
fn test_sqlite_store_overwrites_and_removes() {
    let store = SqliteStore::new(Arc::new(Database::open_in_memory().expect("open failed")));
    assert_eq!(store.scope(), DEFAULT_SCOPE);
    assert_eq!(store.get("selectedPerson").expect("get failed"), None);

    store.set("selectedPerson", "ari").expect("set failed");
    store.set("selectedPerson", "erick").expect("set failed");
    assert_eq!(store.get("selectedPerson").expect("get failed"), Some("erick".to_string()));

    store.remove("selectedPerson").expect("remove failed");
    assert_eq!(store.get("selectedPerson").expect("get failed"), None);
}

#[test]
fn test_sqlite_store_scopes_share_a_database() {
    let db = Arc::new(Database::open_in_memory().expect("open failed"));
    let site = SqliteStore::new(db.clone());
    let preview = SqliteStore::with_scope(db, "preview");
    site.set("theme", "light").expect("set failed");
    preview.set("theme", "dark").expect("set failed");
    assert_eq!(site.get("theme").expect("get failed"), Some("light".to_string()));
    assert_eq!(preview.get("theme").expect("get failed"), Some("dark".to_string()));
}
