//! Persistence for ThinkUp: one SQLite file holding the scoped key-value table that backs
//! accessibility settings, the theme and the selected person.

pub mod connection;
pub mod migrations;

pub use connection::Database;
