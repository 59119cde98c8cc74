//! Local persistence for focusflow.
//!
//! A small `SQLite` database at `~/.focusflow/focusflow.db` backs the
//! key-value store that holds the serialized settings and statistics
//! records.

pub mod database;
pub mod kv;
pub mod migrations;

pub use database::Database;
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
