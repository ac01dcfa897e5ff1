//! Database module: room rows and storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: pool-backed storage with the search query

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{NewRoom, Room};
pub use schema::SQLITE_INIT;
pub use sqlite::{RoomsStorage, SqlitePool};
