//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation and a [`SqliteStore`] implementing the
//! catalog's `MovieStore` trait, backed by SQLite (via rusqlite with the
//! bundled feature).

pub mod schema;
pub mod store;

pub use schema::{SchemaError, create_schema, open_database, open_memory};
pub use store::{DbError, SqliteStore};
