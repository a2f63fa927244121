//! Movie catalog data model, schema validation, and store abstraction.
//!
//! This crate defines the Movie domain types and validation rules without
//! any database dependencies. Consumers can use the in-memory store
//! directly or hand the types to `cinelog-db` for SQLite persistence.

pub mod memory;
pub mod seed;
pub mod store;
pub mod types;
pub mod validate;

pub use memory::MemoryStore;
pub use seed::{SeedError, load_movies};
pub use store::{MovieFilter, MovieStore, StoreError};
pub use types::{Genre, Movie, MovieDraft, MoviePatch};
pub use validate::{FieldError, validate_new, validate_patch};
