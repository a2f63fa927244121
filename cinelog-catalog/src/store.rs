//! The storage abstraction shared by the in-memory and SQLite stores.

use thiserror::Error;

use crate::types::{Movie, MovieDraft, MoviePatch};

/// Boxed error from a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failure in the backing storage medium.
///
/// Distinct from "record absent" (`Ok(None)` / `Ok(false)`) and from
/// validation failure, so callers can always tell the three apart.
#[derive(Debug, Error)]
#[error("storage failure: {source}")]
pub struct StoreError {
    source: BoxError,
}

impl StoreError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Optional constraints for [`MovieStore::list`].
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Genre name, matched case-insensitively; an unknown name yields an
    /// empty list rather than an error.
    pub genre: Option<String>,
}

/// CRUD operations over the authoritative movie collection.
///
/// The store exclusively owns the collection; request handlers never
/// mutate records except through these operations. Implementations
/// serialize mutation internally.
pub trait MovieStore: Send + Sync {
    /// All movies, or those matching the filter, in insertion order.
    fn list(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StoreError>;

    /// The movie with the given id. A malformed id is `None`, same as an
    /// unknown one.
    fn get(&self, id: &str) -> Result<Option<Movie>, StoreError>;

    /// Persist a validated draft under a fresh id and return the stored
    /// record. The record, including every genre link, becomes visible to
    /// `list`/`get` only once this returns.
    fn create(&self, draft: MovieDraft) -> Result<Movie, StoreError>;

    /// Merge the supplied fields over an existing record. `None` when the
    /// id does not resolve; an empty patch returns the record unchanged
    /// without performing a write.
    fn update(&self, id: &str, patch: MoviePatch) -> Result<Option<Movie>, StoreError>;

    /// Remove a movie. False when the id is malformed or unknown.
    fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
