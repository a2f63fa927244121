//! JSON seed loading for the in-memory store.

use std::path::Path;

use thiserror::Error;

use crate::types::Movie;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a JSON array of movies from a seed file.
pub fn load_movies(path: &Path) -> Result<Vec<Movie>, SeedError> {
    let text = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| SeedError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
