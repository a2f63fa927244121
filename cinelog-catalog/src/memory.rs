//! In-process movie store backed by an ordered `Vec`.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::store::{MovieFilter, MovieStore, StoreError};
use crate::types::{Genre, Movie, MovieDraft, MoviePatch};

/// The in-memory store.
///
/// The collection sits behind a mutex so concurrent mutation cannot
/// corrupt the sequence; contents do not survive restarts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    movies: Mutex<Vec<Movie>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection, e.g. a JSON seed file.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Mutex::new(movies),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Movie>> {
        // A poisoned lock still holds a structurally valid Vec.
        self.movies.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MovieStore for MemoryStore {
    fn list(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StoreError> {
        let movies = self.lock();
        match filter.genre.as_deref() {
            None => Ok(movies.clone()),
            Some(name) => {
                let Some(wanted) = Genre::parse_loose(name) else {
                    return Ok(Vec::new());
                };
                Ok(movies
                    .iter()
                    .filter(|m| m.genre.contains(&wanted))
                    .cloned()
                    .collect())
            }
        }
    }

    fn get(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.lock().iter().find(|m| m.id == id).cloned())
    }

    fn create(&self, draft: MovieDraft) -> Result<Movie, StoreError> {
        let movie = draft.into_movie(Uuid::new_v4());
        self.lock().push(movie.clone());
        Ok(movie)
    }

    fn update(&self, id: &str, patch: MoviePatch) -> Result<Option<Movie>, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut movies = self.lock();
        let Some(movie) = movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(movie.clone()));
        }

        if let Some(title) = patch.title {
            movie.title = title;
        }
        if let Some(year) = patch.year {
            movie.year = year;
        }
        if let Some(director) = patch.director {
            movie.director = director;
        }
        if let Some(duration) = patch.duration {
            movie.duration = duration;
        }
        if let Some(poster) = patch.poster {
            movie.poster = poster;
        }
        if let Some(genre) = patch.genre {
            movie.genre = genre;
        }
        if let Some(rate) = patch.rate {
            movie.rate = rate;
        }
        Ok(Some(movie.clone()))
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(false);
        };
        let mut movies = self.lock();
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
