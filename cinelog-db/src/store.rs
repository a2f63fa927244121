//! The SQLite-backed movie store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use cinelog_catalog::{Genre, Movie, MovieDraft, MovieFilter, MoviePatch, MovieStore, StoreError};
use rusqlite::types::ToSql;
use rusqlite::{Connection, params};
use thiserror::Error;
use uuid::Uuid;

use crate::schema::{self, SchemaError};

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("unknown genre '{0}' in database")]
    UnknownGenre(String),
}

/// Movie store backed by a single SQLite connection.
///
/// Statements execute one at a time behind the mutex; the multi-table
/// create runs inside an explicit transaction so a partially linked movie
/// is never visible.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open or create a database at `path` and wrap it in a store.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        Ok(Self::new(schema::open_database(path)?))
    }

    /// In-memory database with the full schema. Useful for testing.
    pub fn open_in_memory() -> Result<Self, SchemaError> {
        Ok(Self::new(schema::open_memory()?))
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        // An interrupted transaction rolls back on drop; the connection
        // behind a poisoned lock is still usable.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn list_inner(&self, filter: &MovieFilter) -> Result<Vec<Movie>, DbError> {
        let conn = self.lock();
        let rows = match filter.genre.as_deref() {
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, title, year, director, duration, poster, rate
                     FROM movies ORDER BY rowid",
                )?;
                let mapped = stmt.query_map([], row_to_movie)?;
                mapped.collect::<Result<Vec<_>, _>>()?
            }
            Some(name) => {
                let Some(genre_id) = find_genre_id(&conn, name)? else {
                    return Ok(Vec::new());
                };
                let mut stmt = conn.prepare(
                    "SELECT m.id, m.title, m.year, m.director, m.duration, m.poster, m.rate
                     FROM movies m
                     JOIN movie_genres mg ON mg.movie_id = m.id
                     WHERE mg.genre_id = ?1
                     ORDER BY m.rowid",
                )?;
                let mapped = stmt.query_map(params![genre_id], row_to_movie)?;
                mapped.collect::<Result<Vec<_>, _>>()?
            }
        };

        let mut movies = Vec::with_capacity(rows.len());
        for row in rows {
            let genre = genres_for(&conn, &row.id)?;
            movies.push(row.into_movie(genre));
        }
        Ok(movies)
    }

    fn get_inner(&self, id: &str) -> Result<Option<Movie>, DbError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let conn = self.lock();
        fetch_movie(&conn, &id)
    }

    fn create_inner(&self, draft: MovieDraft) -> Result<Movie, DbError> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        let id = Uuid::new_v4();
        tx.execute(
            "INSERT INTO movies (id, title, year, director, duration, poster, rate)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                draft.title,
                draft.year,
                draft.director,
                draft.duration,
                draft.poster,
                draft.rate,
            ],
        )?;

        // Every listed genre is linked before the movie becomes visible;
        // returning early rolls the insert back.
        for genre in &draft.genre {
            let genre_id = find_genre_id(&tx, genre.as_str())?
                .ok_or_else(|| DbError::UnknownGenre(genre.as_str().to_string()))?;
            tx.execute(
                "INSERT OR IGNORE INTO movie_genres (movie_id, genre_id) VALUES (?1, ?2)",
                params![id, genre_id],
            )?;
        }

        tx.commit()?;
        Ok(draft.into_movie(id))
    }

    fn update_inner(&self, id: &str, patch: MoviePatch) -> Result<Option<Movie>, DbError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let conn = self.lock();
        let Some(existing) = fetch_movie(&conn, &id)? else {
            return Ok(None);
        };

        // Scalar columns only; genre links are not revised on update.
        let mut assignments: Vec<&'static str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();
        if let Some(title) = patch.title {
            assignments.push("title = ?");
            values.push(Box::new(title));
        }
        if let Some(year) = patch.year {
            assignments.push("year = ?");
            values.push(Box::new(year));
        }
        if let Some(director) = patch.director {
            assignments.push("director = ?");
            values.push(Box::new(director));
        }
        if let Some(duration) = patch.duration {
            assignments.push("duration = ?");
            values.push(Box::new(duration));
        }
        if let Some(poster) = patch.poster {
            assignments.push("poster = ?");
            values.push(Box::new(poster));
        }
        if let Some(rate) = patch.rate {
            assignments.push("rate = ?");
            values.push(Box::new(rate));
        }

        if assignments.is_empty() {
            return Ok(Some(existing));
        }

        let sql = format!("UPDATE movies SET {} WHERE id = ?", assignments.join(", "));
        values.push(Box::new(id));
        let bound: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
        conn.execute(&sql, bound.as_slice())?;

        fetch_movie(&conn, &id)
    }

    fn delete_inner(&self, id: &str) -> Result<bool, DbError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(false);
        };
        let conn = self.lock();
        // Link rows go with the movie via ON DELETE CASCADE.
        let changed = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

impl MovieStore for SqliteStore {
    fn list(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StoreError> {
        self.list_inner(filter).map_err(StoreError::new)
    }

    fn get(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        self.get_inner(id).map_err(StoreError::new)
    }

    fn create(&self, draft: MovieDraft) -> Result<Movie, StoreError> {
        self.create_inner(draft).map_err(StoreError::new)
    }

    fn update(&self, id: &str, patch: MoviePatch) -> Result<Option<Movie>, StoreError> {
        self.update_inner(id, patch).map_err(StoreError::new)
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.delete_inner(id).map_err(StoreError::new)
    }
}

// ── Row mapping helpers ─────────────────────────────────────────────────────

/// Scalar movie columns; genre links are attached by a second query.
struct MovieRow {
    id: Uuid,
    title: String,
    year: i32,
    director: String,
    duration: u32,
    poster: String,
    rate: f64,
}

impl MovieRow {
    fn into_movie(self, genre: Vec<Genre>) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            poster: self.poster,
            genre,
            rate: self.rate,
        }
    }
}

fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<MovieRow> {
    Ok(MovieRow {
        id: row.get(0)?,
        title: row.get(1)?,
        year: row.get(2)?,
        director: row.get(3)?,
        duration: row.get(4)?,
        poster: row.get(5)?,
        rate: row.get(6)?,
    })
}

/// Find a genre id by name (case-insensitive).
fn find_genre_id(conn: &Connection, name: &str) -> Result<Option<i64>, DbError> {
    let mut stmt =
        conn.prepare("SELECT id FROM genres WHERE LOWER(name) = LOWER(?1) LIMIT 1")?;
    let result = stmt.query_row(params![name], |row| row.get::<_, i64>(0));
    match result {
        Ok(id) => Ok(Some(id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn fetch_movie(conn: &Connection, id: &Uuid) -> Result<Option<Movie>, DbError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, year, director, duration, poster, rate
         FROM movies WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id], row_to_movie);
    let row = match result {
        Ok(r) => r,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let genre = genres_for(conn, &row.id)?;
    Ok(Some(row.into_movie(genre)))
}

/// Genre names linked to a movie, in link insertion order.
fn genres_for(conn: &Connection, movie_id: &Uuid) -> Result<Vec<Genre>, DbError> {
    let mut stmt = conn.prepare(
        "SELECT g.name FROM movie_genres mg
         JOIN genres g ON g.id = mg.genre_id
         WHERE mg.movie_id = ?1
         ORDER BY mg.rowid",
    )?;
    let names = stmt.query_map(params![movie_id], |row| row.get::<_, String>(0))?;
    let mut genres = Vec::new();
    for name in names {
        let name = name?;
        let genre = Genre::from_name(&name).ok_or(DbError::UnknownGenre(name))?;
        genres.push(genre);
    }
    Ok(genres)
}
