//! Data model types for the movie catalog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Movie ───────────────────────────────────────────────────────────────────

/// A catalog entry. Every persisted movie satisfies the full schema;
/// a partially valid record is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Assigned by the store at creation, immutable thereafter.
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Runtime in minutes.
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

// ── Genre ───────────────────────────────────────────────────────────────────

/// The fixed genre vocabulary.
///
/// Input validation requires the exact canonical names; list filters match
/// case-insensitively via [`Genre::parse_loose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Terror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Crime,
    Animation,
    Biography,
}

impl Genre {
    /// All genres, in the order they are seeded into the database.
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Terror,
        Genre::SciFi,
        Genre::Crime,
        Genre::Animation,
        Genre::Biography,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Terror => "Terror",
            Self::SciFi => "Sci-Fi",
            Self::Crime => "Crime",
            Self::Animation => "Animation",
            Self::Biography => "Biography",
        }
    }

    /// Exact-name lookup, used by the schema validator.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.as_str() == name)
    }

    /// Case-insensitive lookup, used by list filters.
    pub fn parse_loose(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(name))
    }
}

// ── Validated payloads ──────────────────────────────────────────────────────

/// A fully validated creation payload. The store assigns the id and turns
/// the draft into a persisted [`Movie`].
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

impl MovieDraft {
    /// Materialize the draft under the given id.
    pub fn into_movie(self, id: Uuid) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            poster: self.poster,
            genre: self.genre,
            rate: self.rate,
        }
    }
}

/// A validated partial update. Absent fields leave the stored record
/// untouched; update statements are assembled from this known field set,
/// never from free-form payload introspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// True when no field is supplied; such a patch performs no write.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
            && self.rate.is_none()
    }
}
