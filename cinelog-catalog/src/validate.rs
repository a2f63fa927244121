//! Schema validation for movie payloads.
//!
//! Validation runs over the raw JSON value rather than a deserialized
//! struct so every violated field is reported, type mismatches included,
//! instead of the first serde failure. Unknown fields are ignored.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::types::{Genre, MovieDraft, MoviePatch};

pub const YEAR_MIN: i32 = 1900;
pub const YEAR_MAX: i32 = 2025;

/// Rate assigned when a creation payload omits it.
pub const DEFAULT_RATE: f64 = 5.0;

/// One violated constraint. `path` names the offending field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub path: Vec<String>,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.to_string()],
            message: message.into(),
        }
    }

    fn not_an_object() -> Self {
        Self {
            path: Vec::new(),
            message: "expected a JSON object".to_string(),
        }
    }
}

/// Validate a full creation payload.
///
/// Every schema field must be present and individually valid; `rate`
/// defaults to 5 when omitted. On failure, returns one entry per violated
/// field.
pub fn validate_new(input: &Value) -> Result<MovieDraft, Vec<FieldError>> {
    let Some(obj) = input.as_object() else {
        return Err(vec![FieldError::not_an_object()]);
    };

    let mut errors = Vec::new();
    let title = field(obj.get("title"), "title", true, check_title, &mut errors);
    let year = field(obj.get("year"), "year", true, check_year, &mut errors);
    let director = field(
        obj.get("director"),
        "director",
        true,
        check_director,
        &mut errors,
    );
    let duration = field(
        obj.get("duration"),
        "duration",
        true,
        check_duration,
        &mut errors,
    );
    let poster = field(obj.get("poster"), "poster", true, check_poster, &mut errors);
    let genre = field(obj.get("genre"), "genre", true, check_genre, &mut errors);
    let rate = field(obj.get("rate"), "rate", false, check_rate, &mut errors);

    match (title, year, director, duration, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre))
            if errors.is_empty() =>
        {
            Ok(MovieDraft {
                title,
                year,
                director,
                duration,
                poster,
                genre,
                rate: rate.unwrap_or(DEFAULT_RATE),
            })
        }
        _ => Err(errors),
    }
}

/// Validate a partial update payload.
///
/// Per-field rules apply only to fields present in the payload; absent
/// fields stay `None` and `rate` is not defaulted.
pub fn validate_patch(input: &Value) -> Result<MoviePatch, Vec<FieldError>> {
    let Some(obj) = input.as_object() else {
        return Err(vec![FieldError::not_an_object()]);
    };

    let mut errors = Vec::new();
    let patch = MoviePatch {
        title: field(obj.get("title"), "title", false, check_title, &mut errors),
        year: field(obj.get("year"), "year", false, check_year, &mut errors),
        director: field(
            obj.get("director"),
            "director",
            false,
            check_director,
            &mut errors,
        ),
        duration: field(
            obj.get("duration"),
            "duration",
            false,
            check_duration,
            &mut errors,
        ),
        poster: field(obj.get("poster"), "poster", false, check_poster, &mut errors),
        genre: field(obj.get("genre"), "genre", false, check_genre, &mut errors),
        rate: field(obj.get("rate"), "rate", false, check_rate, &mut errors),
    };

    if errors.is_empty() { Ok(patch) } else { Err(errors) }
}

/// Run one field check, recording a [`FieldError`] on violation or on a
/// missing required field.
fn field<T>(
    value: Option<&Value>,
    name: &str,
    required: bool,
    check: fn(&Value) -> Result<T, String>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match value {
        Some(v) => match check(v) {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                errors.push(FieldError::new(name, message));
                None
            }
        },
        None => {
            if required {
                errors.push(FieldError::new(name, format!("{name} is required")));
            }
            None
        }
    }
}

// ── Per-field rules ─────────────────────────────────────────────────────────

fn check_title(v: &Value) -> Result<String, String> {
    let title = v.as_str().ok_or_else(|| "title must be a string".to_string())?;
    if title.is_empty() {
        return Err("title must not be empty".to_string());
    }
    Ok(title.to_string())
}

fn check_year(v: &Value) -> Result<i32, String> {
    let year = v.as_i64().ok_or_else(|| "year must be an integer".to_string())?;
    if !(i64::from(YEAR_MIN)..=i64::from(YEAR_MAX)).contains(&year) {
        return Err(format!("year must be between {YEAR_MIN} and {YEAR_MAX}"));
    }
    Ok(year as i32)
}

fn check_director(v: &Value) -> Result<String, String> {
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| "director must be a string".to_string())
}

fn check_duration(v: &Value) -> Result<u32, String> {
    let minutes = v
        .as_i64()
        .ok_or_else(|| "duration must be an integer".to_string())?;
    u32::try_from(minutes)
        .ok()
        .filter(|m| *m > 0)
        .ok_or_else(|| "duration must be a positive integer".to_string())
}

fn check_poster(v: &Value) -> Result<String, String> {
    let poster = v.as_str().ok_or_else(|| "poster must be a string".to_string())?;
    Url::parse(poster).map_err(|_| "poster must be a valid URL".to_string())?;
    Ok(poster.to_string())
}

fn check_genre(v: &Value) -> Result<Vec<Genre>, String> {
    let entries = v
        .as_array()
        .ok_or_else(|| "genre must be an array".to_string())?;
    if entries.is_empty() {
        return Err("at least one genre is required".to_string());
    }
    let mut genres = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry
            .as_str()
            .ok_or_else(|| "genre entries must be strings".to_string())?;
        let genre = Genre::from_name(name).ok_or_else(|| format!("unknown genre '{name}'"))?;
        genres.push(genre);
    }
    Ok(genres)
}

fn check_rate(v: &Value) -> Result<f64, String> {
    let rate = v.as_f64().ok_or_else(|| "rate must be a number".to_string())?;
    if !(0.0..=10.0).contains(&rate) {
        return Err("rate must be between 0 and 10".to_string());
    }
    Ok(rate)
}
