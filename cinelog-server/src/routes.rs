//! Request handlers for the movie REST surface.
//!
//! Each handler is a stateless mapping from request parameters to store
//! operations; all mutation goes through the injected [`MovieStore`].

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use cinelog_catalog::{Movie, MovieFilter, MovieStore, validate_new, validate_patch};

use crate::error::ApiError;

pub type AppState = Arc<dyn MovieStore>;

/// Build the router with all movie routes bound to the given store.
pub fn router(store: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/:id",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
        .with_state(store)
}

async fn index() -> Json<Value> {
    Json(json!({ "message": "cinelog movie catalog" }))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    genre: Option<String>,
}

async fn list_movies(
    State(store): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let filter = MovieFilter { genre: query.genre };
    Ok(Json(store.list(&filter)?))
}

async fn get_movie(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    match store.get(&id)? {
        Some(movie) => Ok(Json(movie)),
        None => Err(ApiError::NotFound),
    }
}

async fn create_movie(
    State(store): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let draft = validate_new(&body).map_err(ApiError::Invalid)?;
    let movie = store.create(draft)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie(
    State(store): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Movie>, ApiError> {
    let patch = validate_patch(&body).map_err(ApiError::Invalid)?;
    match store.update(&id, patch)? {
        Some(movie) => Ok(Json(movie)),
        None => Err(ApiError::NotFound),
    }
}

async fn delete_movie(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if store.delete(&id)? {
        Ok(Json(json!({ "message": "Movie deleted" })))
    } else {
        Err(ApiError::NotFound)
    }
}
