//! HTTP error mapping for the movie API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;

use cinelog_catalog::{FieldError, StoreError};

/// Everything a handler can fail with, mapped onto the HTTP surface.
#[derive(Debug)]
pub enum ApiError {
    /// Payload violated the movie schema: 400 with itemized field errors.
    Invalid(Vec<FieldError>),
    /// The id did not resolve to a movie: 404. Malformed ids land here
    /// too, keeping the not-found contract uniform.
    NotFound,
    /// The backing store failed: 500. Detail goes to the log, never the
    /// client.
    Storage(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Invalid(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": errors }))).into_response()
            }
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Movie not found" })),
            )
                .into_response(),
            Self::Storage(err) => {
                error!("{err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
