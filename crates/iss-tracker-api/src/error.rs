//! ISS Tracker — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use iss_tracker_core::error::{FetchError, QueryError, Segment};
use serde::Serialize;
use thiserror::Error;

/// Message returned for every query made before the first reload.
pub const NOT_LOADED_MESSAGE: &str =
    "data has not been loaded; send POST /read_data to load it, then retry";

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The document source could not be constructed.
    #[error("document source error: {0}")]
    Source(#[from] FetchError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around query and fetch errors that implements
/// `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// A lookup did not produce a result.
    Query(QueryError),
    /// A reload could not fetch or parse its documents.
    Fetch(FetchError),
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self::Query(err)
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

fn not_found_code(segment: Segment) -> &'static str {
    match segment {
        Segment::Epoch => "epoch_not_found",
        Segment::Country => "country_not_found",
        Segment::Region => "region_not_found",
        Segment::City => "city_not_found",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            Self::Query(err) => match err {
                QueryError::NotLoaded => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "data_not_loaded",
                    NOT_LOADED_MESSAGE.to_owned(),
                ),
                QueryError::NotFound { segment, .. } => {
                    (StatusCode::NOT_FOUND, not_found_code(*segment), err.to_string())
                }
            },
            Self::Fetch(err) => (StatusCode::BAD_GATEWAY, "fetch_error", err.to_string()),
        };

        (status, Json(ErrorBody { error, message })).into_response()
    }
}
