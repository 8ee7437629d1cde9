//! Health check endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use iss_tracker_query::application::query_handlers::{self, DatasetSummary};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Load state and record counts.
    #[serde(flatten)]
    pub dataset: DatasetSummary,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: query_handlers::dataset_summary(&state.store),
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
