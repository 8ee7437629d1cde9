//! Routes for trajectory samples.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use iss_tracker_core::record::TrajectorySample;
use iss_tracker_query::application::query_handlers;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /epochs
#[instrument(skip(state))]
async fn list_epochs(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(query_handlers::list_epochs(&state.store)?))
}

/// GET /epochs/{epoch}
#[instrument(skip(state))]
async fn get_epoch(
    State(state): State<AppState>,
    Path(epoch): Path<String>,
) -> Result<Json<TrajectorySample>, ApiError> {
    Ok(Json(query_handlers::find_epoch(&state.store, &epoch)?))
}

/// Returns the router for trajectory samples.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/epochs", get(list_epochs))
        .route("/epochs/{epoch}", get(get_epoch))
}
