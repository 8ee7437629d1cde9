//! Dataset reload endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use iss_tracker_query::application::command_handlers::{self, ReloadOutcome};
use iss_tracker_query::domain::commands::ReloadDataset;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /read_data
#[instrument(skip(state))]
async fn read_data(State(state): State<AppState>) -> Result<Json<ReloadOutcome>, ApiError> {
    let command = ReloadDataset {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling reload command");

    let _reloading = state.reload_lock.lock().await;
    let outcome = command_handlers::handle_reload(
        &command,
        state.document_source.as_ref(),
        state.clock.as_ref(),
        &state.store,
    )
    .await?;

    Ok(Json(outcome))
}

/// Returns the router for dataset reloads.
pub fn router() -> Router<AppState> {
    Router::new().route("/read_data", post(read_data))
}
