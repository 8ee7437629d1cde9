//! Command handlers for the dataset context.
//!
//! Reload fetches both documents before touching the store, so a failure
//! on either fetch leaves the previously loaded snapshot in place.

use chrono::{DateTime, Utc};
use iss_tracker_core::clock::Clock;
use iss_tracker_core::command::Command;
use iss_tracker_core::error::FetchError;
use iss_tracker_core::source::DocumentSource;
use iss_tracker_core::store::RecordStore;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::commands::ReloadDataset;

/// Result of a successful reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReloadOutcome {
    /// The correlation ID of the reload command.
    pub correlation_id: Uuid,
    /// Number of trajectory samples now loaded.
    pub trajectory_samples: usize,
    /// Number of sighting events now loaded.
    pub sighting_events: usize,
    /// Timestamp recorded on the new snapshot.
    pub loaded_at: DateTime<Utc>,
}

/// Handles the `ReloadDataset` command: fetches the trajectory and sighting
/// documents and, only if both succeed, replaces the store's contents.
///
/// # Errors
///
/// Returns the `FetchError` of the first fetch that failed. The store is
/// left unchanged in that case.
pub async fn handle_reload(
    command: &ReloadDataset,
    source: &dyn DocumentSource,
    clock: &dyn Clock,
    store: &RecordStore,
) -> Result<ReloadOutcome, FetchError> {
    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        "fetching documents"
    );

    let fetched = async {
        let trajectory_samples = source.fetch_trajectory().await?;
        let sighting_events = source.fetch_sightings().await?;
        Ok::<_, FetchError>((trajectory_samples, sighting_events))
    }
    .await;

    let (trajectory_samples, sighting_events) = match fetched {
        Ok(records) => records,
        Err(e) => {
            warn!(
                correlation_id = %command.correlation_id(),
                error = %e,
                "reload failed; keeping previous snapshot"
            );
            return Err(e);
        }
    };

    let outcome = ReloadOutcome {
        correlation_id: command.correlation_id(),
        trajectory_samples: trajectory_samples.len(),
        sighting_events: sighting_events.len(),
        loaded_at: clock.now(),
    };
    store.reload(trajectory_samples, sighting_events, outcome.loaded_at);

    info!(
        correlation_id = %outcome.correlation_id,
        trajectory_samples = outcome.trajectory_samples,
        sighting_events = outcome.sighting_events,
        "dataset reloaded"
    );

    Ok(outcome)
}
