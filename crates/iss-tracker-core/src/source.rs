//! Document source abstraction.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::record::{SightingEvent, TrajectorySample};

/// Retrieves and parses the trajectory and sighting documents.
///
/// Implementations return records in document order.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch and parse the trajectory ephemeris.
    async fn fetch_trajectory(&self) -> Result<Vec<TrajectorySample>, FetchError>;

    /// Fetch and parse the sighting table.
    async fn fetch_sightings(&self) -> Result<Vec<SightingEvent>, FetchError>;
}
