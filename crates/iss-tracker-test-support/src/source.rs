//! Test document sources — mock `DocumentSource` implementations for tests.

use async_trait::async_trait;
use iss_tracker_core::error::FetchError;
use iss_tracker_core::record::{SightingEvent, TrajectorySample};
use iss_tracker_core::source::DocumentSource;

/// A document source that returns clones of fixed record sequences.
#[derive(Debug, Clone, Default)]
pub struct StaticDocumentSource {
    trajectory_samples: Vec<TrajectorySample>,
    sighting_events: Vec<SightingEvent>,
}

impl StaticDocumentSource {
    /// Create a source that serves `trajectory_samples` and
    /// `sighting_events` on every fetch.
    #[must_use]
    pub fn new(
        trajectory_samples: Vec<TrajectorySample>,
        sighting_events: Vec<SightingEvent>,
    ) -> Self {
        Self {
            trajectory_samples,
            sighting_events,
        }
    }
}

#[async_trait]
impl DocumentSource for StaticDocumentSource {
    async fn fetch_trajectory(&self) -> Result<Vec<TrajectorySample>, FetchError> {
        Ok(self.trajectory_samples.clone())
    }

    async fn fetch_sightings(&self) -> Result<Vec<SightingEvent>, FetchError> {
        Ok(self.sighting_events.clone())
    }
}

/// A document source whose fetches always fail with an HTTP error.
#[derive(Debug)]
pub struct FailingDocumentSource;

#[async_trait]
impl DocumentSource for FailingDocumentSource {
    async fn fetch_trajectory(&self) -> Result<Vec<TrajectorySample>, FetchError> {
        Err(FetchError::Http("connection refused".into()))
    }

    async fn fetch_sightings(&self) -> Result<Vec<SightingEvent>, FetchError> {
        Err(FetchError::Http("connection refused".into()))
    }
}

/// A document source whose trajectory fetch succeeds but whose sighting
/// fetch fails with a parse error. Used to check that a reload never
/// stores half a dataset.
#[derive(Debug)]
pub struct FailingSightingsDocumentSource {
    trajectory_samples: Vec<TrajectorySample>,
}

impl FailingSightingsDocumentSource {
    /// Create a source that serves `trajectory_samples` and then fails.
    #[must_use]
    pub fn new(trajectory_samples: Vec<TrajectorySample>) -> Self {
        Self { trajectory_samples }
    }
}

#[async_trait]
impl DocumentSource for FailingSightingsDocumentSource {
    async fn fetch_trajectory(&self) -> Result<Vec<TrajectorySample>, FetchError> {
        Ok(self.trajectory_samples.clone())
    }

    async fn fetch_sightings(&self) -> Result<Vec<SightingEvent>, FetchError> {
        Err(FetchError::Parse("missing field `country`".into()))
    }
}
