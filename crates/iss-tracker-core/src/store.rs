//! In-memory record store.
//!
//! The store holds at most one [`Snapshot`]. A reload builds a complete new
//! snapshot and swaps it in with a single assignment, so readers observe
//! either the previous dataset or the new one, never a mix.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::record::{SightingEvent, TrajectorySample};

/// One fully loaded dataset. Immutable once built.
#[derive(Debug)]
pub struct Snapshot {
    trajectory_samples: Vec<TrajectorySample>,
    sighting_events: Vec<SightingEvent>,
    loaded_at: DateTime<Utc>,
}

impl Snapshot {
    /// Trajectory samples in document order.
    #[must_use]
    pub fn trajectory_samples(&self) -> &[TrajectorySample] {
        &self.trajectory_samples
    }

    /// Sighting events in document order.
    #[must_use]
    pub fn sighting_events(&self) -> &[SightingEvent] {
        &self.sighting_events
    }

    /// When this snapshot was loaded.
    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Owned store shared by the query engine and the HTTP layer.
#[derive(Debug, Default)]
pub struct RecordStore {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl RecordStore {
    /// Creates an empty, unloaded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces both sequences and marks the store loaded.
    pub fn reload(
        &self,
        trajectory_samples: Vec<TrajectorySample>,
        sighting_events: Vec<SightingEvent>,
        loaded_at: DateTime<Utc>,
    ) {
        let snapshot = Arc::new(Snapshot {
            trajectory_samples,
            sighting_events,
            loaded_at,
        });
        // The guarded value is always a whole snapshot, so a poisoned lock
        // is safe to reuse.
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
    }

    /// Returns `true` once a reload has succeeded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns a shared view of the current snapshot, or `None` if unloaded.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
