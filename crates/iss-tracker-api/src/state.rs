//! Shared application state.

use std::sync::Arc;

use iss_tracker_core::clock::Clock;
use iss_tracker_core::source::DocumentSource;
use iss_tracker_core::store::RecordStore;
use tokio::sync::Mutex;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded dataset.
    pub store: Arc<RecordStore>,
    /// Where reloads fetch documents from.
    pub document_source: Arc<dyn DocumentSource>,
    /// Clock used to stamp reloads.
    pub clock: Arc<dyn Clock>,
    /// Serializes reloads; queries never take it.
    pub reload_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Create new application state around an existing store.
    #[must_use]
    pub fn new(
        store: Arc<RecordStore>,
        document_source: Arc<dyn DocumentSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            document_source,
            clock,
            reload_lock: Arc::new(Mutex::new(())),
        }
    }
}
