//! Commands accepted by the dataset context.

use iss_tracker_core::command::Command;
use uuid::Uuid;

/// Command to fetch both documents and replace the loaded dataset.
#[derive(Debug, Clone)]
pub struct ReloadDataset {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ReloadDataset {
    fn command_type(&self) -> &'static str {
        "dataset.reload"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
