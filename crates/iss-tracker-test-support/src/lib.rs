//! Shared test doubles and record builders for the ISS tracker.

mod clock;
mod records;
mod source;

pub use clock::FixedClock;
pub use records::{sighting_event, trajectory_sample};
pub use source::{FailingDocumentSource, FailingSightingsDocumentSource, StaticDocumentSource};
