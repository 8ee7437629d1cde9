//! Error taxonomy for queries and document fetches.

use std::fmt;

use thiserror::Error;

/// The level of the lookup hierarchy at which a scan found nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Trajectory sample epoch.
    Epoch,
    /// Sighting country.
    Country,
    /// Sighting region within a country.
    Region,
    /// Sighting city within a region.
    City,
}

impl Segment {
    /// Lowercase name of the segment, as used in messages and error codes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Epoch => "epoch",
            Self::Country => "country",
            Self::Region => "region",
            Self::City => "city",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a query that did not produce a result.
///
/// Both variants are expected control flow, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No reload has succeeded yet.
    #[error("data has not been loaded")]
    NotLoaded,

    /// The scan at `segment` matched zero records.
    #[error("{segment} not found: {key}")]
    NotFound {
        /// Hierarchy level whose filter matched nothing.
        segment: Segment,
        /// The key value that was looked up.
        key: String,
    },
}

impl QueryError {
    /// Builds a `NotFound` for `segment` and `key`.
    #[must_use]
    pub fn not_found(segment: Segment, key: &str) -> Self {
        Self::NotFound {
            segment,
            key: key.to_owned(),
        }
    }
}

/// The document source could not be retrieved or parsed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request failed or returned a non-success status.
    #[error("http error: {0}")]
    Http(String),

    /// Reading a local document failed.
    #[error("io error: {0}")]
    Io(String),

    /// The document was retrieved but is not in the expected format.
    #[error("parse error: {0}")]
    Parse(String),
}
