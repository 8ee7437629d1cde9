//! `DocumentSource` backed by XML documents read over HTTP or from disk.

use std::time::Duration;

use async_trait::async_trait;
use iss_tracker_core::error::FetchError;
use iss_tracker_core::record::{SightingEvent, TrajectorySample};
use iss_tracker_core::source::DocumentSource;
use tracing::{debug, warn};

use crate::location::DocumentLocation;
use crate::{oem, sightings};

/// User agent sent with every HTTP request.
const USER_AGENT: &str = concat!("iss-tracker/", env!("CARGO_PKG_VERSION"));

/// Default timeout for a single document request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the trajectory and sighting documents from their locations and
/// parses them.
#[derive(Debug, Clone)]
pub struct XmlDocumentSource {
    client: reqwest::Client,
    trajectory: DocumentLocation,
    sightings: DocumentLocation,
}

impl XmlDocumentSource {
    /// Creates a source reading from `trajectory` and `sightings`, with
    /// `timeout` applied to each HTTP request.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be built.
    pub fn new(
        trajectory: DocumentLocation,
        sightings: DocumentLocation,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            trajectory,
            sightings,
        })
    }

    async fn read(&self, location: &DocumentLocation) -> Result<String, FetchError> {
        let bytes = match location {
            DocumentLocation::Url(url) => self.get(url).await?,
            DocumentLocation::File(path) => tokio::fs::read(path).await.map_err(|e| {
                warn!(path = %path.display(), error = %e, "failed to read document");
                FetchError::Io(format!("failed to read {}: {e}", path.display()))
            })?,
        };
        debug!(location = %location, bytes = bytes.len(), "document read");

        String::from_utf8(bytes)
            .map_err(|e| FetchError::Parse(format!("{location} is not valid UTF-8: {e}")))
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(
                url = url,
                error = %e,
                is_connect = e.is_connect(),
                is_timeout = e.is_timeout(),
                "HTTP request failed"
            );
            FetchError::Http(format!("request to {url} failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = url, status = status.as_u16(), "HTTP error status");
            return Err(FetchError::Http(format!(
                "HTTP {} from {url}",
                status.as_u16()
            )));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| FetchError::Http(format!("failed to read response from {url}: {e}")))
    }
}

#[async_trait]
impl DocumentSource for XmlDocumentSource {
    async fn fetch_trajectory(&self) -> Result<Vec<TrajectorySample>, FetchError> {
        let xml = self.read(&self.trajectory).await?;
        oem::parse_trajectory(&xml)
    }

    async fn fetch_sightings(&self) -> Result<Vec<SightingEvent>, FetchError> {
        let xml = self.read(&self.sightings).await?;
        sightings::parse_sightings(&xml)
    }
}
