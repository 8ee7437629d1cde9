//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use iss_tracker_feed::location::DocumentLocation;

use crate::error::AppError;

/// Published ISS ephemeris used when `ISS_OEM_SOURCE` is unset.
pub const DEFAULT_OEM_SOURCE: &str = "https://nasa-public-data.s3.amazonaws.com/iss-coords/2022-02-13/ISS_OEM/ISS.OEM_J2K_EPH.xml";

/// Published sighting table used when `ISS_SIGHTINGS_SOURCE` is unset.
pub const DEFAULT_SIGHTINGS_SOURCE: &str = "https://nasa-public-data.s3.amazonaws.com/iss-coords/2022-02-13/ISS_sightings/XMLsightingData_citiesUSA10.xml";

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Where the trajectory document is read from.
    pub trajectory_source: DocumentLocation,
    /// Where the sighting document is read from.
    pub sightings_source: DocumentLocation,
    /// Whether to attempt a reload before serving.
    pub load_on_startup: bool,
    /// Timeout for each HTTP document request.
    pub fetch_timeout: Duration,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

        let trajectory_source = DocumentLocation::parse(
            &lookup("ISS_OEM_SOURCE").unwrap_or_else(|| DEFAULT_OEM_SOURCE.to_string()),
        );
        let sightings_source = DocumentLocation::parse(
            &lookup("ISS_SIGHTINGS_SOURCE").unwrap_or_else(|| DEFAULT_SIGHTINGS_SOURCE.to_string()),
        );

        let load_on_startup = match lookup("ISS_LOAD_ON_STARTUP").as_deref() {
            None => false,
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                AppError::Config(format!(
                    "ISS_LOAD_ON_STARTUP must be true or false, got {raw:?}"
                ))
            })?,
        };

        let timeout_secs: u64 = lookup("ISS_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|e| {
                AppError::Config(format!("ISS_FETCH_TIMEOUT_SECS must be a whole number: {e}"))
            })?;
        if timeout_secs == 0 {
            return Err(AppError::Config(
                "ISS_FETCH_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            trajectory_source,
            sightings_source,
            load_on_startup,
            fetch_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a valid
    /// socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
