//! Parser for the CCSDS OEM trajectory document.
//!
//! Only `ndm/oem/body/segment/data/stateVector` is read; header, metadata
//! and `COMMENT` elements are skipped.

use iss_tracker_core::error::FetchError;
use iss_tracker_core::record::{StateComponent, TrajectorySample};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawNdm {
    oem: RawOem,
}

#[derive(Debug, Deserialize)]
struct RawOem {
    body: RawBody,
}

#[derive(Debug, Deserialize)]
struct RawBody {
    segment: RawSegment,
}

#[derive(Debug, Deserialize)]
struct RawSegment {
    data: RawData,
}

#[derive(Debug, Deserialize)]
struct RawData {
    #[serde(rename = "stateVector", default)]
    state_vectors: Vec<RawStateVector>,
}

#[derive(Debug, Deserialize)]
struct RawStateVector {
    #[serde(rename = "EPOCH")]
    epoch: String,
    #[serde(rename = "X")]
    x: RawComponent,
    #[serde(rename = "Y")]
    y: RawComponent,
    #[serde(rename = "Z")]
    z: RawComponent,
    #[serde(rename = "X_DOT")]
    x_dot: RawComponent,
    #[serde(rename = "Y_DOT")]
    y_dot: RawComponent,
    #[serde(rename = "Z_DOT")]
    z_dot: RawComponent,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    #[serde(rename = "@units", default)]
    units: String,
    #[serde(rename = "$text")]
    value: String,
}

impl From<RawComponent> for StateComponent {
    fn from(raw: RawComponent) -> Self {
        StateComponent::new(raw.value, raw.units)
    }
}

impl From<RawStateVector> for TrajectorySample {
    fn from(raw: RawStateVector) -> Self {
        TrajectorySample {
            epoch: raw.epoch,
            x: raw.x.into(),
            y: raw.y.into(),
            z: raw.z.into(),
            x_dot: raw.x_dot.into(),
            y_dot: raw.y_dot.into(),
            z_dot: raw.z_dot.into(),
        }
    }
}

/// Parses an OEM document into trajectory samples in document order.
///
/// # Errors
///
/// Returns `FetchError::Parse` if the document is not well-formed XML or
/// lacks the expected structure.
pub fn parse_trajectory(xml: &str) -> Result<Vec<TrajectorySample>, FetchError> {
    let ndm: RawNdm = quick_xml::de::from_str(xml)
        .map_err(|e| FetchError::Parse(format!("invalid OEM document: {e}")))?;
    Ok(ndm
        .oem
        .body
        .segment
        .data
        .state_vectors
        .into_iter()
        .map(TrajectorySample::from)
        .collect())
}
