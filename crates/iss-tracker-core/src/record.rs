//! Typed trajectory and sighting records.
//!
//! Records are built once when a document is parsed and never mutated
//! afterwards. Payload fields carry the document's text verbatim.

use serde::{Deserialize, Serialize};

/// A single state-vector component together with its units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateComponent {
    /// The value exactly as it appeared in the document.
    pub value: String,
    /// Units attribute, e.g. `km` or `km/s`.
    pub units: String,
}

impl StateComponent {
    /// Creates a component from a raw value and its units.
    #[must_use]
    pub fn new(value: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            units: units.into(),
        }
    }
}

/// One instant of spacecraft position and velocity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Timestamp identifying the sample, e.g. `2022-042T12:00:00.000Z`.
    pub epoch: String,
    /// Position along X.
    pub x: StateComponent,
    /// Position along Y.
    pub y: StateComponent,
    /// Position along Z.
    pub z: StateComponent,
    /// Velocity along X.
    pub x_dot: StateComponent,
    /// Velocity along Y.
    pub y_dot: StateComponent,
    /// Velocity along Z.
    pub z_dot: StateComponent,
}

/// One predicted visible pass over a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightingEvent {
    /// Country the city belongs to.
    pub country: String,
    /// Region (state, province) within the country.
    pub region: String,
    /// City the pass is visible from.
    pub city: String,
    /// Name of the spacecraft.
    pub spacecraft: String,
    /// Local date and time of the pass.
    pub sighting_date: String,
    /// How long the pass is visible.
    pub duration_minutes: String,
    /// Maximum elevation above the horizon, in degrees.
    pub max_elevation: String,
    /// Where the spacecraft appears.
    pub enters: String,
    /// Where the spacecraft disappears.
    pub exits: String,
    /// Offset of local time from UTC, in hours.
    pub utc_offset: String,
    /// UTC time of the pass.
    pub utc_time: String,
    /// UTC date of the pass.
    pub utc_date: String,
}
