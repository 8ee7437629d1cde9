//! Builders for records with plausible payloads.

use iss_tracker_core::record::{SightingEvent, StateComponent, TrajectorySample};

/// A trajectory sample at `epoch` with fixed position and velocity.
#[must_use]
pub fn trajectory_sample(epoch: &str) -> TrajectorySample {
    TrajectorySample {
        epoch: epoch.to_owned(),
        x: StateComponent::new("-5097.51", "km"),
        y: StateComponent::new("1610.30", "km"),
        z: StateComponent::new("-4055.85", "km"),
        x_dot: StateComponent::new("-4.11", "km/s"),
        y_dot: StateComponent::new("-4.61", "km/s"),
        z_dot: StateComponent::new("3.19", "km/s"),
    }
}

/// A sighting over `city` with a fixed pass description.
#[must_use]
pub fn sighting_event(country: &str, region: &str, city: &str) -> SightingEvent {
    SightingEvent {
        country: country.to_owned(),
        region: region.to_owned(),
        city: city.to_owned(),
        spacecraft: "ISS".to_owned(),
        sighting_date: "Thu Feb 17/06:20 AM".to_owned(),
        duration_minutes: "1".to_owned(),
        max_elevation: "11".to_owned(),
        enters: "10 above S".to_owned(),
        exits: "10 above SSE".to_owned(),
        utc_offset: "-6.0".to_owned(),
        utc_time: "12:20".to_owned(),
        utc_date: "Feb 17, 2022".to_owned(),
    }
}
