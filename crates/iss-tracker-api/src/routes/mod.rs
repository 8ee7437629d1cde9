//! Route modules organized by resource.

pub mod data;
pub mod epochs;
pub mod health;
pub mod sightings;
pub mod usage;
