//! ISS Tracker API — HTTP surface over the trajectory and sighting lookups.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
