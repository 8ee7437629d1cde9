//! ISS Tracker — query engine and reload orchestration.
//!
//! Answers exact-match lookups over the loaded trajectory samples and
//! sighting events, and replaces the dataset from a `DocumentSource`.

pub mod application;
pub mod domain;
