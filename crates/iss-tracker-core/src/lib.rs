//! ISS Tracker Core — shared records and the in-memory record store.
//!
//! This crate defines the typed trajectory and sighting records, the
//! process-wide `RecordStore`, and the traits that the query and feed
//! crates plug into. It contains no network or parsing code.

pub mod clock;
pub mod command;
pub mod error;
pub mod record;
pub mod source;
pub mod store;
