//! ISS Tracker Feed — fetches and parses the published XML documents.
//!
//! The trajectory comes from a CCSDS Orbit Ephemeris Message (OEM) and the
//! sightings from a `visible_passes` table. Either may be read over HTTP or
//! from a local file.

pub mod location;
pub mod oem;
pub mod sightings;
pub mod xml_document_source;
