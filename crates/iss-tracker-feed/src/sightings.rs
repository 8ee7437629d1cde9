//! Parser for the `visible_passes` sighting document.

use iss_tracker_core::error::FetchError;
use iss_tracker_core::record::SightingEvent;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawVisiblePasses {
    #[serde(rename = "visible_pass", default)]
    passes: Vec<RawVisiblePass>,
}

#[derive(Debug, Deserialize)]
struct RawVisiblePass {
    country: String,
    region: String,
    city: String,
    #[serde(default)]
    spacecraft: String,
    #[serde(default)]
    sighting_date: String,
    #[serde(default)]
    duration_minutes: String,
    #[serde(default)]
    max_elevation: String,
    #[serde(default)]
    enters: String,
    #[serde(default)]
    exits: String,
    #[serde(default)]
    utc_offset: String,
    #[serde(default)]
    utc_time: String,
    #[serde(default)]
    utc_date: String,
}

impl From<RawVisiblePass> for SightingEvent {
    fn from(raw: RawVisiblePass) -> Self {
        SightingEvent {
            country: raw.country,
            region: raw.region,
            city: raw.city,
            spacecraft: raw.spacecraft,
            sighting_date: raw.sighting_date,
            duration_minutes: raw.duration_minutes,
            max_elevation: raw.max_elevation,
            enters: raw.enters,
            exits: raw.exits,
            utc_offset: raw.utc_offset,
            utc_time: raw.utc_time,
            utc_date: raw.utc_date,
        }
    }
}

/// Parses a sighting document into events in document order.
///
/// # Errors
///
/// Returns `FetchError::Parse` if the document is not well-formed XML or a
/// pass lacks its `country`, `region` or `city`.
pub fn parse_sightings(xml: &str) -> Result<Vec<SightingEvent>, FetchError> {
    let document: RawVisiblePasses = quick_xml::de::from_str(xml)
        .map_err(|e| FetchError::Parse(format!("invalid sighting document: {e}")))?;
    Ok(document
        .passes
        .into_iter()
        .map(SightingEvent::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(country: &str, region: &str, city: &str, utc_time: &str) -> String {
        format!(
            "<visible_pass>\
               <country>{country}</country>\
               <region>{region}</region>\
               <city>{city}</city>\
               <spacecraft>ISS</spacecraft>\
               <sighting_date>Thu Feb 17/06:20 AM</sighting_date>\
               <duration_minutes>1</duration_minutes>\
               <max_elevation>11</max_elevation>\
               <enters>10 above S</enters>\
               <exits>10 above SSE</exits>\
               <utc_offset>-6.0</utc_offset>\
               <utc_time>{utc_time}</utc_time>\
               <utc_date>Feb 17, 2022</utc_date>\
             </visible_pass>"
        )
    }

    #[test]
    fn test_parse_sightings_reads_passes_in_order() {
        // Arrange
        let xml = format!(
            "<visible_passes>{}{}{}</visible_passes>",
            pass("United_States", "Texas", "Austin", "12:20"),
            pass("United_States", "Texas", "Austin", "13:57"),
            pass("United_States", "Ohio", "Dayton", "01:02"),
        );

        // Act
        let events = parse_sightings(&xml).unwrap();

        // Assert
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].city, "Austin");
        assert_eq!(events[0].utc_time, "12:20");
        assert_eq!(events[1].utc_time, "13:57");
        assert_eq!(events[2].region, "Ohio");
        assert_eq!(events[2].enters, "10 above S");
        assert_eq!(events[2].utc_date, "Feb 17, 2022");
    }

    #[test]
    fn test_parse_sightings_defaults_missing_payload_fields() {
        let xml = "<visible_passes><visible_pass>\
                   <country>United_States</country><region>Texas</region><city>Austin</city>\
                   </visible_pass></visible_passes>";

        let events = parse_sightings(xml).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].spacecraft, "");
        assert_eq!(events[0].max_elevation, "");
    }

    #[test]
    fn test_parse_sightings_requires_location_fields() {
        let xml = "<visible_passes><visible_pass>\
                   <country>United_States</country><city>Austin</city>\
                   </visible_pass></visible_passes>";

        assert!(matches!(parse_sightings(xml), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_parse_sightings_with_no_passes_is_empty() {
        let events = parse_sightings("<visible_passes></visible_passes>").unwrap();

        assert!(events.is_empty());
    }

    #[test]
    fn test_parse_sightings_rejects_malformed_xml() {
        assert!(matches!(
            parse_sightings("<visible_passes><visible_pass>"),
            Err(FetchError::Parse(_))
        ));
    }
}
