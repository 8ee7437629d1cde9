//! Query handlers for the dataset context.
//!
//! Every query reads the store's current snapshot once and scans it
//! linearly. Hierarchical sighting lookups filter one level at a time so
//! that a miss reports the level that failed: a country with no sightings
//! is a different answer from a known country without the requested region.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use iss_tracker_core::error::{QueryError, Segment};
use iss_tracker_core::record::{SightingEvent, TrajectorySample};
use iss_tracker_core::store::{RecordStore, Snapshot};
use serde::Serialize;

/// Counts describing the currently loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Whether a reload has succeeded.
    pub loaded: bool,
    /// When the current snapshot was loaded.
    pub loaded_at: Option<DateTime<Utc>>,
    /// Number of trajectory samples.
    pub trajectory_samples: usize,
    /// Number of sighting events.
    pub sighting_events: usize,
}

fn loaded_snapshot(store: &RecordStore) -> Result<Arc<Snapshot>, QueryError> {
    store.snapshot().ok_or(QueryError::NotLoaded)
}

/// Distinct values in order of first appearance.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_owned)
        .collect()
}

/// Keeps the events for which `field` equals `key`, or reports `segment`
/// as not found when none match.
fn filter_stage<'a, F>(
    events: impl Iterator<Item = &'a SightingEvent>,
    segment: Segment,
    key: &str,
    field: F,
) -> Result<Vec<&'a SightingEvent>, QueryError>
where
    F: Fn(&SightingEvent) -> &str,
{
    let matched: Vec<&SightingEvent> = events.filter(|event| field(event) == key).collect();
    if matched.is_empty() {
        return Err(QueryError::not_found(segment, key));
    }
    Ok(matched)
}

fn by_country<'a>(
    snapshot: &'a Snapshot,
    country: &str,
) -> Result<Vec<&'a SightingEvent>, QueryError> {
    filter_stage(
        snapshot.sighting_events().iter(),
        Segment::Country,
        country,
        |e| e.country.as_str(),
    )
}

fn by_country_region<'a>(
    snapshot: &'a Snapshot,
    country: &str,
    region: &str,
) -> Result<Vec<&'a SightingEvent>, QueryError> {
    let in_country = by_country(snapshot, country)?;
    filter_stage(in_country.into_iter(), Segment::Region, region, |e| {
        e.region.as_str()
    })
}

fn owned(events: Vec<&SightingEvent>) -> Vec<SightingEvent> {
    events.into_iter().cloned().collect()
}

/// Lists every epoch in document order.
///
/// # Errors
///
/// Returns `QueryError::NotLoaded` if no dataset has been loaded.
pub fn list_epochs(store: &RecordStore) -> Result<Vec<String>, QueryError> {
    let snapshot = loaded_snapshot(store)?;
    Ok(snapshot
        .trajectory_samples()
        .iter()
        .map(|sample| sample.epoch.clone())
        .collect())
}

/// Returns the first trajectory sample whose epoch equals `epoch`.
///
/// # Errors
///
/// Returns `QueryError::NotLoaded` if no dataset has been loaded, or
/// `QueryError::NotFound` for `Segment::Epoch` if no sample matches.
pub fn find_epoch(store: &RecordStore, epoch: &str) -> Result<TrajectorySample, QueryError> {
    let snapshot = loaded_snapshot(store)?;
    snapshot
        .trajectory_samples()
        .iter()
        .find(|sample| sample.epoch == epoch)
        .cloned()
        .ok_or_else(|| QueryError::not_found(Segment::Epoch, epoch))
}

/// Lists the distinct countries in order of first appearance.
///
/// # Errors
///
/// Returns `QueryError::NotLoaded` if no dataset has been loaded.
pub fn list_countries(store: &RecordStore) -> Result<Vec<String>, QueryError> {
    let snapshot = loaded_snapshot(store)?;
    Ok(distinct(
        snapshot.sighting_events().iter().map(|e| e.country.as_str()),
    ))
}

/// Returns every sighting in `country`, in document order.
///
/// # Errors
///
/// Returns `QueryError::NotLoaded` if no dataset has been loaded, or
/// `QueryError::NotFound` for `Segment::Country` if nothing matches.
pub fn find_by_country(
    store: &RecordStore,
    country: &str,
) -> Result<Vec<SightingEvent>, QueryError> {
    let snapshot = loaded_snapshot(store)?;
    by_country(&snapshot, country).map(owned)
}

/// Lists the distinct regions of `country` in order of first appearance.
///
/// # Errors
///
/// Returns `QueryError::NotLoaded` if no dataset has been loaded, or
/// `QueryError::NotFound` for `Segment::Country` if the country is unknown.
pub fn list_regions(store: &RecordStore, country: &str) -> Result<Vec<String>, QueryError> {
    let snapshot = loaded_snapshot(store)?;
    let in_country = by_country(&snapshot, country)?;
    Ok(distinct(in_country.iter().map(|e| e.region.as_str())))
}

/// Returns every sighting in `region` of `country`, in document order.
///
/// # Errors
///
/// Returns `QueryError::NotLoaded` if no dataset has been loaded, or
/// `QueryError::NotFound` for the first of `Segment::Country` or
/// `Segment::Region` whose filter matched nothing.
pub fn find_by_country_region(
    store: &RecordStore,
    country: &str,
    region: &str,
) -> Result<Vec<SightingEvent>, QueryError> {
    let snapshot = loaded_snapshot(store)?;
    by_country_region(&snapshot, country, region).map(owned)
}

/// Lists the distinct cities of `region` in `country`, in order of first
/// appearance.
///
/// # Errors
///
/// Returns `QueryError::NotLoaded` if no dataset has been loaded, or
/// `QueryError::NotFound` for the first of `Segment::Country` or
/// `Segment::Region` whose filter matched nothing.
pub fn list_cities(
    store: &RecordStore,
    country: &str,
    region: &str,
) -> Result<Vec<String>, QueryError> {
    let snapshot = loaded_snapshot(store)?;
    let in_region = by_country_region(&snapshot, country, region)?;
    Ok(distinct(in_region.iter().map(|e| e.city.as_str())))
}

/// Returns every sighting for `city` in `region` of `country`, in document
/// order.
///
/// # Errors
///
/// Returns `QueryError::NotLoaded` if no dataset has been loaded, or
/// `QueryError::NotFound` for the first of `Segment::Country`,
/// `Segment::Region` or `Segment::City` whose filter matched nothing.
pub fn find_by_country_region_city(
    store: &RecordStore,
    country: &str,
    region: &str,
    city: &str,
) -> Result<Vec<SightingEvent>, QueryError> {
    let snapshot = loaded_snapshot(store)?;
    let in_region = by_country_region(&snapshot, country, region)?;
    filter_stage(in_region.into_iter(), Segment::City, city, |e| {
        e.city.as_str()
    })
    .map(owned)
}

/// Summarizes the loaded dataset. Never fails; an unloaded store reports
/// `loaded: false` and zero counts.
#[must_use]
pub fn dataset_summary(store: &RecordStore) -> DatasetSummary {
    match store.snapshot() {
        Some(snapshot) => DatasetSummary {
            loaded: true,
            loaded_at: Some(snapshot.loaded_at()),
            trajectory_samples: snapshot.trajectory_samples().len(),
            sighting_events: snapshot.sighting_events().len(),
        },
        None => DatasetSummary {
            loaded: false,
            loaded_at: None,
            trajectory_samples: 0,
            sighting_events: 0,
        },
    }
}
