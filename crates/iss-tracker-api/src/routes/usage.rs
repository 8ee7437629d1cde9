//! Plain-text usage guide served at the root path.

use axum::{Router, routing::get};

use crate::state::AppState;

/// Every route the service exposes: method, path, description.
const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/", "this usage guide"),
    ("GET", "/health", "service status and loaded record counts"),
    (
        "POST",
        "/read_data",
        "fetch the trajectory and sighting documents and load them",
    ),
    ("GET", "/epochs", "all epochs in the trajectory data"),
    ("GET", "/epochs/{epoch}", "state vector at one epoch"),
    ("GET", "/countries", "all countries in the sighting data"),
    ("GET", "/countries/{country}", "all sightings in a country"),
    (
        "GET",
        "/countries/{country}/regions",
        "all regions in a country",
    ),
    (
        "GET",
        "/countries/{country}/regions/{region}",
        "all sightings in a region",
    ),
    (
        "GET",
        "/countries/{country}/regions/{region}/cities",
        "all cities in a region",
    ),
    (
        "GET",
        "/countries/{country}/regions/{region}/cities/{city}",
        "all sightings for a city",
    ),
];

/// Renders the usage guide.
#[must_use]
pub fn usage_text() -> String {
    let width = ROUTES
        .iter()
        .map(|(method, path, _)| method.len() + 1 + path.len())
        .max()
        .unwrap_or(0);

    let mut text = String::from("ISS Tracker\n\nLoad data with POST /read_data before querying.\n\nRoutes:\n");
    for (method, path, description) in ROUTES {
        let route = format!("{method} {path}");
        text.push_str(&format!("  {route:<width$}  {description}\n"));
    }
    text
}

/// GET /
async fn usage() -> String {
    usage_text()
}

/// Returns the usage router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(usage))
}
