//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use iss_tracker_core::clock::Clock;
use iss_tracker_core::source::DocumentSource;
use iss_tracker_core::store::RecordStore;
use iss_tracker_feed::location::DocumentLocation;
use iss_tracker_feed::xml_document_source::{DEFAULT_TIMEOUT, XmlDocumentSource};
use iss_tracker_test_support::FixedClock;
use tower::ServiceExt;

use iss_tracker_api::routes;
use iss_tracker_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2022, 2, 13, 12, 0, 0).unwrap(),
    ))
}

/// Build application state around `source` with an empty store and a fixed
/// clock. Clone the state to issue several requests against one store.
pub fn test_state(source: Arc<dyn DocumentSource>) -> AppState {
    AppState::new(Arc::new(RecordStore::new()), source, fixed_clock())
}

/// A document source reading the XML fixtures of the feed crate.
pub fn fixture_source() -> Arc<dyn DocumentSource> {
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("iss-tracker-feed")
        .join("tests")
        .join("fixtures");
    let source = XmlDocumentSource::new(
        DocumentLocation::File(fixtures.join("ISS.OEM_J2K_EPH.xml")),
        DocumentLocation::File(fixtures.join("XMLsightingData_citiesUSA10.xml")),
        DEFAULT_TIMEOUT,
    )
    .unwrap();
    Arc::new(source)
}

/// Build the full app router. Uses the same route structure as `main.rs`.
pub fn build_test_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::usage::router())
        .merge(routes::health::router())
        .merge(routes::data::router())
        .merge(routes::epochs::router())
        .merge(routes::sightings::router())
        .with_state(state)
}

/// Send a POST request with no body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get_text(app, uri).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    (status, json)
}

/// Send a GET request and return the response body as text.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}
