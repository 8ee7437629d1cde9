//! Integration tests for `XmlDocumentSource` reading local fixtures.

use std::path::PathBuf;
use std::time::Duration;

use iss_tracker_core::error::FetchError;
use iss_tracker_core::source::DocumentSource;
use iss_tracker_feed::location::DocumentLocation;
use iss_tracker_feed::xml_document_source::{DEFAULT_TIMEOUT, XmlDocumentSource};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn fixture(name: &str) -> DocumentLocation {
    DocumentLocation::File(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name),
    )
}

fn fixture_source() -> XmlDocumentSource {
    XmlDocumentSource::new(
        fixture("ISS.OEM_J2K_EPH.xml"),
        fixture("XMLsightingData_citiesUSA10.xml"),
        DEFAULT_TIMEOUT,
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_trajectory_from_file() {
    let source = fixture_source();

    let samples = source.fetch_trajectory().await.unwrap();

    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0].epoch, "2022-042T12:00:00.000Z");
    assert_eq!(samples[2].epoch, "2022-042T12:08:00.000Z");
    assert_eq!(samples[0].x.value, "-5097.51711371908");
    assert_eq!(samples[0].x_dot.units, "km/s");
}

#[tokio::test]
async fn test_fetch_sightings_from_file() {
    let source = fixture_source();

    let events = source.fetch_sightings().await.unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(events[0].region, "Texas");
    let cities: Vec<&str> = events.iter().map(|e| e.city.as_str()).collect();
    assert_eq!(cities, ["Austin", "Austin", "Houston", "Dayton"]);
}

/// Serves one connection with a bare `404 Not Found` and returns the URL.
async fn serve_not_found_once() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = [0_u8; 1024];
        let _ = stream.read(&mut request).await;
        stream
            .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        stream.shutdown().await.unwrap();
    });
    format!("http://{addr}/ISS.OEM_J2K_EPH.xml")
}

#[tokio::test]
async fn test_missing_file_is_an_io_error() {
    let source = XmlDocumentSource::new(
        fixture("does-not-exist.xml"),
        fixture("XMLsightingData_citiesUSA10.xml"),
        DEFAULT_TIMEOUT,
    )
    .unwrap();

    let result = source.fetch_trajectory().await;

    assert!(matches!(result, Err(FetchError::Io(_))));
}

#[tokio::test]
async fn test_sighting_table_is_not_an_ephemeris() {
    let source = XmlDocumentSource::new(
        fixture("XMLsightingData_citiesUSA10.xml"),
        fixture("ISS.OEM_J2K_EPH.xml"),
        DEFAULT_TIMEOUT,
    )
    .unwrap();

    assert!(matches!(
        source.fetch_trajectory().await,
        Err(FetchError::Parse(_))
    ));
}

#[tokio::test]
async fn test_unreachable_url_is_an_http_error() {
    // Port 9 on localhost has nothing listening in test environments.
    let source = XmlDocumentSource::new(
        DocumentLocation::Url("http://127.0.0.1:9/ISS.OEM_J2K_EPH.xml".to_owned()),
        fixture("XMLsightingData_citiesUSA10.xml"),
        Duration::from_secs(2),
    )
    .unwrap();

    assert!(matches!(
        source.fetch_trajectory().await,
        Err(FetchError::Http(_))
    ));
}

#[tokio::test]
async fn test_error_status_is_an_http_error() {
    // Arrange
    let url = serve_not_found_once().await;
    let source = XmlDocumentSource::new(
        DocumentLocation::Url(url),
        fixture("XMLsightingData_citiesUSA10.xml"),
        Duration::from_secs(5),
    )
    .unwrap();

    // Act
    let result = source.fetch_trajectory().await;

    // Assert
    match result {
        Err(FetchError::Http(message)) => assert!(message.contains("404"), "{message}"),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_utf8_document_is_a_parse_error() {
    // Arrange
    let source = XmlDocumentSource::new(
        fixture("not_utf8.xml"),
        fixture("XMLsightingData_citiesUSA10.xml"),
        DEFAULT_TIMEOUT,
    )
    .unwrap();

    // Act
    let result = source.fetch_trajectory().await;

    // Assert
    match result {
        Err(FetchError::Parse(message)) => assert!(message.contains("UTF-8"), "{message}"),
        other => panic!("expected Parse error, got {other:?}"),
    }
}
