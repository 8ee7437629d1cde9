//! ISS Tracker API server entry point.

use std::sync::Arc;

use axum::Router;
use iss_tracker_core::clock::SystemClock;
use iss_tracker_core::store::RecordStore;
use iss_tracker_feed::xml_document_source::XmlDocumentSource;
use iss_tracker_query::application::command_handlers;
use iss_tracker_query::domain::commands::ReloadDataset;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use iss_tracker_api::config::AppConfig;
use iss_tracker_api::error::AppError;
use iss_tracker_api::routes;
use iss_tracker_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting ISS tracker API server");

    // Read configuration from environment.
    let config = AppConfig::from_env()?;
    tracing::info!(
        trajectory_source = %config.trajectory_source,
        sightings_source = %config.sightings_source,
        "document sources configured"
    );

    let source = XmlDocumentSource::new(
        config.trajectory_source.clone(),
        config.sightings_source.clone(),
        config.fetch_timeout,
    )?;

    // Build application state.
    let app_state = AppState::new(
        Arc::new(RecordStore::new()),
        Arc::new(source),
        Arc::new(SystemClock),
    );

    if config.load_on_startup {
        let command = ReloadDataset {
            correlation_id: Uuid::new_v4(),
        };
        // A failed initial load is not fatal; POST /read_data can retry.
        if let Err(e) = command_handlers::handle_reload(
            &command,
            app_state.document_source.as_ref(),
            app_state.clock.as_ref(),
            &app_state.store,
        )
        .await
        {
            tracing::warn!(error = %e, "initial load failed; serving without data");
        }
    }

    // Build router.
    let app = Router::new()
        .merge(routes::usage::router())
        .merge(routes::health::router())
        .merge(routes::data::router())
        .merge(routes::epochs::router())
        .merge(routes::sightings::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
