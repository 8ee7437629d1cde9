//! Routes for sighting events, keyed by country, region and city.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use iss_tracker_core::record::SightingEvent;
use iss_tracker_query::application::query_handlers;
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /countries
#[instrument(skip(state))]
async fn list_countries(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(query_handlers::list_countries(&state.store)?))
}

/// GET /countries/{country}
#[instrument(skip(state))]
async fn get_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<Vec<SightingEvent>>, ApiError> {
    Ok(Json(query_handlers::find_by_country(&state.store, &country)?))
}

/// GET /countries/{country}/regions
#[instrument(skip(state))]
async fn list_regions(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(query_handlers::list_regions(&state.store, &country)?))
}

/// GET /countries/{country}/regions/{region}
#[instrument(skip(state))]
async fn get_region(
    State(state): State<AppState>,
    Path((country, region)): Path<(String, String)>,
) -> Result<Json<Vec<SightingEvent>>, ApiError> {
    Ok(Json(query_handlers::find_by_country_region(
        &state.store,
        &country,
        &region,
    )?))
}

/// GET /countries/{country}/regions/{region}/cities
#[instrument(skip(state))]
async fn list_cities(
    State(state): State<AppState>,
    Path((country, region)): Path<(String, String)>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(query_handlers::list_cities(
        &state.store,
        &country,
        &region,
    )?))
}

/// GET /countries/{country}/regions/{region}/cities/{city}
#[instrument(skip(state))]
async fn get_city(
    State(state): State<AppState>,
    Path((country, region, city)): Path<(String, String, String)>,
) -> Result<Json<Vec<SightingEvent>>, ApiError> {
    Ok(Json(query_handlers::find_by_country_region_city(
        &state.store,
        &country,
        &region,
        &city,
    )?))
}

/// Returns the router for sighting lookups.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/{country}", get(get_country))
        .route("/countries/{country}/regions", get(list_regions))
        .route("/countries/{country}/regions/{region}", get(get_region))
        .route(
            "/countries/{country}/regions/{region}/cities",
            get(list_cities),
        )
        .route(
            "/countries/{country}/regions/{region}/cities/{city}",
            get(get_city),
        )
}
