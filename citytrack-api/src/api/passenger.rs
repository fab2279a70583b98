//! Passenger-facing endpoints
//!
//! - GET /api/passenger/arrivals
//! - GET /api/passenger/search?route=<number>

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use citytrack_common::api::{BusSummary, SearchQuery};
use citytrack_common::Arrival;
use tracing::{debug, warn};

use super::non_empty;
use crate::{ApiError, ApiResult, AppState};

/// GET /api/passenger/arrivals
///
/// Returns every arrival in seed order.
pub async fn list_arrivals(State(state): State<AppState>) -> Json<Vec<Arrival>> {
    let store = state.store.read().await;
    Json(store.arrivals().to_vec())
}

/// GET /api/passenger/search?route=101
///
/// Returns buses assigned to the given route (exact, case-sensitive match).
/// An unmatched route yields an empty array, not an error.
pub async fn search_buses(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<BusSummary>>> {
    let Query(query) = query?;

    let Some(route) = non_empty(query.route) else {
        warn!("Bus search without route parameter");
        return Err(ApiError::BadRequest("Route query param required".to_string()));
    };

    let store = state.store.read().await;
    let buses: Vec<BusSummary> = store
        .buses_on_route(&route)
        .map(|(number, bus)| BusSummary {
            number: number.to_string(),
            status: bus.status.clone(),
            passengers: bus.passengers,
            location: bus.location.clone(),
            delay: bus.delay,
        })
        .collect();

    debug!("Route {} search matched {} buses", route, buses.len());
    Ok(Json(buses))
}

/// Build passenger routes
pub fn passenger_routes() -> Router<AppState> {
    Router::new()
        .route("/api/passenger/arrivals", get(list_arrivals))
        .route("/api/passenger/search", get(search_buses))
}
