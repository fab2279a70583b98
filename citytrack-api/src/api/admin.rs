//! Administrator-facing endpoints
//!
//! - GET /api/admin/fleet
//! - GET /api/admin/routes
//! - POST /api/admin/routes

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use citytrack_common::api::{AddRouteRequest, AddRouteResponse, FleetEntry, RouteSummary};
use tracing::{info, warn};

use super::non_empty;
use crate::{ApiError, ApiResult, AppState};

/// GET /api/admin/fleet
pub async fn list_fleet(State(state): State<AppState>) -> Json<Vec<FleetEntry>> {
    let store = state.store.read().await;
    let fleet = store
        .fleet()
        .map(|(number, bus)| FleetEntry {
            number: number.to_string(),
            route: bus.route.clone(),
            status: bus.status.clone(),
            passengers: bus.passengers,
        })
        .collect();

    Json(fleet)
}

/// GET /api/admin/routes
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let store = state.store.read().await;
    let routes = store
        .routes()
        .map(|(number, route)| RouteSummary {
            number: number.to_string(),
            name: route.name.clone(),
            status: route.status.clone(),
            buses: route.buses.clone(),
        })
        .collect();

    Json(routes)
}

/// POST /api/admin/routes
///
/// Creates an active route with no buses, named by joining `stops` with
/// " ↔ ". A taken route number is rejected with 409.
pub async fn add_route(
    State(state): State<AppState>,
    payload: Result<Json<AddRouteRequest>, JsonRejection>,
) -> ApiResult<Json<AddRouteResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        warn!("Rejected route body: {}", rejection.body_text());
        ApiError::BadRequest("number and stops array required".to_string())
    })?;

    let (Some(number), Some(stops)) = (non_empty(req.number), req.stops) else {
        warn!("Route creation with missing fields");
        return Err(ApiError::BadRequest("number and stops array required".to_string()));
    };

    let route = state.store.write().await.add_route(&number, &stops)?;

    info!("Route {} added: {}", number, route.name);
    Ok(Json(AddRouteResponse {
        message: "Route added".to_string(),
        route,
    }))
}

/// Build administrator routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/fleet", get(list_fleet))
        .route("/api/admin/routes", get(list_routes).post(add_route))
}
