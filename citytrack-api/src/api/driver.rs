//! Driver-facing endpoints
//!
//! - POST /api/driver/update-location
//! - POST /api/driver/update-passengers

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use citytrack_common::api::{MessageResponse, UpdateLocationRequest, UpdatePassengersRequest};
use tracing::{info, warn};

use super::non_empty;
use crate::{ApiError, ApiResult, AppState};

/// POST /api/driver/update-location
///
/// Validates and acknowledges a position report. Coordinates are logged but
/// not stored: bus locations are display strings. A coordinate of 0 is valid.
pub async fn update_location(
    State(state): State<AppState>,
    payload: Result<Json<UpdateLocationRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload?;

    let (Some(bus_id), Some(lat), Some(lon)) = (non_empty(req.bus_id), req.lat, req.lon) else {
        warn!("Location update with missing fields");
        return Err(ApiError::BadRequest("busId, lat, lon required".to_string()));
    };

    if !state.store.read().await.contains_bus(&bus_id) {
        warn!("Location update for unknown bus {}", bus_id);
    }

    info!("Bus {} location updated to lat:{}, lon:{}", bus_id, lat, lon);
    Ok(Json(MessageResponse::new("Location updated")))
}

/// POST /api/driver/update-passengers
///
/// Overwrites the passenger count of an existing bus. 0 is accepted; no
/// bounds checks are applied.
pub async fn update_passengers(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePassengersRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload?;

    let (Some(bus_id), Some(passengers)) = (non_empty(req.bus_id), req.passengers) else {
        warn!("Passenger update with missing fields");
        return Err(ApiError::BadRequest("busId and passengers required".to_string()));
    };

    state.store.write().await.set_passengers(&bus_id, passengers)?;

    info!("Bus {} passenger count set to {}", bus_id, passengers);
    Ok(Json(MessageResponse::new("Passenger count updated")))
}

/// Build driver routes
pub fn driver_routes() -> Router<AppState> {
    Router::new()
        .route("/api/driver/update-location", post(update_location))
        .route("/api/driver/update-passengers", post(update_passengers))
}
