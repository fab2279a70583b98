//! Shared API request/response types
//!
//! Request fields are all optional so that missing values reach the handler
//! and are rejected with the service's own error message.

use serde::{Deserialize, Serialize};

use crate::models::Route;

// ========================================
// Request Types
// ========================================

/// Query parameters for `GET /api/passenger/search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchQuery {
    /// Route number to match exactly
    pub route: Option<String>,
}

/// Body of `POST /api/driver/update-location`
///
/// # Examples
///
/// ```
/// use citytrack_common::api::types::UpdateLocationRequest;
///
/// let json = r#"{"busId": "101-A", "lat": 51.5, "lon": -0.12}"#;
/// let request: UpdateLocationRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.bus_id.as_deref(), Some("101-A"));
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    pub bus_id: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Body of `POST /api/driver/update-passengers`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePassengersRequest {
    pub bus_id: Option<String>,
    pub passengers: Option<i64>,
}

/// Body of `POST /api/admin/routes`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AddRouteRequest {
    /// New route number
    pub number: Option<String>,
    /// Ordered stop names, joined to form the route name
    pub stops: Option<Vec<String>>,
}

// ========================================
// Response Types
// ========================================

/// Error body returned with every 4xx/5xx response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Plain acknowledgment body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Passenger view of a bus (search results)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BusSummary {
    pub number: String,
    pub status: String,
    pub passengers: i64,
    pub location: String,
    pub delay: i64,
}

/// Administrator view of a bus
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FleetEntry {
    pub number: String,
    pub route: String,
    pub status: String,
    pub passengers: i64,
}

/// Administrator view of a route
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteSummary {
    pub number: String,
    pub name: String,
    pub status: String,
    pub buses: Vec<String>,
}

/// Body returned after a route is created
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddRouteResponse {
    pub message: String,
    pub route: Route,
}

// ========================================
// Tests
// ========================================
