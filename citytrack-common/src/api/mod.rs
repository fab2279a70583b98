//! API module for shared HTTP API types
//!
//! This module contains ONLY serde types with no HTTP framework dependencies.
//! The service wraps them with axum extractors and responses.

pub mod types;

pub use types::{
    AddRouteRequest, AddRouteResponse, BusSummary, ErrorResponse, FleetEntry, MessageResponse,
    RouteSummary, SearchQuery, UpdateLocationRequest, UpdatePassengersRequest,
};
