//! HTTP API handlers for citytrack-api

pub mod admin;
pub mod buildinfo;
pub mod driver;
pub mod health;
pub mod passenger;

pub use admin::{add_route, admin_routes, list_fleet, list_routes};
pub use buildinfo::get_build_info;
pub use driver::{driver_routes, update_location, update_passengers};
pub use health::health_routes;
pub use passenger::{list_arrivals, passenger_routes, search_buses};

/// Treat an absent or empty identifier as missing
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
