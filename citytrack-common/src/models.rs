//! Fleet data model
//!
//! Records held by the in-memory store. Keys (route number, bus identifier)
//! live in the store, not in the records themselves.

use serde::{Deserialize, Serialize};

/// Status assigned to newly created routes
pub const ROUTE_STATUS_ACTIVE: &str = "active";

/// Separator placed between stop names when building a route name
pub const STOP_SEPARATOR: &str = " ↔ ";

/// A named transit path with its assigned buses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Display name, e.g. "Central ↔ Mall"
    pub name: String,
    /// Bus identifiers assigned to this route, in order
    pub buses: Vec<String>,
    /// Free-form status string ("active" for every seeded route)
    pub status: String,
}

impl Route {
    /// Build a new active route with no buses from an ordered list of stops
    pub fn from_stops(stops: &[String]) -> Self {
        Self {
            name: stops.join(STOP_SEPARATOR),
            buses: Vec::new(),
            status: ROUTE_STATUS_ACTIVE.to_string(),
        }
    }
}

/// A vehicle assigned to a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    /// Route number; not checked against the route collection
    pub route: String,
    /// Current passenger count as reported by the driver
    pub passengers: i64,
    /// Free-form status string (e.g. "active", "maintenance")
    pub status: String,
    /// Human-readable location, not coordinates
    pub location: String,
    /// Delay in minutes
    pub delay: i64,
}

/// Static display record for an upcoming arrival
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    pub route: String,
    pub destination: String,
    /// Display string such as "3 min"
    pub time: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_stops_joins_names() {
        let stops = vec!["North".to_string(), "South".to_string()];
        let route = Route::from_stops(&stops);

        assert_eq!(route.name, "North ↔ South");
        assert!(route.buses.is_empty());
        assert_eq!(route.status, "active");
    }

    #[test]
    fn test_route_from_stops_single_and_empty() {
        assert_eq!(Route::from_stops(&["Depot".to_string()]).name, "Depot");
        assert_eq!(Route::from_stops(&[]).name, "");
    }

    #[test]
    fn test_bus_serialization_field_names() {
        let bus = Bus {
            route: "101".to_string(),
            passengers: 23,
            status: "active".to_string(),
            location: "Market Square".to_string(),
            delay: 0,
        };

        let json = serde_json::to_value(&bus).unwrap();
        assert_eq!(json["route"], "101");
        assert_eq!(json["passengers"], 23);
        assert_eq!(json["location"], "Market Square");
        assert_eq!(json["delay"], 0);
    }
}
