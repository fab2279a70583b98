//! Seed dataset loaded into the store at startup
//!
//! The built-in dataset can be replaced by a JSON file of the same shape.

use citytrack_common::{Arrival, Bus, Result, Route};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Route entry in a seed document, carrying its key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRoute {
    pub number: String,
    #[serde(flatten)]
    pub route: Route,
}

/// Bus entry in a seed document, carrying its key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedBus {
    pub number: String,
    #[serde(flatten)]
    pub bus: Bus,
}

/// Complete initial contents of the store, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDataset {
    #[serde(default)]
    pub routes: Vec<SeedRoute>,
    #[serde(default)]
    pub buses: Vec<SeedBus>,
    #[serde(default)]
    pub arrivals: Vec<Arrival>,
}

impl SeedDataset {
    /// Parse a JSON seed document
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a JSON seed file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Built-in demo fleet: four routes, six buses, four arrivals
    pub fn builtin() -> Self {
        let routes = [
            ("101", "Central ↔ Mall", &["101-A", "101-B"][..]),
            ("205", "Airport ↔ City", &["205-A"][..]),
            ("312", "Hospital ↔ Station", &["312-A", "312-B"][..]),
            ("450", "University ↔ Tech Park", &["450-A"][..]),
        ]
        .into_iter()
        .map(|(number, name, buses)| SeedRoute {
            number: number.to_string(),
            route: Route {
                name: name.to_string(),
                buses: buses.iter().map(|b| b.to_string()).collect(),
                status: "active".to_string(),
            },
        })
        .collect();

        let buses = [
            ("101-A", "101", 23, "active", "Market Square", 0),
            ("101-B", "101", 18, "active", "University", 2),
            ("205-A", "205", 31, "active", "Airport", 0),
            ("312-A", "312", 15, "maintenance", "Depot", 0),
            ("312-B", "312", 27, "active", "Hospital", 5),
            ("450-A", "450", 22, "active", "Tech Park", 1),
        ]
        .into_iter()
        .map(|(number, route, passengers, status, location, delay)| SeedBus {
            number: number.to_string(),
            bus: Bus {
                route: route.to_string(),
                passengers,
                status: status.to_string(),
                location: location.to_string(),
                delay,
            },
        })
        .collect();

        let arrivals = [
            ("101", "Market Square", "3 min", "on-time"),
            ("205", "Airport Terminal", "7 min", "on-time"),
            ("450", "University Gate", "5 min", "on-time"),
            ("312", "Hospital Main", "12 min", "delayed"),
        ]
        .into_iter()
        .map(|(route, destination, time, status)| Arrival {
            route: route.to_string(),
            destination: destination.to_string(),
            time: time.to_string(),
            status: status.to_string(),
        })
        .collect();

        Self {
            routes,
            buses,
            arrivals,
        }
    }
}
