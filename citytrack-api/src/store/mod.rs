//! In-memory fleet store
//!
//! Holds routes, buses and arrivals in insertion order. The store itself has
//! no interior locking; the service shares it behind a single `RwLock` in
//! [`crate::AppState`].

use citytrack_common::{Arrival, Bus, Error, Result, Route};

mod seed;
pub use seed::{SeedBus, SeedDataset, SeedRoute};

/// Routes, buses and arrivals keyed by route number / bus identifier
#[derive(Debug, Clone, Default)]
pub struct Store {
    routes: Vec<(String, Route)>,
    buses: Vec<(String, Bus)>,
    arrivals: Vec<Arrival>,
}

impl Store {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated with the built-in demo fleet
    pub fn seeded() -> Result<Self> {
        Self::from_seed(SeedDataset::builtin())
    }

    /// Build a store from a seed dataset, rejecting duplicate keys
    pub fn from_seed(seed: SeedDataset) -> Result<Self> {
        let mut store = Self::new();

        for SeedRoute { number, route } in seed.routes {
            if store.route(&number).is_some() {
                return Err(Error::Config(format!("Duplicate route number in seed: {}", number)));
            }
            store.routes.push((number, route));
        }

        for SeedBus { number, bus } in seed.buses {
            if store.contains_bus(&number) {
                return Err(Error::Config(format!("Duplicate bus identifier in seed: {}", number)));
            }
            store.buses.push((number, bus));
        }

        store.arrivals = seed.arrivals;
        Ok(store)
    }

    /// All arrivals in seed order
    pub fn arrivals(&self) -> &[Arrival] {
        &self.arrivals
    }

    /// Every bus with its identifier, in store order
    pub fn fleet(&self) -> impl Iterator<Item = (&str, &Bus)> {
        self.buses.iter().map(|(id, bus)| (id.as_str(), bus))
    }

    /// Buses whose route field equals `route` exactly (case-sensitive)
    pub fn buses_on_route<'a>(&'a self, route: &'a str) -> impl Iterator<Item = (&'a str, &'a Bus)> {
        self.fleet().filter(move |(_, bus)| bus.route == route)
    }

    /// Every route with its number, in store order
    pub fn routes(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.routes.iter().map(|(number, route)| (number.as_str(), route))
    }

    pub fn route(&self, number: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|(key, _)| key == number)
            .map(|(_, route)| route)
    }

    pub fn bus(&self, bus_id: &str) -> Option<&Bus> {
        self.buses
            .iter()
            .find(|(key, _)| key == bus_id)
            .map(|(_, bus)| bus)
    }

    pub fn contains_bus(&self, bus_id: &str) -> bool {
        self.bus(bus_id).is_some()
    }

    /// Overwrite one bus's passenger count
    ///
    /// No bounds checks: the driver-reported value is stored as given.
    pub fn set_passengers(&mut self, bus_id: &str, passengers: i64) -> Result<()> {
        let bus = self
            .buses
            .iter_mut()
            .find(|(key, _)| key == bus_id)
            .map(|(_, bus)| bus)
            .ok_or_else(|| Error::NotFound("Bus not found".to_string()))?;

        bus.passengers = passengers;
        Ok(())
    }

    /// Create a new active route named after its stops
    ///
    /// Fails with `Conflict` if the number is taken; the existing route is
    /// left untouched.
    pub fn add_route(&mut self, number: &str, stops: &[String]) -> Result<Route> {
        if self.route(number).is_some() {
            return Err(Error::Conflict("Route number already exists".to_string()));
        }

        let route = Route::from_stops(stops);
        self.routes.push((number.to_string(), route.clone()));
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_seeded_store_counts() {
        let store = Store::seeded().expect("Built-in seed keys are unique");
        assert_eq!(store.routes().count(), 4);
        assert_eq!(store.fleet().count(), 6);
        assert_eq!(store.arrivals().len(), 4);
    }

    #[test]
    fn test_buses_on_route_preserves_order() {
        let store = Store::seeded().unwrap();
        let ids: Vec<_> = store.buses_on_route("312").map(|(id, _)| id).collect();
        assert_eq!(ids, ["312-A", "312-B"]);
    }

    #[test]
    fn test_buses_on_route_exact_match_only() {
        let store = Store::seeded().unwrap();
        assert_eq!(store.buses_on_route("10").count(), 0);
        assert_eq!(store.buses_on_route("101 ").count(), 0);
        assert_eq!(store.buses_on_route("999").count(), 0);
    }

    #[test]
    fn test_set_passengers_updates_only_target() {
        let mut store = Store::seeded().unwrap();
        let before: Vec<Bus> = store.fleet().map(|(_, bus)| bus.clone()).collect();

        store.set_passengers("101-B", 40).unwrap();

        for ((id, bus), old) in store.fleet().zip(before.iter()) {
            if id == "101-B" {
                assert_eq!(bus.passengers, 40);
                assert_eq!(bus.location, old.location);
                assert_eq!(bus.delay, old.delay);
                assert_eq!(bus.status, old.status);
            } else {
                assert_eq!(bus, old);
            }
        }
    }

    #[test]
    fn test_set_passengers_accepts_zero_and_negative() {
        let mut store = Store::seeded().unwrap();
        store.set_passengers("205-A", 0).unwrap();
        assert_eq!(store.bus("205-A").unwrap().passengers, 0);

        store.set_passengers("205-A", -3).unwrap();
        assert_eq!(store.bus("205-A").unwrap().passengers, -3);
    }

    #[test]
    fn test_set_passengers_unknown_bus() {
        let mut store = Store::seeded().unwrap();
        let result = store.set_passengers("999-Z", 10);

        assert!(matches!(result, Err(Error::NotFound(ref msg)) if msg == "Bus not found"));
        assert!(store.fleet().all(|(id, _)| id != "999-Z"));
    }

    #[test]
    fn test_add_route_appends_in_order() {
        let mut store = Store::seeded().unwrap();
        let route = store.add_route("999", &stops(&["North", "South"])).unwrap();

        assert_eq!(route.name, "North ↔ South");
        assert!(route.buses.is_empty());
        assert_eq!(route.status, "active");

        let (number, stored) = store.routes().last().unwrap();
        assert_eq!(number, "999");
        assert_eq!(stored, &route);
    }

    #[test]
    fn test_add_route_duplicate_leaves_existing() {
        let mut store = Store::seeded().unwrap();
        let result = store.add_route("101", &stops(&["X", "Y"]));

        assert!(matches!(result, Err(Error::Conflict(_))));
        let route = store.route("101").unwrap();
        assert_eq!(route.name, "Central ↔ Mall");
        assert_eq!(route.buses, ["101-A", "101-B"]);
        assert_eq!(store.routes().count(), 4);
    }

    #[test]
    fn test_from_seed_rejects_duplicate_bus() {
        let mut seed = SeedDataset::builtin();
        let duplicate = seed.buses[0].clone();
        seed.buses.push(duplicate);

        assert!(matches!(Store::from_seed(seed), Err(Error::Config(_))));
    }

    #[test]
    fn test_from_seed_rejects_duplicate_route() {
        let mut seed = SeedDataset::builtin();
        let duplicate = seed.routes[1].clone();
        seed.routes.push(duplicate);

        assert!(matches!(Store::from_seed(seed), Err(Error::Config(_))));
    }
}
