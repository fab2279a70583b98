//! # CityTrack Common Library
//!
//! Shared code for the CityTrack services including:
//! - Fleet data model (routes, buses, arrivals)
//! - API request/response types
//! - Configuration loading
//! - Common error type

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{Arrival, Bus, Route};
