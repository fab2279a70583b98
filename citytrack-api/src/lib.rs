//! citytrack-api library - transit fleet HTTP service
//!
//! Serves passenger, driver and administrator endpoints over an in-memory
//! fleet store.

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod error;
pub mod store;

pub use crate::error::{ApiError, ApiResult};
pub use crate::store::Store;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Fleet store; each handler holds the lock only for its own store access
    pub store: Arc<RwLock<Store>>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
///
/// Cross-origin requests are permitted from any origin.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .merge(api::passenger_routes())
        .merge(api::driver_routes())
        .merge(api::admin_routes())
        .merge(api::health_routes())
        .route("/api/buildinfo", get(api::get_build_info))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
