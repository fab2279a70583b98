//! citytrack-api - Transit fleet HTTP service
//!
//! Exposes routes, buses and arrivals to passengers, drivers and
//! administrators from an in-memory store seeded at startup.

use std::path::PathBuf;

use anyhow::{Context, Result};
use citytrack_api::store::SeedDataset;
use citytrack_api::{build_router, AppState, Store};
use citytrack_common::config::{load_toml_config, Overrides, ServiceConfig, CONFIG_ENV_VAR};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};

/// Command-line arguments for citytrack-api
#[derive(Parser, Debug)]
#[command(name = "citytrack-api")]
#[command(about = "Transit fleet HTTP service for CityTrack")]
#[command(version)]
struct Args {
    /// Port to listen on (default 5000)
    #[arg(short, long, env = "CITYTRACK_PORT")]
    port: Option<u16>,

    /// Address to bind (default 0.0.0.0)
    #[arg(long, env = "CITYTRACK_HOST")]
    host: Option<String>,

    /// TOML config file (also read from CITYTRACK_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file replacing the built-in seed dataset
    #[arg(long, env = "CITYTRACK_SEED_FILE")]
    seed_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = load_toml_config(args.config.as_deref(), CONFIG_ENV_VAR)
        .context("Failed to load configuration")?;
    let config = ServiceConfig::resolve(
        Overrides {
            host: args.host,
            port: args.port,
            seed_file: args.seed_file,
        },
        loaded.toml,
    )
    .context("Invalid configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting CityTrack API (citytrack-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &loaded.source {
        Some(path) => info!("Config file: {}", path.display()),
        None => warn!("No config file found, using compiled defaults"),
    }

    let store = match &config.seed_file {
        Some(path) => {
            info!("Loading seed dataset from {}", path.display());
            let seed = SeedDataset::from_file(path)
                .with_context(|| format!("Failed to read seed file {}", path.display()))?;
            Store::from_seed(seed).context("Invalid seed dataset")?
        }
        None => Store::seeded().context("Invalid built-in seed dataset")?,
    };
    info!(
        "✓ Store initialized: {} routes, {} buses, {} arrivals",
        store.routes().count(),
        store.fleet().count(),
        store.arrivals().len()
    );

    let state = AppState::new(store);
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("CityTrack backend running at http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}
