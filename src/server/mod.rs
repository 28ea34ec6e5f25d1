//! HTTP server for net-coverage
//!
//! Provides REST API endpoints for coverage lookup.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::coverage::CoverageDataset;
use crate::error::Result;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server
///
/// Loads the coverage dataset from the configured path, then serves until
/// shutdown.
pub async fn run(config: Config) -> Result<()> {
    let dataset = CoverageDataset::from_csv_path(&config.dataset.path)?;
    run_with_dataset(&config.server_addr(), config, dataset).await
}

/// Start the HTTP server with a specific address and pre-loaded dataset
///
/// Useful for tests or when you want to override config
pub async fn run_with_dataset(
    addr: &str,
    config: Config,
    dataset: CoverageDataset,
) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| crate::error::Error::Server(format!("Invalid server address: {}", e)))?;

    let state = Arc::new(AppState::new(config, dataset));
    let app = create_router(state);

    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| crate::error::Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
