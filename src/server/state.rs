//! Server shared state
//!
//! Holds configuration and shared resources for the HTTP server. The
//! coverage dataset is loaded once at startup and shared read-only across
//! requests; nothing here is mutated after construction, so no locking is
//! needed.

use crate::config::Config;
use crate::coverage::CoverageDataset;
use crate::geo::{ban::BanBackend, get_geocoder};
use std::sync::Arc;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Coverage dataset handle, shared by reference
    pub dataset: Arc<CoverageDataset>,

    /// Geocoding backend
    pub geocoder: BanBackend,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, dataset: CoverageDataset) -> Self {
        let geocoder = get_geocoder(&config.geocoder);
        Self {
            config,
            dataset: Arc::new(dataset),
            geocoder,
        }
    }
}
