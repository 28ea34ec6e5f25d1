//! Geocoding module
//!
//! Resolves free-text postal addresses to coordinates with a confidence
//! score.

pub mod ban;

use crate::config::GeocoderConfig;
use crate::coord::Coordinates;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A geocoded address result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodedAddress {
    /// Longitude
    pub lng: f64,
    /// Latitude
    pub lat: f64,
    /// Geocoder confidence score in [0, 1]
    pub score: f64,
    /// Resolved display address
    pub label: String,
}

impl GeocodedAddress {
    /// Position of the geocoded address
    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Geocode a free-text address to coordinates
    ///
    /// Fails with a typed error when the address cannot be resolved or the
    /// best candidate's confidence is below the acceptance threshold.
    fn geocode(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<GeocodedAddress>> + Send;
}

/// Get the default geocoding backend
pub fn get_geocoder(config: &GeocoderConfig) -> ban::BanBackend {
    ban::BanBackend::new(&config.url, config.min_score)
}
