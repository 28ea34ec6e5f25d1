//! Coordinate types and tolerance math
//!
//! This module handles:
//! - The geographic coordinate type and its validation
//! - Converting a meter tolerance into an angular (degree) tolerance

pub mod tolerance;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }

    /// City-block (L1) distance to another coordinate, in raw degrees
    ///
    /// Sum of absolute per-axis differences. Used as the ranking metric for
    /// nearest-match search: at tolerances of a few hundred meters it tracks
    /// geographic closeness well enough and needs no trigonometry.
    pub fn cityblock_distance(&self, other: Coordinates) -> f64 {
        (self.lng - other.lng).abs() + (self.lat - other.lat).abs()
    }
}
