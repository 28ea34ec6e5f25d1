//! Centralized constants for the net-coverage crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Meters per degree of latitude (approximate, varies slightly with latitude)
    pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

    /// Latitude of the Paris reference point used for tolerance scaling
    pub const REFERENCE_LATITUDE: f64 = 48.860248;
}

/// External API endpoints
pub mod api {
    /// BAN (Base Adresse Nationale) geocoding API
    pub const BAN_URL: &str = "https://api-adresse.data.gouv.fr";
}

/// Search settings
pub mod search {
    /// Search radius around the target address, in meters
    pub const TOLERANCE_METERS: f64 = 500.0;

    /// Number of closest coverage points to keep after ranking
    pub const TOP_MATCHES: usize = 5;

    /// Minimum geocoding confidence score to accept an address match
    pub const MIN_GEOCODE_SCORE: f64 = 0.4;
}
