//! Meter-to-degree tolerance conversion
//!
//! A search radius is given in meters, but the coverage dataset is filtered
//! in degrees. One degree of latitude is roughly constant in meters, while a
//! degree of longitude shrinks with the cosine of the latitude.

use crate::constants::geo::METERS_PER_DEGREE_LAT;
use crate::error::{Error, Result};

/// Convert a meter tolerance into a combined angular tolerance in degrees
///
/// # Arguments
/// * `reference_latitude` - Latitude of the reference point in decimal degrees
/// * `tolerance_meters` - Tolerance in meters
///
/// # Returns
/// A single scalar tolerance, applied identically to both the latitude and
/// longitude axes by the caller.
///
/// # Algorithm
/// - `tol_lat = meters / METERS_PER_DEGREE_LAT`
/// - `tol_lng = meters / (METERS_PER_DEGREE_LAT * cos(radians(lat)))`
/// - combined = sqrt(tol_lat^2 + tol_lng^2)
///
/// The combined value over-approximates each per-axis tolerance slightly;
/// both axes are then compared against the same scalar.
///
/// # Errors
/// Fails when the reference latitude is at or beyond the poles (cos goes to
/// zero and the longitude tolerance would become infinite, matching the
/// entire dataset) or when the tolerance is negative or not finite.
pub fn calculate_tolerance(reference_latitude: f64, tolerance_meters: f64) -> Result<f64> {
    if !reference_latitude.is_finite() || reference_latitude.abs() >= 90.0 {
        return Err(Error::Tolerance(format!(
            "Reference latitude {} must be inside (-90, 90)",
            reference_latitude
        )));
    }
    if !tolerance_meters.is_finite() || tolerance_meters < 0.0 {
        return Err(Error::Tolerance(format!(
            "Tolerance {} must be a non-negative number of meters",
            tolerance_meters
        )));
    }

    let tolerance_lat = tolerance_meters / METERS_PER_DEGREE_LAT;
    let tolerance_lng =
        tolerance_meters / (METERS_PER_DEGREE_LAT * reference_latitude.to_radians().cos());

    Ok((tolerance_lat.powi(2) + tolerance_lng.powi(2)).sqrt())
}
