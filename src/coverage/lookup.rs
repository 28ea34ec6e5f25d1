//! Address-to-coverage lookup pipeline
//!
//! Glues the collaborators together for one request: geocode the address,
//! derive the angular tolerance, resolve the nearest coverage points, and
//! shape the per-operator report. Used by both the HTTP handlers and the
//! CLI.

use crate::config::SearchConfig;
use crate::coord::tolerance::calculate_tolerance;
use crate::coverage::report::{build_report, CoverageReport};
use crate::coverage::resolver::find_coverage;
use crate::coverage::CoverageDataset;
use crate::error::Result;
use crate::geo::{GeoBackend, GeocodedAddress};
use serde::Serialize;
use tracing::debug;

/// Everything one lookup produced
#[derive(Debug, Clone, Serialize)]
pub struct LookupOutcome {
    /// The geocoded address the search ran against
    pub address: GeocodedAddress,
    /// Bounding tolerance in degrees, after rounding
    pub tolerance: f64,
    /// Per-operator coverage flags
    pub report: CoverageReport,
}

/// Run the full lookup pipeline for a free-text address
///
/// The tolerance is derived from a fixed reference latitude (not the
/// target's own latitude) and applied at 4-decimal precision.
pub async fn lookup_coverage(
    geocoder: &impl GeoBackend,
    dataset: &CoverageDataset,
    search: &SearchConfig,
    address: &str,
) -> Result<LookupOutcome> {
    let geocoded = geocoder.geocode(address).await?;
    geocoded.coords().validate()?;

    debug!(
        "Geocoded {:?} to ({}, {}) with score {}",
        address, geocoded.lat, geocoded.lng, geocoded.score
    );

    let tolerance =
        calculate_tolerance(search.reference_latitude, search.tolerance_meters)?;
    let tolerance = (tolerance * 10_000.0).round() / 10_000.0;

    let matches = find_coverage(
        dataset.records(),
        geocoded.coords(),
        tolerance,
        search.top_matches,
    )?;

    debug!("{} coverage points within tolerance {}", matches.len(), tolerance);

    Ok(LookupOutcome {
        address: geocoded,
        tolerance,
        report: build_report(&matches),
    })
}
