//! Nearest-match search over coverage records
//!
//! Two-stage algorithm: a bounding-box pre-filter in degrees, then an exact
//! city-block distance ranking of the survivors. No spatial index; at this
//! dataset scale a linear scan is the design.

use crate::coord::Coordinates;
use crate::coverage::CoverageRecord;
use crate::error::{Error, Result};

/// A coverage record paired with its ranking distance to the target
#[derive(Debug, Clone)]
pub struct RankedMatch {
    pub record: CoverageRecord,
    /// City-block distance to the target, in raw degrees
    pub distance: f64,
}

/// Find the closest coverage points to a target coordinate
///
/// # Arguments
/// * `records` - The coverage dataset to search
/// * `target` - The geocoded target coordinate
/// * `tolerance` - Bounding tolerance in degrees, applied to both axes
/// * `top_matches` - Maximum number of ranked matches to return
///
/// # Returns
/// The surviving records sorted ascending by city-block distance, truncated
/// to `top_matches`. Ties keep dataset order.
///
/// # Errors
/// * [`Error::CoverageNotFound`] when no record falls inside the bounding
///   tolerance box around the target.
/// * [`Error::NoClosestMatch`] when the filter matched records but selection
///   produced none (only possible with `top_matches == 0`, which the config
///   boundary rejects).
pub fn find_coverage(
    records: &[CoverageRecord],
    target: Coordinates,
    tolerance: f64,
    top_matches: usize,
) -> Result<Vec<RankedMatch>> {
    // Stage 1: bounding filter. Inclusive absolute-tolerance comparison on
    // each axis.
    let mut matches: Vec<RankedMatch> = records
        .iter()
        .filter(|record| {
            (record.lng - target.lng).abs() <= tolerance
                && (record.lat - target.lat).abs() <= tolerance
        })
        .map(|record| RankedMatch {
            distance: record.coords().cityblock_distance(target),
            record: record.clone(),
        })
        .collect();

    if matches.is_empty() {
        return Err(Error::CoverageNotFound);
    }

    // Stage 2: ranking. Stable sort keeps dataset order for equal distances.
    matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    matches.truncate(top_matches);

    if matches.is_empty() {
        return Err(Error::NoClosestMatch);
    }

    Ok(matches)
}
