//! Coverage report shaping
//!
//! Maps ranked matches to the externally visible per-operator mapping.

use crate::coverage::resolver::RankedMatch;
use crate::coverage::GenerationFlags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coverage flags for one operator, as exposed on the wire
///
/// Serializes as `{"coverage": {"2G": bool, "3G": bool, "4G": bool}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorCoverage {
    pub coverage: GenerationFlags,
}

/// The externally visible result: operator name -> coverage flags
pub type CoverageReport = BTreeMap<String, OperatorCoverage>;

/// Build the per-operator coverage report from ranked matches
///
/// When the same operator appears more than once in the ranked result, the
/// later (farther-ranked) row overwrites the earlier one: last write wins.
pub fn build_report(matches: &[RankedMatch]) -> CoverageReport {
    let mut report = CoverageReport::new();
    for m in matches {
        report.insert(
            m.record.operator.clone(),
            OperatorCoverage {
                coverage: m.record.flags(),
            },
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::CoverageRecord;

    fn ranked(operator: &str, distance: f64, g4: bool) -> RankedMatch {
        RankedMatch {
            record: CoverageRecord {
                lng: 2.385,
                lat: 48.862,
                operator: operator.to_string(),
                g2: true,
                g3: false,
                g4,
            },
            distance,
        }
    }

    #[test]
    fn test_build_report() {
        let matches = vec![ranked("SFR", 0.0, true), ranked("Orange", 0.004, false)];

        let report = build_report(&matches);

        assert_eq!(report.len(), 2);
        assert!(report["SFR"].coverage.g4);
        assert!(!report["Orange"].coverage.g4);
    }

    #[test]
    fn test_duplicate_operator_last_write_wins() {
        // Two rows for the same operator with different flags: the row
        // ranked later must be the one that survives.
        let matches = vec![ranked("Orange", 0.0, true), ranked("Orange", 0.003, false)];

        let report = build_report(&matches);

        assert_eq!(report.len(), 1);
        assert!(!report["Orange"].coverage.g4);
    }

    #[test]
    fn test_report_serialization() {
        let matches = vec![ranked("SFR", 0.0, true)];
        let report = build_report(&matches);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["SFR"]["coverage"]["2G"], true);
        assert_eq!(json["SFR"]["coverage"]["3G"], false);
        assert_eq!(json["SFR"]["coverage"]["4G"], true);
    }

    #[test]
    fn test_empty_matches_empty_report() {
        assert!(build_report(&[]).is_empty());
    }
}
