//! Coverage dataset and nearest-match search
//!
//! This module handles:
//! - The coverage record model (one surveyed measurement point per row)
//! - Loading the static CSV dataset
//! - Bounding-box filtering and city-block ranking of coverage points
//! - Shaping ranked matches into the per-operator coverage report

pub mod dataset;
pub mod lookup;
pub mod report;
pub mod resolver;

pub use dataset::CoverageDataset;
pub use lookup::{lookup_coverage, LookupOutcome};
pub use report::{build_report, CoverageReport, OperatorCoverage};
pub use resolver::{find_coverage, RankedMatch};

use crate::coord::Coordinates;
use serde::{Deserialize, Deserializer, Serialize};

/// One surveyed coverage measurement point
///
/// CSV rows as currently defined:
/// longitude,latitude,operator_name,2G,3G,4G
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoverageRecord {
    #[serde(rename = "longitude")]
    pub lng: f64,

    #[serde(rename = "latitude")]
    pub lat: f64,

    #[serde(rename = "operator_name")]
    pub operator: String,

    #[serde(rename = "2G", deserialize_with = "flag_from_field")]
    pub g2: bool,

    #[serde(rename = "3G", deserialize_with = "flag_from_field")]
    pub g3: bool,

    #[serde(rename = "4G", deserialize_with = "flag_from_field")]
    pub g4: bool,
}

impl CoverageRecord {
    /// Position of this measurement point
    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    /// The three generation flags of this record
    pub fn flags(&self) -> GenerationFlags {
        GenerationFlags {
            g2: self.g2,
            g3: self.g3,
            g4: self.g4,
        }
    }
}

/// Per-generation coverage flags for one operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFlags {
    #[serde(rename = "2G")]
    pub g2: bool,

    #[serde(rename = "3G")]
    pub g3: bool,

    #[serde(rename = "4G")]
    pub g4: bool,
}

/// Accept `0`/`1` as well as `true`/`false` for generation flag columns
fn flag_from_field<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "1" | "true" | "True" => Ok(true),
        "0" | "false" | "False" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid generation flag: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_flags_serialization() {
        let flags = GenerationFlags {
            g2: true,
            g3: false,
            g4: true,
        };

        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, r#"{"2G":true,"3G":false,"4G":true}"#);

        let parsed: GenerationFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, flags);
    }

    #[test]
    fn test_record_coords() {
        let record = CoverageRecord {
            lng: 2.385,
            lat: 48.862,
            operator: "SFR".to_string(),
            g2: true,
            g3: true,
            g4: true,
        };

        let coords = record.coords();
        assert_eq!(coords.lat, 48.862);
        assert_eq!(coords.lng, 2.385);
    }
}
