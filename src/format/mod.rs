//! Output formatters
//!
//! Provides trait-based output formatting for lookup results.

pub mod json;
pub mod text;

use crate::coverage::lookup::LookupOutcome;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the lookup outcome
    fn format(&self, outcome: &LookupOutcome) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable text".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "Per-operator coverage as JSON".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("unknown").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        assert!(formats.iter().any(|f| f.name == "json"));
        assert!(formats.iter().any(|f| f.name == "text"));
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::coverage::lookup::LookupOutcome;
    use crate::coverage::report::build_report;
    use crate::coverage::resolver::RankedMatch;
    use crate::coverage::CoverageRecord;
    use crate::geo::GeocodedAddress;

    pub fn sample_outcome() -> LookupOutcome {
        let matches = vec![
            RankedMatch {
                record: CoverageRecord {
                    lng: 2.385,
                    lat: 48.862,
                    operator: "SFR".to_string(),
                    g2: true,
                    g3: true,
                    g4: true,
                },
                distance: 0.0,
            },
            RankedMatch {
                record: CoverageRecord {
                    lng: 2.380383,
                    lat: 48.860248,
                    operator: "Orange".to_string(),
                    g2: true,
                    g3: false,
                    g4: false,
                },
                distance: 0.006369,
            },
        ];

        LookupOutcome {
            address: GeocodedAddress {
                lng: 2.385,
                lat: 48.862,
                score: 0.92,
                label: "42 Rue de Test 75011 Paris".to_string(),
            },
            tolerance: 0.0082,
            report: build_report(&matches),
        }
    }
}
