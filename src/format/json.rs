//! JSON output formatter

use crate::coverage::lookup::LookupOutcome;
use crate::error::Result;
use crate::format::OutputFormatter;

/// JSON formatter - outputs the per-operator coverage report, matching the
/// HTTP API response body
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Per-operator coverage as JSON"
    }

    fn format(&self, outcome: &LookupOutcome) -> Result<String> {
        Ok(serde_json::to_string_pretty(&outcome.report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::sample_outcome;

    #[test]
    fn test_json_format() {
        let formatter = JsonFormatter;
        let output = formatter.format(&sample_outcome()).unwrap();

        // Verify it's valid JSON with the wire shape
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["SFR"]["coverage"]["4G"], true);
        assert_eq!(parsed["Orange"]["coverage"]["3G"], false);
    }

    #[test]
    fn test_json_formatter_info() {
        let formatter = JsonFormatter;
        assert_eq!(formatter.name(), "json");
        assert!(!formatter.description().is_empty());
    }
}
