//! Human-readable text output formatter

use crate::coverage::lookup::LookupOutcome;
use crate::error::Result;
use crate::format::OutputFormatter;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, outcome: &LookupOutcome) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&format!("Coverage near: {}\n", outcome.address.label));
        output.push_str(&format!(
            "Position: ({:.6}, {:.6})\n",
            outcome.address.lat, outcome.address.lng
        ));
        output.push_str(&format!("Tolerance: {} deg\n\n", outcome.tolerance));

        // Results
        output.push_str("Operators:\n");
        for (operator, entry) in &outcome.report {
            let flags = &entry.coverage;
            output.push_str(&format!(
                "  {:10} 2G: {}  3G: {}  4G: {}\n",
                operator,
                yes_no(flags.g2),
                yes_no(flags.g3),
                yes_no(flags.g4)
            ));
        }

        Ok(output)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no "
    }
}
