//! Lookup command handler
//!
//! One-shot coverage lookup for a free-text address.

use crate::config::Config;
use crate::coverage::{lookup_coverage, CoverageDataset};
use crate::error::{Error, Result};
use crate::format::get_formatter;
use crate::geo::get_geocoder;
use clap::Args;
use std::path::PathBuf;

/// Lookup command arguments
#[derive(Args)]
pub struct LookupArgs {
    /// Textual address to look up
    pub address: String,

    /// Search radius in meters
    #[arg(long, short = 't')]
    pub tolerance: Option<f64>,

    /// Coverage dataset CSV path (overrides config)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the lookup command
pub async fn run(args: LookupArgs) -> Result<()> {
    let config = Config::load()?;

    let mut search = config.search.clone();
    if let Some(tolerance) = args.tolerance {
        search.tolerance_meters = tolerance;
    }

    let dataset_path = args.dataset.unwrap_or_else(|| config.dataset.path.clone());
    let dataset = CoverageDataset::from_csv_path(&dataset_path)?;

    let geocoder = get_geocoder(&config.geocoder);
    let outcome = lookup_coverage(&geocoder, &dataset, &search, &args.address).await?;

    eprintln!(
        "Geocoded to: {} (score {:.2})",
        outcome.address.label, outcome.address.score
    );

    let formatter = get_formatter(&args.format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", args.format)))?;
    let output = formatter.format(&outcome)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
