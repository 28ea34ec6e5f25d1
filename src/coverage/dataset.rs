//! Coverage dataset loading
//!
//! The dataset is a CSV of surveyed measurement points, loaded once at
//! startup and treated as read-only for the lifetime of the process. It is
//! handed to the resolver by reference; nothing in the crate mutates it
//! after load.

use crate::coverage::CoverageRecord;
use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// An immutable, in-memory collection of coverage measurement points
#[derive(Debug, Clone, Default)]
pub struct CoverageDataset {
    records: Vec<CoverageRecord>,
}

impl CoverageDataset {
    /// Build a dataset from already-loaded records
    pub fn from_records(records: Vec<CoverageRecord>) -> Self {
        Self { records }
    }

    /// Load a dataset from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            Error::Dataset(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let dataset = Self::from_reader(file)?;
        info!(
            "Loaded {} coverage records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Load a dataset from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            let record: CoverageRecord = row?;
            records.push(record);
        }

        Ok(Self { records })
    }

    /// All records in dataset order
    pub fn records(&self) -> &[CoverageRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct operator names, sorted
    pub fn operators(&self) -> Vec<String> {
        let mut operators: Vec<String> =
            self.records.iter().map(|r| r.operator.clone()).collect();
        operators.sort();
        operators.dedup();
        operators
    }
}
