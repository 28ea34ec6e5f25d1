//! Error types for net-coverage

use thiserror::Error;

/// Main error type for net-coverage operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Address API request failed: {0}")]
    Upstream(String),

    #[error("Address not found: {0}")]
    AddressNotFound(String),

    #[error("Address match confidence too low (score {score})")]
    LowConfidence { score: f64 },

    #[error("Network coverage not found")]
    CoverageNotFound,

    #[error("No closest network coverage point found")]
    NoClosestMatch,

    #[error("Invalid tolerance input: {0}")]
    Tolerance(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for net-coverage operations
pub type Result<T> = std::result::Result<T, Error>;
