//! net-coverage: Mobile Network Coverage Lookup
//!
//! A library and CLI tool for answering "which mobile network operators
//! cover this address, and with which generations of service (2G/3G/4G)?"
//!
//! ## Features
//!
//! - Free-text address resolution via the BAN geocoding API
//! - Meter-based tolerance converted to angular degrees
//! - Nearest-match search over a static coverage dataset
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use net_coverage::coord::{tolerance::calculate_tolerance, Coordinates};
//! use net_coverage::coverage::resolver::find_coverage;
//! use net_coverage::coverage::CoverageRecord;
//!
//! let dataset = vec![CoverageRecord {
//!     lng: 2.380383,
//!     lat: 48.860248,
//!     operator: "Orange".to_string(),
//!     g2: true,
//!     g3: true,
//!     g4: false,
//! }];
//!
//! let target = Coordinates::new(48.860248, 2.380383);
//! let tolerance = calculate_tolerance(48.860248, 500.0).unwrap();
//!
//! let matches = find_coverage(&dataset, target, tolerance, 5).unwrap();
//! println!("Closest point: {:?}", matches[0]);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod coverage;
pub mod error;
pub mod format;
pub mod geo;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use coverage::{CoverageDataset, CoverageRecord, GenerationFlags};
pub use error::{Error, Result};
