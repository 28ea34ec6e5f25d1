//! net-coverage CLI entry point
//!
//! Mobile network coverage lookup - CLI + HTTP API

use net_coverage::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
