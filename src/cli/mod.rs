//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod lookup;
pub mod serve;

use clap::{Parser, Subcommand};

/// Mobile network coverage lookup
#[derive(Parser)]
#[command(name = "net-coverage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up network coverage for an address
    Lookup(lookup::LookupArgs),

    /// Start HTTP server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup(args) => lookup::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
