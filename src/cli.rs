use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `vetretire` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vetretire",
    version,
    about = "Retirement location explorer for veterans"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to the user config dir, then ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import locations from a CSV export
    ImportLocations {
        /// Path to the CSV file
        csv_path: PathBuf,
        /// Delete all existing locations first
        #[arg(long)]
        clear: bool,
    },
    /// Import per-state gun law data from a CSV export
    ImportStates {
        /// Path to the CSV file
        csv_path: PathBuf,
        /// Delete all existing state info first
        #[arg(long)]
        clear: bool,
    },
    /// Replace all locations with the built-in starter set
    Seed,
    /// Run the HTTP server
    Serve {
        /// Interface to bind, overrides server.host
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on, overrides server.port
        #[arg(short, long)]
        port: Option<u16>,
    },
}
