//! Command-line interface for broadside.

use clap::Parser;

/// Broadside - heat-mapped Battleship assistant for the terminal
#[derive(Parser, Debug)]
#[command(name = "broadside")]
#[command(about = "Record shots and follow hit probabilities from a scoring service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Scoring service URL (overrides the config file)
    #[arg(long)]
    pub server_url: Option<String>,

    /// Join an existing game instead of creating one
    #[arg(long)]
    pub game_id: Option<String>,

    /// Path to a TOML config file (defaults to ./broadside.toml if present)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Seconds before a request to the service is abandoned
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,
}
