//! Broadside - terminal client for assisted Battleship.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use broadside::{ClientConfig, run_tui};
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = ClientConfig::load(cli.config.as_deref())?.with_overrides(
        cli.server_url,
        cli.timeout_secs,
        cli.log_file,
    )?;

    run_tui(config, cli.game_id).await
}
