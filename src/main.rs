//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ecourts_scraper` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Dispatch to the `search` and `serve` subcommands
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use ecourts_scraper::api::start_api_server;
use ecourts_scraper::app::run_search;
use ecourts_scraper::config::{Cli, Command};
use ecourts_scraper::initialization::init_logger_with;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    let log_level = cli.global.log_level.clone();
    let log_format = cli.global.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let config = cli.global.to_config();
    let result = match &cli.command {
        Command::Search(args) => {
            let config = config_or_exit(config);
            let stdin = io::stdin();
            run_search(args, config, stdin.lock(), io::stdout()).await
        }
        Command::Serve(args) => start_api_server(config_or_exit(args.apply(config))).await,
    };

    if let Err(e) = result {
        eprintln!("ecourts_scraper error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

fn config_or_exit(config: ecourts_scraper::Config) -> Arc<ecourts_scraper::Config> {
    if let Err(e) = config.validate() {
        eprintln!("ecourts_scraper error: {}", e);
        process::exit(2);
    }
    Arc::new(config)
}
