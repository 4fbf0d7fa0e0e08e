//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `link_dispatch` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use link_dispatch::initialization::init_logger_with;
use link_dispatch::{run_session, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the session using the library
    match run_session(config).await {
        Ok(report) => {
            println!(
                "✅ Shortened {} URL{} ({} succeeded, {} failed) in {:.1}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            if let Some(rows) = report.csv_records {
                println!("Exported {rows} rows to CSV");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("link_dispatch error: {:#}", e);
            process::exit(1);
        }
    }
}
