//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sitesniper` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use sitesniper::app::{run_scan_command, run_tlds_command};
use sitesniper::config::{Cli, Command};
use sitesniper::initialization::init_logger_with;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Command::Tlds(args) => run_tlds_command(args, &mut stdout).await,
        Command::Scan(args) => run_scan_command(args, &mut stdout).await,
    };
    let _ = stdout.flush();

    match result {
        Ok(0) => Ok(()),
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("sitesniper error: {:#}", e);
            process::exit(1);
        }
    }
}
