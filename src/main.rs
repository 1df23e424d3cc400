//! chromup CLI entry point.
//!
//! Parses arguments, runs the update workflow, and maps internal errors to
//! exit code 1 with a readable report. "Already up to date" and "no
//! installable asset" are success paths and exit 0.

use anyhow::Result;
use chromup::cli::Cli;
use clap::Parser;
use colored::Colorize;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
