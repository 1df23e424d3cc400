//! Command-line interface for chromup.
//!
//! The zero-argument invocation runs the full update workflow. Flags cover
//! the ambient concerns only: `--check` reports without installing,
//! `--verbose`/`--quiet` adjust the log level, and `--no-progress`
//! suppresses progress bars for automation.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::UpdaterConfig;
use crate::pipeline::SystemRunner;
use crate::updater::{self, Outcome};
use crate::utils::progress;

/// Updater for ungoogled-chromium on macOS.
///
/// Checks the ungoogled-chromium-macos release feed, compares against the
/// installed bundle, and installs the newest arm64 build when it is newer.
#[derive(Parser, Debug)]
#[command(name = "chromup", version)]
pub struct Cli {
    /// Check whether an update is available without installing anything.
    #[arg(long)]
    check: bool,

    /// Enable debug output (equivalent to RUST_LOG=chromup=debug).
    #[arg(long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(long)]
    quiet: bool,

    /// Disable progress bars (automatic in non-interactive terminals).
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    /// Executes the selected workflow and reports the outcome.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        if self.no_progress {
            progress::disable_progress();
        }

        let config = UpdaterConfig::from_env();
        info!("Starting updater for ungoogled-chromium");

        let outcome = if self.check {
            updater::check(&config).await?
        } else {
            updater::run(&config, &SystemRunner).await?
        };

        report(&outcome);
        Ok(())
    }

    /// Configures the process-wide logger exactly once at entry. An
    /// explicit `RUST_LOG` wins over the flag-derived level.
    fn init_logging(&self) {
        let default_level = if self.verbose {
            "chromup=debug"
        } else if self.quiet {
            "chromup=error"
        } else {
            "chromup=info"
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Updated { latest, .. } => {
            println!(
                "{} installed ungoogled-chromium {}",
                "Updated:".green().bold(),
                latest
            );
        }
        Outcome::UpToDate { installed, .. } => {
            println!(
                "{} {} is the latest build",
                "Up to date:".green(),
                installed
            );
        }
        Outcome::UpdateAvailable { installed, latest } => {
            println!(
                "{} {} -> {}",
                "Update available:".yellow().bold(),
                installed,
                latest
            );
            println!("Run {} to install it", "chromup".cyan().bold());
        }
        Outcome::NoActionableUpdate => {
            println!(
                "{}",
                "No installable build found in the latest release".yellow()
            );
        }
    }
}
