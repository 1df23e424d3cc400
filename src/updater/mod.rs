//! Top-level orchestration of the update workflow.
//!
//! Control flows strictly top to bottom: resolve the latest release,
//! inspect the installed bundle, compare version keys, and only then fetch
//! and install. Everything is sequential; each await completes before the
//! next step starts.

use anyhow::{Context, Result};
use tracing::info;

use crate::bundle::{self, InstalledVersion};
use crate::config::UpdaterConfig;
use crate::pipeline::{self, CommandRunner};
use crate::release::{self, ReleaseInfo};
use crate::version::VersionKey;

/// Result of one updater run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A newer build was downloaded and installed.
    Updated {
        /// Version that was installed before the run (possibly none).
        installed: InstalledVersion,
        /// Version tag that was installed by the run.
        latest: String,
    },
    /// The installed build is at least as new as the latest release.
    UpToDate {
        /// The installed version string.
        installed: String,
        /// The latest release tag.
        latest: String,
    },
    /// Check-only mode found a newer build without installing it.
    UpdateAvailable {
        /// Version currently installed (possibly none).
        installed: InstalledVersion,
        /// Version tag available for install.
        latest: String,
    },
    /// The feed offered no version tag or no platform-matching asset.
    NoActionableUpdate,
}

enum Decision {
    Install {
        url: String,
        installed: InstalledVersion,
        latest: String,
    },
    UpToDate {
        installed: String,
        latest: String,
    },
    Nothing,
}

fn http_client() -> Result<reqwest::Client> {
    // The GitHub API rejects requests without a User-Agent.
    reqwest::Client::builder()
        .user_agent(concat!("chromup/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")
}

async fn evaluate(client: &reqwest::Client, config: &UpdaterConfig) -> Result<Decision> {
    let ReleaseInfo {
        version,
        download_url,
    } = release::fetch_latest(client, config).await?;
    let installed = bundle::installed_version(&config.app_path)?;

    info!("Installed version: {}", installed);
    info!("Latest version: {}", version.as_deref().unwrap_or("unknown"));

    let (Some(latest), Some(url)) = (version, download_url) else {
        return Ok(Decision::Nothing);
    };

    if let InstalledVersion::Found(current) = &installed {
        if VersionKey::parse(&latest) <= VersionKey::parse(current) {
            return Ok(Decision::UpToDate {
                installed: current.clone(),
                latest,
            });
        }
    }

    Ok(Decision::Install {
        url,
        installed,
        latest,
    })
}

/// Runs the full update workflow: resolve, inspect, compare, and when a
/// newer build exists, download and install it through `runner`.
///
/// When the installed build is already current, no external tool is
/// invoked and no filesystem side effect occurs.
pub async fn run(config: &UpdaterConfig, runner: &dyn CommandRunner) -> Result<Outcome> {
    let client = http_client()?;

    match evaluate(&client, config).await? {
        Decision::Nothing => Ok(Outcome::NoActionableUpdate),
        Decision::UpToDate { installed, latest } => {
            info!("Already up to date");
            Ok(Outcome::UpToDate { installed, latest })
        }
        Decision::Install {
            url,
            installed,
            latest,
        } => {
            info!("New version available: {}", latest);

            let file_name = url
                .rsplit('/')
                .next()
                .filter(|segment| !segment.is_empty())
                .unwrap_or("update.dmg");
            let artifact = config.temp_dir.join(file_name);

            pipeline::download_artifact(&client, &url, &artifact).await?;
            pipeline::install_artifact(runner, config, &artifact).await?;

            Ok(Outcome::Updated { installed, latest })
        }
    }
}

/// Resolves and compares without fetching or installing anything.
pub async fn check(config: &UpdaterConfig) -> Result<Outcome> {
    let client = http_client()?;

    match evaluate(&client, config).await? {
        Decision::Nothing => Ok(Outcome::NoActionableUpdate),
        Decision::UpToDate { installed, latest } => Ok(Outcome::UpToDate { installed, latest }),
        Decision::Install {
            installed, latest, ..
        } => Ok(Outcome::UpdateAvailable { installed, latest }),
    }
}
