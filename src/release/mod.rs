//! Release feed resolution and asset selection.
//!
//! Queries the release-metadata endpoint, extracts the latest version tag,
//! and picks the download URL of the platform-matching disk image. The feed
//! is expected to expose at least `tag_name` plus an `assets` list with
//! `name` and `browser_download_url` per asset (the GitHub releases shape).

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::UpdaterConfig;
use crate::constants::METADATA_TIMEOUT;
use crate::core::UpdaterError;

/// One release as served by the metadata endpoint.
#[derive(Debug, Deserialize)]
pub struct Release {
    /// Version tag of the release, if the feed provided one.
    pub tag_name: Option<String>,
    /// Downloadable assets attached to the release.
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// One downloadable asset of a release.
#[derive(Debug, Deserialize)]
pub struct ReleaseAsset {
    /// Asset file name, matched against the platform marker and extension.
    pub name: String,
    /// Direct download URL for the asset.
    pub browser_download_url: String,
}

/// Latest known remote release, reduced to what the workflow needs.
///
/// Either field may be absent: a feed without a tag or without a
/// platform-matching asset means "no actionable update", not an error.
#[derive(Debug, Clone)]
pub struct ReleaseInfo {
    /// Version tag of the latest release.
    pub version: Option<String>,
    /// Download URL of the platform-matching disk image.
    pub download_url: Option<String>,
}

/// Fetches the latest release and resolves the installable asset.
///
/// The request is bounded by [`METADATA_TIMEOUT`]. Transport failures,
/// timeouts, and non-success statuses map to [`UpdaterError::Network`];
/// an undecodable body maps to [`UpdaterError::MalformedResponse`].
pub async fn fetch_latest(
    client: &reqwest::Client,
    config: &UpdaterConfig,
) -> Result<ReleaseInfo> {
    debug!("Fetching release metadata from {}", config.releases_url);

    let response = client
        .get(&config.releases_url)
        .timeout(METADATA_TIMEOUT)
        .send()
        .await
        .map_err(|e| UpdaterError::Network {
            operation: "fetching release metadata".to_string(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(UpdaterError::Network {
            operation: "fetching release metadata".to_string(),
            reason: format!("release feed returned HTTP {}", response.status()),
        }
        .into());
    }

    let release: Release = response
        .json()
        .await
        .map_err(|e| UpdaterError::MalformedResponse {
            reason: e.to_string(),
        })?;

    let download_url = select_asset(&release.assets, &config.arch_marker, &config.image_extension);
    if download_url.is_none() {
        warn!(
            "No {} asset ending in {} in the latest release",
            config.arch_marker, config.image_extension
        );
    }

    Ok(ReleaseInfo {
        version: release.tag_name,
        download_url,
    })
}

/// Picks the download URL of the platform-matching asset.
///
/// An asset matches when its name contains `arch_marker` and ends with
/// `extension`. When several match, the last one in listing order wins.
pub fn select_asset(assets: &[ReleaseAsset], arch_marker: &str, extension: &str) -> Option<String> {
    let mut url = None;
    for asset in assets {
        if asset.name.contains(arch_marker) && asset.name.ends_with(extension) {
            url = Some(asset.browser_download_url.clone());
        }
    }
    url
}
