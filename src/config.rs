//! Runtime configuration for the updater.
//!
//! Defaults come from [`crate::constants`]; each location can be overridden
//! through an environment variable so the integration suite (and unusual
//! setups) can point the updater at a different feed, bundle path, or
//! scratch directory without touching the code.

use std::env;
use std::path::PathBuf;

use crate::constants;

/// Overrides the release-metadata endpoint URL.
pub const RELEASES_URL_ENV: &str = "CHROMUP_RELEASES_URL";

/// Overrides the installed application bundle path.
pub const APP_PATH_ENV: &str = "CHROMUP_APP_PATH";

/// Overrides where downloaded artifacts and mount points are created.
pub const TEMP_DIR_ENV: &str = "CHROMUP_TMPDIR";

/// Fixed inputs of one updater run.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Release-metadata endpoint to query.
    pub releases_url: String,
    /// Path of the installed application bundle.
    pub app_path: PathBuf,
    /// Architecture marker an asset name must contain to be installable.
    pub arch_marker: String,
    /// Extension an asset name must end with to be installable.
    pub image_extension: String,
    /// Directory for the downloaded artifact and the mount point.
    pub temp_dir: PathBuf,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            releases_url: constants::RELEASES_URL.to_string(),
            app_path: PathBuf::from(constants::DEFAULT_APP_PATH),
            arch_marker: constants::ASSET_ARCH_MARKER.to_string(),
            image_extension: constants::ASSET_EXTENSION.to_string(),
            temp_dir: env::temp_dir(),
        }
    }
}

impl UpdaterConfig {
    /// Builds the configuration from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(RELEASES_URL_ENV) {
            config.releases_url = url;
        }
        if let Ok(path) = env::var(APP_PATH_ENV) {
            config.app_path = PathBuf::from(path);
        }
        if let Ok(dir) = env::var(TEMP_DIR_ENV) {
            config.temp_dir = PathBuf::from(dir);
        }
        config
    }
}
