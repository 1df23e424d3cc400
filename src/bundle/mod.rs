//! Installed-version inspection.
//!
//! Reads the application bundle's `Contents/Info.plist` to determine the
//! currently installed version. A missing bundle or plist is not an error:
//! it yields [`InstalledVersion::NotInstalled`], a first-class "first
//! install" outcome. Only a plist that exists but cannot be parsed raises
//! [`UpdaterError::MetadataParse`].

use std::fmt;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

use crate::core::UpdaterError;

/// Version state of the local application bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstalledVersion {
    /// A version string was read from the bundle metadata.
    Found(String),
    /// No bundle, no metadata file, or no usable version field.
    NotInstalled,
}

impl InstalledVersion {
    /// The version string, if one was found.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Found(version) => Some(version),
            Self::NotInstalled => None,
        }
    }
}

impl fmt::Display for InstalledVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(version) => f.write_str(version),
            Self::NotInstalled => f.write_str("none"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BundleInfo {
    #[serde(rename = "CFBundleShortVersionString")]
    short_version: Option<String>,
    #[serde(rename = "CFBundleVersion")]
    build_version: Option<String>,
}

/// Reads the installed version from `<app_path>/Contents/Info.plist`.
///
/// Prefers the human-readable `CFBundleShortVersionString` and falls back
/// to `CFBundleVersion`; empty strings count as absent.
pub fn installed_version(app_path: &Path) -> Result<InstalledVersion> {
    let info_plist = app_path.join("Contents").join("Info.plist");

    if !info_plist.exists() {
        debug!(
            "No bundle metadata at {}, treating as not installed",
            info_plist.display()
        );
        return Ok(InstalledVersion::NotInstalled);
    }

    let info: BundleInfo =
        plist::from_file(&info_plist).map_err(|e| UpdaterError::MetadataParse {
            path: info_plist.clone(),
            reason: e.to_string(),
        })?;

    let version = info
        .short_version
        .filter(|v| !v.is_empty())
        .or(info.build_version.filter(|v| !v.is_empty()));

    Ok(version.map_or(InstalledVersion::NotInstalled, InstalledVersion::Found))
}
