//! Global constants used throughout the chromup codebase.
//!
//! Timeouts, fixed paths, and tuning knobs live here so magic numbers stay
//! discoverable and consistent across modules.

use std::time::Duration;

/// Release-metadata endpoint for the ungoogled-chromium macOS builds.
pub const RELEASES_URL: &str =
    "https://api.github.com/repos/ungoogled-software/ungoogled-chromium-macos/releases/latest";

/// Where the application bundle is expected to be installed.
pub const DEFAULT_APP_PATH: &str = "/Applications/Chromium.app";

/// Architecture marker an installable asset name must contain.
pub const ASSET_ARCH_MARKER: &str = "arm64";

/// File extension an installable asset name must end with.
pub const ASSET_EXTENSION: &str = ".dmg";

/// Connect/read timeout for the release-metadata request. The artifact
/// download itself has no enforced timeout.
pub const METADATA_TIMEOUT: Duration = Duration::from_secs(15);

/// Chunk size for streaming the artifact to disk (8 KiB).
pub const DOWNLOAD_CHUNK_SIZE: usize = 8 * 1024;

/// Emit a download progress line at least every this many percentage points
/// when the total size is known.
pub const PROGRESS_LOG_STEP_PERCENT: u64 = 5;

/// Version tags compare on at most this many leading numeric components,
/// normalizing `MAJOR.MINOR.PATCH.BUILD` tags against longer suffixes.
pub const MAX_VERSION_COMPONENTS: usize = 4;

/// Prefix for the temporary mount point directory.
pub const MOUNT_POINT_PREFIX: &str = "ungoogled-chromium-";

/// Disk-image attach/detach tool.
pub const HDIUTIL: &str = "/usr/bin/hdiutil";

/// Recursive remove, used for old-install removal and temp cleanup.
pub const RM: &str = "/bin/rm";

/// Recursive copy, used to install the new bundle.
pub const CP: &str = "/bin/cp";
