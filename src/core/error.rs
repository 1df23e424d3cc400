//! Error handling for chromup
//!
//! Every failure mode of the update workflow maps onto one variant of
//! [`UpdaterError`]. Functions return [`anyhow::Result`] and attach context
//! with `.context()`; the typed variant is constructed at the failure site
//! and stays downcastable for callers (and tests) that need to distinguish
//! failure classes.
//!
//! Propagation policy: errors in resolving the release, reading installed
//! metadata, downloading, mounting, or copying propagate to the top level
//! uncaught - there is no retry logic anywhere. Cleanup-phase failures
//! (unmount, temp removal) are logged and never raised, so they cannot mask
//! the primary failure.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for chromup operations.
#[derive(Error, Debug)]
pub enum UpdaterError {
    /// The release-metadata endpoint was unreachable, timed out, or
    /// answered with a non-success status.
    #[error("network error during {operation}: {reason}")]
    Network {
        /// What was being attempted (e.g., "fetching release metadata").
        operation: String,
        /// Underlying transport or HTTP failure.
        reason: String,
    },

    /// The release feed answered, but the body was not valid structured
    /// data in the expected shape.
    #[error("malformed release feed response: {reason}")]
    MalformedResponse {
        /// Decoder failure detail.
        reason: String,
    },

    /// An `Info.plist` exists but could not be parsed. A missing plist is
    /// not an error; it means "not installed".
    #[error("failed to parse bundle metadata at {path}: {reason}")]
    MetadataParse {
        /// Path to the metadata file that failed to parse.
        path: PathBuf,
        /// Parser failure detail.
        reason: String,
    },

    /// Streaming the artifact to local storage failed.
    #[error("failed to download {url}: {reason}")]
    Download {
        /// The artifact URL being fetched.
        url: String,
        /// Transport or I/O failure detail.
        reason: String,
    },

    /// The disk-image attach tool reported a non-zero exit status. Fatal
    /// for the run; never retried.
    #[error("failed to mount disk image {image}: {reason}")]
    Mount {
        /// Path to the downloaded disk image.
        image: PathBuf,
        /// Stderr captured from the attach tool.
        reason: String,
    },

    /// Removing the previous install or copying the new bundle failed.
    #[error("failed to install application bundle: {reason}")]
    Install {
        /// Stderr captured from the failing tool.
        reason: String,
    },
}
