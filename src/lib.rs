//! chromup - Updater for ungoogled-chromium on macOS
//!
//! Checks the ungoogled-chromium-macos release feed on GitHub for the newest
//! build, compares it against the locally installed application bundle, and
//! if a newer build exists, downloads the arm64 disk image and installs it.
//!
//! # Workflow
//!
//! The whole tool is one sequential workflow:
//! 1. Resolve the latest release tag and matching asset URL ([`release`])
//! 2. Inspect the installed bundle's `Info.plist` ([`bundle`])
//! 3. Compare version tags as truncated numeric tuples ([`version`])
//! 4. Download and install the disk image ([`pipeline`])
//!
//! [`updater`] wires the steps together, and [`cli`] exposes them as the
//! `chromup` binary. External disk-image and filesystem tools (`hdiutil`,
//! `cp`, `rm`) are invoked through the narrow [`pipeline::CommandRunner`]
//! seam so the install sequence can be exercised entirely with stubs.
//!
//! # Modules
//!
//! - [`bundle`] - Installed-version inspection via `Info.plist`
//! - [`cli`] - Command-line interface and logging setup
//! - [`config`] - Runtime configuration with environment overrides
//! - [`core`] - Error taxonomy
//! - [`pipeline`] - Artifact download and the mount/copy/cleanup sequence
//! - [`release`] - Release feed resolution and asset selection
//! - [`updater`] - Top-level orchestration
//! - [`version`] - Version key extraction and ordering

pub mod bundle;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod pipeline;
pub mod release;
pub mod updater;
pub mod utils;
pub mod version;
