//! Fetch & install pipeline.
//!
//! Streams the resolved disk image into the temp directory, then mounts,
//! copies, and unmounts it. The external tool sequence is contractual:
//! attach, optionally remove the old install, copy the new bundle, detach,
//! remove the temporary artifact and mount point. Cleanup always runs, even
//! when mounting or copying fails.

pub mod command;
pub mod download;
pub mod install;

pub use command::{CommandOutput, CommandRunner, SystemRunner};
pub use download::download_artifact;
pub use install::install_artifact;
