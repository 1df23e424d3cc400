//! Narrow subprocess seam for the install pipeline.
//!
//! Disk-image mounting is an OS capability, not something this tool
//! reimplements. The pipeline therefore depends on external utilities
//! through [`CommandRunner`] - path in, exit status out - so the whole
//! install sequence can be exercised with a recording stub in tests.

use std::ffi::OsStr;
use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Captured result of one external tool invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the tool exited with status zero.
    pub success: bool,
    /// Captured standard error, used in failure reports.
    pub stderr: String,
}

/// Executes external OS utilities (disk-image attach/detach, recursive
/// copy and remove).
///
/// `Err` means the tool could not be executed at all; a tool that ran but
/// exited non-zero is reported through [`CommandOutput::success`] so
/// callers decide whether that is fatal (mount, copy) or merely logged
/// (cleanup).
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args`, blocking the workflow until it exits.
    async fn run(&self, program: &str, args: &[&OsStr]) -> Result<CommandOutput>;
}

/// Production runner backed by [`tokio::process::Command`].
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&OsStr]) -> Result<CommandOutput> {
        debug!("Running {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("failed to execute {program}"))?;

        Ok(CommandOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
