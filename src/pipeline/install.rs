//! Mount, copy, and guaranteed cleanup.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::UpdaterConfig;
use crate::constants::{CP, HDIUTIL, MOUNT_POINT_PREFIX, RM};
use crate::core::UpdaterError;
use crate::pipeline::command::CommandRunner;

/// Mounts the downloaded disk image, replaces the installed bundle, and
/// tears the temporary state down again.
///
/// The observable tool sequence is contractual: attach, remove the old
/// install if present, copy the new bundle, detach, remove the artifact and
/// mount point. Cleanup runs on every path out of the mount and copy
/// phases; its failures are logged, never raised, so they cannot mask the
/// primary error.
pub async fn install_artifact(
    runner: &dyn CommandRunner,
    config: &UpdaterConfig,
    image: &Path,
) -> Result<()> {
    let mount_point = tempfile::Builder::new()
        .prefix(MOUNT_POINT_PREFIX)
        .tempdir_in(&config.temp_dir)
        .context("failed to create mount point directory")?
        .keep();

    info!("Mounting disk image at {}", mount_point.display());

    let attached = runner
        .run(
            HDIUTIL,
            &[
                OsStr::new("attach"),
                OsStr::new("-quiet"),
                OsStr::new("-nobrowse"),
                image.as_os_str(),
                OsStr::new("-mountpoint"),
                mount_point.as_os_str(),
            ],
        )
        .await?;

    if !attached.success {
        cleanup(runner, image, &mount_point).await;
        return Err(UpdaterError::Mount {
            image: image.to_path_buf(),
            reason: attached.stderr,
        }
        .into());
    }

    let result = copy_bundle(runner, config, &mount_point).await;
    cleanup(runner, image, &mount_point).await;
    result
}

async fn copy_bundle(
    runner: &dyn CommandRunner,
    config: &UpdaterConfig,
    mount_point: &Path,
) -> Result<()> {
    let bundle_name = config
        .app_path
        .file_name()
        .context("application path has no bundle name")?;
    let source = mount_point.join(bundle_name);
    let target = &config.app_path;

    if target.exists() {
        info!("Removing previous install at {}", target.display());
        let removed = runner
            .run(RM, &[OsStr::new("-rf"), target.as_os_str()])
            .await?;
        if !removed.success {
            return Err(UpdaterError::Install {
                reason: format!("failed to remove previous install: {}", removed.stderr),
            }
            .into());
        }
    }

    info!("Copying {} to {}", source.display(), target.display());
    let copied = runner
        .run(
            CP,
            &[OsStr::new("-R"), source.as_os_str(), target.as_os_str()],
        )
        .await?;
    if !copied.success {
        return Err(UpdaterError::Install {
            reason: format!("failed to copy new bundle: {}", copied.stderr),
        }
        .into());
    }

    Ok(())
}

/// Best-effort teardown of the mount point and the downloaded image.
async fn cleanup(runner: &dyn CommandRunner, image: &Path, mount_point: &Path) {
    info!("Unmounting {}", mount_point.display());
    match runner
        .run(
            HDIUTIL,
            &[
                OsStr::new("detach"),
                OsStr::new("-quiet"),
                mount_point.as_os_str(),
            ],
        )
        .await
    {
        Ok(output) if !output.success => {
            warn!("Failed to detach {}: {}", mount_point.display(), output.stderr);
        }
        Err(e) => warn!("Failed to detach {}: {e:#}", mount_point.display()),
        Ok(_) => {}
    }

    info!(
        "Removing temporary image {} and mount point {}",
        image.display(),
        mount_point.display()
    );
    match runner
        .run(
            RM,
            &[
                OsStr::new("-rf"),
                image.as_os_str(),
                mount_point.as_os_str(),
            ],
        )
        .await
    {
        Ok(output) if !output.success => {
            warn!("Failed to remove temporary files: {}", output.stderr);
        }
        Err(e) => warn!("Failed to remove temporary files: {e:#}"),
        Ok(_) => {}
    }
}
