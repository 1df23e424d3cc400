//! Binary surface: flags, exit codes, and check mode.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{DMG_NAME, LATEST_TAG, TestEnv};

fn chromup(env: &TestEnv) -> Command {
    let mut cmd = Command::cargo_bin("chromup").unwrap();
    cmd.env("CHROMUP_RELEASES_URL", &env.config.releases_url)
        .env("CHROMUP_APP_PATH", &env.config.app_path)
        .env("CHROMUP_TMPDIR", &env.config.temp_dir)
        .env("CHROMUP_NO_PROGRESS", "1");
    cmd
}

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("chromup")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ungoogled-chromium"))
        .stdout(predicate::str::contains("--check"));
}

#[test]
fn verbose_and_quiet_conflict() {
    Command::cargo_bin("chromup")
        .unwrap()
        .args(["--verbose", "--quiet"])
        .assert()
        .failure();
}

#[tokio::test(flavor = "multi_thread")]
async fn up_to_date_run_exits_zero() {
    let env = TestEnv::new().await;
    env.install_bundle("145.0.7632.45");
    env.serve_release(LATEST_TAG, &[(DMG_NAME, env.artifact_url(DMG_NAME))])
        .await;

    let mut cmd = chromup(&env);
    tokio::task::spawn_blocking(move || {
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Up to date"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn check_mode_reports_without_installing() {
    let env = TestEnv::new().await;
    env.install_bundle("1.0.0");
    env.serve_release(LATEST_TAG, &[(DMG_NAME, env.artifact_url(DMG_NAME))])
        .await;

    let mut cmd = chromup(&env);
    cmd.arg("--check");
    tokio::task::spawn_blocking(move || {
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Update available"));
    })
    .await
    .unwrap();

    // Check mode never touches the scratch directory.
    let leftovers: Vec<_> = std::fs::read_dir(&env.config.temp_dir)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(leftovers.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn no_matching_asset_exits_zero() {
    let env = TestEnv::new().await;
    env.install_bundle("1.0.0");
    env.serve_release(
        LATEST_TAG,
        &[(
            "ungoogled-chromium_145.0.7632.45-1.1_x86_64-macos.dmg",
            env.artifact_url("other.dmg"),
        )],
    )
    .await;

    let mut cmd = chromup(&env);
    tokio::task::spawn_blocking(move || {
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("No installable build"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_feed_exits_one() {
    let env = TestEnv::new().await;

    let mut cmd = chromup(&env);
    cmd.env("CHROMUP_RELEASES_URL", "http://127.0.0.1:1/releases/latest");
    tokio::task::spawn_blocking(move || {
        cmd.assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("error:"))
            .stderr(predicate::str::contains("network error"));
    })
    .await
    .unwrap();
}
