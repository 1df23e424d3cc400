//! Release feed resolution and its failure modes, exercised through the
//! check-only workflow (no install side effects).

use chromup::bundle::InstalledVersion;
use chromup::core::UpdaterError;
use chromup::updater::{self, Outcome};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{DMG_NAME, LATEST_TAG, TestEnv};

#[tokio::test]
async fn check_reports_available_update() {
    let env = TestEnv::new().await;
    env.install_bundle("1.0.0");
    env.serve_release(LATEST_TAG, &[(DMG_NAME, env.artifact_url(DMG_NAME))])
        .await;

    let outcome = updater::check(&env.config).await.unwrap();
    assert_eq!(
        outcome,
        Outcome::UpdateAvailable {
            installed: InstalledVersion::Found("1.0.0".to_string()),
            latest: LATEST_TAG.to_string(),
        }
    );
}

#[tokio::test]
async fn check_reports_up_to_date() {
    let env = TestEnv::new().await;
    env.install_bundle("145.0.7632.45");
    env.serve_release(LATEST_TAG, &[(DMG_NAME, env.artifact_url(DMG_NAME))])
        .await;

    let outcome = updater::check(&env.config).await.unwrap();
    assert!(matches!(outcome, Outcome::UpToDate { .. }));
}

#[tokio::test]
async fn release_without_version_tag_is_not_actionable() {
    let env = TestEnv::new().await;

    let body = serde_json::json!({
        "tag_name": null,
        "assets": [{
            "name": DMG_NAME,
            "browser_download_url": env.artifact_url(DMG_NAME),
        }],
    });
    Mock::given(method("GET"))
        .and(path("/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&env.server)
        .await;

    let outcome = updater::check(&env.config).await.unwrap();
    assert_eq!(outcome, Outcome::NoActionableUpdate);
}

#[tokio::test]
async fn undecodable_feed_body_is_a_malformed_response() {
    let env = TestEnv::new().await;

    Mock::given(method("GET"))
        .and(path("/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&env.server)
        .await;

    let error = updater::check(&env.config).await.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<UpdaterError>(),
        Some(UpdaterError::MalformedResponse { .. })
    ));
}

#[tokio::test]
async fn feed_server_error_is_a_network_error() {
    let env = TestEnv::new().await;

    Mock::given(method("GET"))
        .and(path("/releases/latest"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&env.server)
        .await;

    let error = updater::check(&env.config).await.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<UpdaterError>(),
        Some(UpdaterError::Network { .. })
    ));
}

#[tokio::test]
async fn unreachable_feed_is_a_network_error() {
    let mut env = TestEnv::new().await;
    // Nothing listens on the discard port.
    env.config.releases_url = "http://127.0.0.1:1/releases/latest".to_string();

    let error = updater::check(&env.config).await.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<UpdaterError>(),
        Some(UpdaterError::Network { .. })
    ));
}
