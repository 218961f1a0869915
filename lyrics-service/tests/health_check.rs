//! Integration tests for lyrics-service infrastructure probes.

mod common;

use common::{mock_provider_config, TestApp};
use reqwest::Client;
use std::time::Duration;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn(mock_provider_config()).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "lyrics-service");
}

#[tokio::test]
async fn readiness_check_returns_ok_with_mock_provider() {
    let app = TestApp::spawn(mock_provider_config()).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}
