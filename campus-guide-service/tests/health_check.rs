//! Integration tests for the liveness and metrics endpoints.

mod common;

use campus_guide_service::services::providers::mock::MockTextProvider;
use common::TestApp;
use std::sync::Arc;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn_with_provider(Arc::new(MockTextProvider::new("hi"))).await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "campus-guide-service");
}

#[tokio::test]
async fn metrics_endpoint_serves_text() {
    let app = TestApp::spawn_with_provider(Arc::new(MockTextProvider::new("hi"))).await;

    let response = app
        .client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
}
