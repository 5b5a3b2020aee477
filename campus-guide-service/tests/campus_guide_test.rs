//! End-to-end tests for `POST /campus-guide` with a mock text provider.

mod common;

use campus_guide_service::models::GuideResponse;
use campus_guide_service::services::providers::mock::MockTextProvider;
use common::TestApp;
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn reply_mentioning_a_location_shows_the_map() {
    let provider = Arc::new(MockTextProvider::new(
        "Books galore await you at the central library, right in the middle of campus!",
    ));
    let app = TestApp::spawn_with_provider(provider.clone()).await;

    let response = app.ask("/campus-guide", "Where can I study?").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "message": "Books galore await you at the central library, right in the middle of campus!",
            "location": { "id": "library" },
            "showMap": true
        })
    );

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Where can I study?"));
}

#[tokio::test]
async fn first_location_in_catalog_order_wins() {
    let provider = Arc::new(MockTextProvider::new(
        "Grab a snack at the Cafeteria, then exit through the Main Gate.",
    ));
    let app = TestApp::spawn_with_provider(provider).await;

    let body: GuideResponse = app
        .ask("/campus-guide", "Plan my afternoon")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body.location.map(|l| l.id).as_deref(), Some("main_gate"));
    assert!(body.show_map);
}

#[tokio::test]
async fn reply_without_location_returns_null_location() {
    let provider = Arc::new(MockTextProvider::new("Semester exams begin in December."));
    let app = TestApp::spawn_with_provider(provider).await;

    let response = app.ask("/api/campus-guide", "When are exams?").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["location"], Value::Null);
    assert_eq!(body["showMap"], false);
    assert_eq!(body["message"], "Semester exams begin in December.");
}

#[tokio::test]
async fn provider_failure_returns_generic_server_error() {
    let provider = Arc::new(MockTextProvider::failing("upstream quota exhausted"));
    let app = TestApp::spawn_with_provider(provider).await;

    let response = app.ask("/campus-guide", "Hello").await;
    assert_eq!(response.status().as_u16(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Internal server error");
    assert!(!body.to_string().contains("quota"));
}

#[tokio::test]
async fn empty_query_is_forwarded_to_provider() {
    let provider = Arc::new(MockTextProvider::new("Ask me anything about campus!"));
    let app = TestApp::spawn_with_provider(provider.clone()).await;

    let response = app.ask("/campus-guide", "").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Ask me anything about campus!");
    assert_eq!(body["showMap"], false);
    assert_eq!(provider.prompts().len(), 1);
}

#[tokio::test]
async fn long_query_is_forwarded_to_provider() {
    let provider = Arc::new(MockTextProvider::new("That is a lot of questions."));
    let app = TestApp::spawn_with_provider(provider.clone()).await;
    let query = "where is the library ".repeat(200);

    let response = app.ask("/campus-guide", &query).await;

    assert_eq!(response.status().as_u16(), 200);
    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(query.as_str()));
}

#[tokio::test]
async fn oversized_query_is_rejected() {
    let provider = Arc::new(MockTextProvider::new("unused"));
    let app = TestApp::spawn_with_provider(provider.clone()).await;

    let response = app.ask("/campus-guide", &"a".repeat(65537)).await;

    assert_eq!(response.status().as_u16(), 422);
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn missing_query_field_is_rejected() {
    let provider = Arc::new(MockTextProvider::new("unused"));
    let app = TestApp::spawn_with_provider(provider.clone()).await;

    let response = app
        .client
        .post(format!("{}/campus-guide", app.address))
        .json(&json!({ "question": "wrong field" }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert!(provider.prompts().is_empty());
}
