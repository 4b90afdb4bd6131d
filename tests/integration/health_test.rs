//! Integration tests for the health endpoint.

mod helpers;

use axum::http::StatusCode;
use serde_json::Value;

use helpers::TestApp;

#[tokio::test]
async fn test_health_ok() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, String::new()).await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["sink"], "file");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_directory_missing() {
    let app = TestApp::with_uncreatable_target();

    let response = app.request("GET", "/health", None, String::new()).await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "degraded");
}
