//! Health Check and Metrics API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_bytes, body_json, TestApp};

#[tokio::test]
async fn test_liveness_returns_alive() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "alive" }));
}

#[tokio::test]
async fn test_readiness_returns_ready() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ready" }));
}

#[tokio::test]
async fn test_readiness_reports_unreachable_store() {
    let app = TestApp::new();
    app.store.set_unreachable(true);

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await, json!({ "status": "unavailable" }));
}

#[tokio::test]
async fn test_metrics_exposes_request_counter() {
    let app = TestApp::new();
    app.get("/health/live").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("chat_api_http_requests_total"));
    assert!(text.contains("/health/live"));
}

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;
    let generated = response.headers().get("x-request-id").unwrap();
    assert!(!generated.is_empty());

    let response = app
        .get_with_header("/health/live", "x-request-id", "abc-123")
        .await;
    assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
}
