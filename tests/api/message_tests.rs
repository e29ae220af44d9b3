//! Message API Tests

use axum::http::StatusCode;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_create_message_returns_created() {
    let app = TestApp::new();
    let chat_id = app.create_chat("General").await;
    let text: String = Sentence(3..8).fake();

    let response = app
        .post_json(
            &format!("/chats/{}/messages", chat_id),
            &json!({ "text": text }).to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["chat_id"], json!(chat_id));
    assert_eq!(body["text"], json!(text));
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_message_trims_text() {
    let app = TestApp::new();
    let chat_id = app.create_chat("General").await;

    let response = app
        .post_json(
            &format!("/chats/{}/messages", chat_id),
            r#"{"text":"\n  hello  \t"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["text"], "hello");
}

#[tokio::test]
async fn test_create_message_for_absent_chat_returns_not_found() {
    let app = TestApp::new();

    let response = app
        .post_json("/chats/777/messages", r#"{"text":"anyone?"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "object not found" }));
    assert_eq!(app.store.message_count(777), 0);
}

#[tokio::test]
async fn test_create_message_without_text_reports_length_rule() {
    let app = TestApp::new();
    let chat_id = app.create_chat("General").await;

    let response = app
        .post_json(&format!("/chats/{}/messages", chat_id), "{}")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "text should be between 1 and 5000 characters" })
    );
}

#[tokio::test]
async fn test_create_message_rejects_long_text() {
    let app = TestApp::new();
    let chat_id = app.create_chat("General").await;
    let text = "x".repeat(5001);

    let response = app
        .post_json(
            &format!("/chats/{}/messages", chat_id),
            &json!({ "text": text }).to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "text should be between 1 and 5000 characters" })
    );
    assert_eq!(app.store.message_count(chat_id), 0);
}

#[tokio::test]
async fn test_create_message_accepts_text_at_limit() {
    let app = TestApp::new();
    let chat_id = app.create_chat("General").await;
    let text = "é".repeat(5000);

    let response = app
        .post_json(
            &format!("/chats/{}/messages", chat_id),
            &json!({ "text": text }).to_string(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_message_rejects_invalid_chat_id() {
    let app = TestApp::new();

    let response = app
        .post_json("/chats/abc/messages", r#"{"text":"hello"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "invalid chat id" }));
}
