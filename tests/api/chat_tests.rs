//! Chat API Tests

use axum::http::StatusCode;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use pretty_assertions::assert_eq;
use serde_json::json;

use chat_api::domain::RepoError;

use crate::common::{body_bytes, body_json, content_type, TestApp, MAX_BODY_BYTES};

#[tokio::test]
async fn test_create_chat_returns_created() {
    let app = TestApp::new();
    let title: String = Sentence(2..5).fake();

    let response = app
        .post_json("/chats", &json!({ "title": title }).to_string())
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(content_type(&response), "application/json; charset=utf-8");
    let body = body_json(response).await;
    assert_eq!(body["title"], json!(title));
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_chat_trims_title() {
    let app = TestApp::new();

    let response = app
        .post_json("/chats", r#"{"title":"   General   "}"#)
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["title"], "General");
}

#[tokio::test]
async fn test_create_chat_rejects_blank_title() {
    let app = TestApp::new();

    let response = app.post_json("/chats", r#"{"title":"    "}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "title should be between 1 and 200 characters" })
    );
}

#[tokio::test]
async fn test_create_chat_without_title_reports_length_rule() {
    let app = TestApp::new();

    for body in ["{}", r#"{"title":null}"#] {
        let response = app.post_json("/chats", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "title should be between 1 and 200 characters" })
        );
    }
}

#[tokio::test]
async fn test_create_chat_rejects_long_title() {
    let app = TestApp::new();
    let title = "t".repeat(201);

    let response = app
        .post_json("/chats", &json!({ "title": title }).to_string())
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_chat_rejects_malformed_body() {
    let app = TestApp::new();

    let response = app.post_json("/chats", r#"{"title": 12"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("decode error:"));
}

#[tokio::test]
async fn test_create_chat_rejects_oversized_body() {
    let app = TestApp::new();
    let title = "t".repeat(MAX_BODY_BYTES + 1);

    let response = app
        .post_json("/chats", &json!({ "title": title }).to_string())
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_lifecycle() {
    let app = TestApp::new();

    let response = app.post_json("/chats", r#"{"title":"Test Chat"}"#).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let chat = body_json(response).await;
    let chat_id = chat["id"].as_i64().unwrap();
    assert_eq!(chat["title"], "Test Chat");

    let response = app
        .post_json(
            &format!("/chats/{}/messages", chat_id),
            r#"{"text":"Test Text"}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let message = body_json(response).await;
    assert_eq!(message["chat_id"], json!(chat_id));

    let response = app.get(&format!("/chats/{}?limit=20", chat_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let output = body_json(response).await;
    assert_eq!(output["id"], json!(chat_id));
    assert_eq!(output["title"], "Test Chat");
    assert_eq!(output["messages"], json!([message]));

    let response = app.delete(&format!("/chats/{}", chat_id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = app.get(&format!("/chats/{}", chat_id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_read_chat_returns_newest_first() {
    let app = TestApp::new();
    let chat_id = app.create_chat("History").await;
    let first = app.create_message(chat_id, "first").await;
    let second = app.create_message(chat_id, "second").await;
    let third = app.create_message(chat_id, "third").await;

    let response = app.get(&format!("/chats/{}", chat_id)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let ids: Vec<i64> = body_json(response).await["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[tokio::test]
async fn test_read_chat_limit_is_clamped() {
    let app = TestApp::new();
    let chat_id = app.create_chat("Limits").await;
    for i in 0..3 {
        app.create_message(chat_id, &format!("message {}", i)).await;
    }

    for (query, expected) in [("limit=0", 1), ("limit=1000", 3), ("limit=2", 2), ("limit=abc", 3)] {
        let response = app.get(&format!("/chats/{}?{}", chat_id, query)).await;
        assert_eq!(response.status(), StatusCode::CREATED, "{}", query);
        let count = body_json(response).await["messages"].as_array().unwrap().len();
        assert_eq!(count, expected, "{}", query);
    }
}

#[tokio::test]
async fn test_read_chat_repeated_limit_uses_first_value() {
    let app = TestApp::new();
    let chat_id = app.create_chat("Repeated").await;
    for i in 0..3 {
        app.create_message(chat_id, &format!("message {}", i)).await;
    }

    let response = app.get(&format!("/chats/{}?limit=1&limit=2", chat_id)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(content_type(&response), "application/json; charset=utf-8");
    let count = body_json(response).await["messages"].as_array().unwrap().len();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_read_chat_without_messages_has_empty_list() {
    let app = TestApp::new();
    let chat_id = app.create_chat("Quiet").await;

    let response = app.get(&format!("/chats/{}", chat_id)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["messages"], json!([]));
}

#[tokio::test]
async fn test_read_missing_chat_returns_not_found() {
    let app = TestApp::new();

    let response = app.get("/chats/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "object not found" }));
}

#[tokio::test]
async fn test_invalid_chat_id_is_rejected() {
    let app = TestApp::new();

    for uri in ["/chats/abc", "/chats/0", "/chats/-3"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body_json(response).await, json!({ "error": "invalid chat id" }));
    }

    let response = app.delete("/chats/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "invalid chat id" }));

    let response = app
        .post_json("/chats/-1/messages", r#"{"text":"hello"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "invalid chat id" }));
}

#[tokio::test]
async fn test_delete_chat_removes_messages() {
    let app = TestApp::new();
    let chat_id = app.create_chat("Doomed").await;
    app.create_message(chat_id, "bye").await;

    let response = app.delete(&format!("/chats/{}", chat_id)).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.store.message_count(chat_id), 0);
}

#[tokio::test]
async fn test_delete_absent_chat_succeeds() {
    let app = TestApp::new();

    let response = app.delete("/chats/12345").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_store_deadline_maps_to_gateway_timeout() {
    let app = TestApp::new();
    app.store.fail_with(RepoError::ContextDeadline);

    let response = app.post_json("/chats", r#"{"title":"Slow"}"#).await;

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body_json(response).await, json!({ "error": "request timeout" }));
}

#[tokio::test]
async fn test_store_failure_maps_to_internal_error() {
    let app = TestApp::new();
    app.store.fail_with(RepoError::Unknown);

    let response = app.get("/chats/1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "internal server error" })
    );
}

#[tokio::test]
async fn test_unknown_route_returns_json_not_found() {
    let app = TestApp::new();

    let response = app.get("/nowhere").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(content_type(&response), "application/json; charset=utf-8");
    assert_eq!(body_json(response).await, json!({ "error": "object not found" }));
}

#[tokio::test]
async fn test_unsupported_method_returns_json() {
    let app = TestApp::new();

    let response = app.post_json("/chats/1", r#"{"title":"General"}"#).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(content_type(&response), "application/json; charset=utf-8");
    assert_eq!(body_json(response).await, json!({ "error": "method not allowed" }));
}
