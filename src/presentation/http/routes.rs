//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::config::{CorsSettings, ServerSettings};
use crate::infrastructure::metrics;
use crate::presentation::middleware::{
    create_cors_layer, create_trace_layer, metrics_middleware, request_id_middleware,
};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::json_response;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState, server: &ServerSettings, cors: &CorsSettings) -> Router {
    Router::new()
        .merge(chat_routes())
        // Health check endpoints
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(fallback_handler)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(create_trace_layer())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(create_cors_layer(cors))
        .with_state(state)
}

/// Chat routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chats", post(handlers::chat::create_chat))
        .route(
            "/chats/{id}",
            get(handlers::chat::read_chat).delete(handlers::chat::delete_chat),
        )
        .route("/chats/{id}/messages", post(handlers::message::create_message))
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Unknown routes answer with the same JSON body as a missing chat
async fn fallback_handler() -> Response {
    AppError::NotFound.into_response()
}

/// Known path, unsupported method
async fn method_not_allowed_handler() -> Response {
    json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorResponse {
            error: "method not allowed".to_string(),
        },
    )
}
