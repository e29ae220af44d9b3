//! Health Check Handlers
//!
//! Liveness and readiness probes.
//!
//! # Endpoints
//! - `GET /health/live` - Liveness probe (is the server running?)
//! - `GET /health/ready` - Readiness probe (is storage reachable?)

use axum::{extract::State, http::StatusCode, response::Response};

use crate::application::dto::HealthResponse;
use crate::domain::OperationContext;
use crate::shared::response::json_response;
use crate::startup::AppState;

/// Liveness probe - never touches storage
pub async fn liveness() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "alive".to_string(),
        },
    )
}

/// Readiness probe - 200 when storage answers a ping, 503 otherwise
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.store_health.ping(&OperationContext::new()).await {
        Ok(()) => json_response(
            StatusCode::OK,
            HealthResponse {
                status: "ready".to_string(),
            },
        ),
        Err(e) => {
            tracing::warn!(error = e.as_str(), "Readiness check failed");
            json_response(
                StatusCode::SERVICE_UNAVAILABLE,
                HealthResponse {
                    status: "unavailable".to_string(),
                },
            )
        }
    }
}
