//! Application Error Types
//!
//! Centralized error handling with Axum integration. Only four outcomes reach
//! a client, each with a fixed message except `BadRequest`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::response::json_response;
use crate::application::services::ServiceError;

pub const NOT_FOUND_MESSAGE: &str = "object not found";
pub const TIMEOUT_MESSAGE: &str = "request timeout";
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// Application error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("object not found")]
    NotFound,

    #[error("request timeout")]
    Timeout,

    #[error("internal server error")]
    Internal,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::ChatNotFound => AppError::NotFound,
            ServiceError::Timeout => AppError::Timeout,
            ServiceError::Internal => AppError::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), "Request failed: {}", self);
        }

        json_response(
            status,
            ErrorResponse {
                error: self.to_string(),
            },
        )
    }
}
