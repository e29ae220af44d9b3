//! Custom Extractors
//!
//! Axum extractors for request parsing: validated JSON bodies, chat ids from
//! the path and the per-request cancellation context.

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tokio_util::sync::DropGuard;
use validator::Validate;

use crate::application::dto::Sanitize;
use crate::domain::OperationContext;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

pub const DEFAULT_MESSAGES_LIMIT: i64 = 20;
pub const MAX_MESSAGES_LIMIT: i64 = 100;

/// JSON body that has been decoded, validated and sanitized, in that order.
///
/// The `Content-Type` header is not inspected.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Sanitize,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| decode_error(rejection.body_text()))?;

        let mut value: T =
            serde_json::from_slice(&body).map_err(|e| decode_error(e.to_string()))?;
        value.validate().map_err(validation_error)?;
        value.sanitize();

        Ok(Self(value))
    }
}

fn decode_error(reason: impl std::fmt::Display) -> AppError {
    AppError::BadRequest(format!("decode error: {}", reason))
}

/// Positive chat id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatId(pub i64);

impl<S> FromRequestParts<S> for ChatId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_chat_id())?;

        parse_chat_id(&raw).map(ChatId).ok_or_else(invalid_chat_id)
    }
}

fn invalid_chat_id() -> AppError {
    AppError::BadRequest("invalid chat id".to_string())
}

pub fn parse_chat_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Parse the `limit` query value: absent or unparsable falls back to the
/// default, anything else is clamped into `[1, 100]`.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_MESSAGES_LIMIT;
    };

    match raw.parse::<i64>() {
        Ok(limit) => limit.clamp(1, MAX_MESSAGES_LIMIT),
        Err(_) => {
            tracing::warn!(limit = raw, "Unparsable limit, using default");
            DEFAULT_MESSAGES_LIMIT
        }
    }
}

/// Cancellation context scoped to one request.
///
/// The context is cancelled when the extractor is dropped, which happens when
/// the handler completes or the client goes away mid-request.
pub struct RequestContext {
    ctx: OperationContext,
    _guard: DropGuard,
}

impl RequestContext {
    pub fn new() -> Self {
        let ctx = OperationContext::new();
        let guard = ctx.cancel_on_drop();
        Self { ctx, _guard: guard }
    }

    pub fn ctx(&self) -> &OperationContext {
        &self.ctx
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::new())
    }
}
