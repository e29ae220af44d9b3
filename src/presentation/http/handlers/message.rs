//! Message Handlers

use axum::{extract::State, http::StatusCode, response::Response};

use crate::application::dto::{CreateMessageRequest, MessageResponse};
use crate::presentation::http::extractors::{ChatId, RequestContext, ValidatedJson};
use crate::shared::error::AppError;
use crate::shared::response::json_response;
use crate::startup::AppState;

/// POST /chats/{id}/messages
pub async fn create_message(
    State(state): State<AppState>,
    request_ctx: RequestContext,
    ChatId(chat_id): ChatId,
    ValidatedJson(body): ValidatedJson<CreateMessageRequest>,
) -> Result<Response, AppError> {
    let message = state
        .chat_service
        .create_message(request_ctx.ctx(), chat_id, &body.text)
        .await?;

    Ok(json_response(StatusCode::CREATED, MessageResponse::from(message)))
}
