//! Chat Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::dto::{
    ChatMessagesQuery, ChatMessagesResponse, ChatResponse, CreateChatRequest,
};
use crate::presentation::http::extractors::{parse_limit, ChatId, RequestContext, ValidatedJson};
use crate::shared::error::AppError;
use crate::shared::response::json_response;
use crate::startup::AppState;

/// POST /chats
pub async fn create_chat(
    State(state): State<AppState>,
    request_ctx: RequestContext,
    ValidatedJson(body): ValidatedJson<CreateChatRequest>,
) -> Result<Response, AppError> {
    let chat = state
        .chat_service
        .create_chat(request_ctx.ctx(), &body.title)
        .await?;

    Ok(json_response(StatusCode::CREATED, ChatResponse::from(chat)))
}

/// GET /chats/{id}?limit=N
///
/// Answers 201 on success, which existing clients rely on.
pub async fn read_chat(
    State(state): State<AppState>,
    request_ctx: RequestContext,
    ChatId(chat_id): ChatId,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let query = ChatMessagesQuery::from_pairs(params);
    let limit = parse_limit(query.limit.as_deref());

    let output = state
        .chat_service
        .read_chat_messages(request_ctx.ctx(), chat_id, limit)
        .await?;

    Ok(json_response(
        StatusCode::CREATED,
        ChatMessagesResponse::from(output),
    ))
}

/// DELETE /chats/{id}
pub async fn delete_chat(
    State(state): State<AppState>,
    request_ctx: RequestContext,
    ChatId(chat_id): ChatId,
) -> Result<impl IntoResponse, AppError> {
    state
        .chat_service
        .delete_chat(request_ctx.ctx(), chat_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
