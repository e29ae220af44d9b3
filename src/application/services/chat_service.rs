//! Chat Service
//!
//! The use cases of the service: create and delete chats, post messages and
//! read a chat with its latest messages. Repository failures are narrowed to
//! [`ServiceError`] here; no retries are attempted.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Chat, ChatMessages, ChatReader, ChatRemover, ChatSaver, Message, MessageReader, MessageSaver,
    OperationContext, RepoError,
};

/// Chat service trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Create a chat with an already validated and trimmed title
    async fn create_chat(&self, ctx: &OperationContext, title: &str) -> Result<Chat, ServiceError>;

    /// Delete a chat and, transitively, its messages
    async fn delete_chat(&self, ctx: &OperationContext, chat_id: i64) -> Result<(), ServiceError>;

    /// Post a message into an existing chat
    async fn create_message(
        &self,
        ctx: &OperationContext,
        chat_id: i64,
        text: &str,
    ) -> Result<Message, ServiceError>;

    /// Read a chat with at most `limit` of its messages, newest first
    async fn read_chat_messages(
        &self,
        ctx: &OperationContext,
        chat_id: i64,
        limit: i64,
    ) -> Result<ChatMessages, ServiceError>;
}

/// Chat service errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("timeout request")]
    Timeout,

    #[error("internal service error")]
    Internal,

    #[error("chat not found")]
    ChatNotFound,
}

impl ServiceError {
    /// Default narrowing: cancellation and deadline become `Timeout`,
    /// everything else `Internal`.
    fn from_repo(err: RepoError) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Internal
        }
    }
}

/// ChatService implementation
///
/// Each storage capability is held separately so callers and tests can
/// substitute them one at a time.
pub struct ChatServiceImpl {
    chat_saver: Arc<dyn ChatSaver>,
    chat_reader: Arc<dyn ChatReader>,
    chat_remover: Arc<dyn ChatRemover>,
    message_saver: Arc<dyn MessageSaver>,
    message_reader: Arc<dyn MessageReader>,
}

impl ChatServiceImpl {
    /// Build the service from one chat store and one message store.
    pub fn new<C, M>(chats: Arc<C>, messages: Arc<M>) -> Self
    where
        C: ChatSaver + ChatReader + ChatRemover + 'static,
        M: MessageSaver + MessageReader + 'static,
    {
        Self {
            chat_saver: chats.clone(),
            chat_reader: chats.clone(),
            chat_remover: chats,
            message_saver: messages.clone(),
            message_reader: messages,
        }
    }

    /// Build the service from individual capabilities.
    pub fn from_capabilities(
        chat_saver: Arc<dyn ChatSaver>,
        chat_reader: Arc<dyn ChatReader>,
        chat_remover: Arc<dyn ChatRemover>,
        message_saver: Arc<dyn MessageSaver>,
        message_reader: Arc<dyn MessageReader>,
    ) -> Self {
        Self {
            chat_saver,
            chat_reader,
            chat_remover,
            message_saver,
            message_reader,
        }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn create_chat(&self, ctx: &OperationContext, title: &str) -> Result<Chat, ServiceError> {
        let title_len = title.chars().count();
        tracing::info!(op = "create_chat", title_len, "Starting create chat");

        let chat = self.chat_saver.save_chat(ctx, title).await.map_err(|e| {
            tracing::error!(op = "create_chat", title_len, error = e.as_str(), "Failed to create chat");
            ServiceError::from_repo(e)
        })?;

        tracing::info!(op = "create_chat", chat_id = chat.id, "Chat created");
        Ok(chat)
    }

    async fn delete_chat(&self, ctx: &OperationContext, chat_id: i64) -> Result<(), ServiceError> {
        tracing::info!(op = "delete_chat", chat_id, "Starting delete chat");

        self.chat_remover.delete_chat(ctx, chat_id).await.map_err(|e| {
            tracing::error!(op = "delete_chat", chat_id, error = e.as_str(), "Failed to delete chat");
            ServiceError::from_repo(e)
        })?;

        tracing::info!(op = "delete_chat", chat_id, "Chat deleted");
        Ok(())
    }

    async fn create_message(
        &self,
        ctx: &OperationContext,
        chat_id: i64,
        text: &str,
    ) -> Result<Message, ServiceError> {
        tracing::info!(op = "create_message", chat_id, "Starting create message");

        let message = self
            .message_saver
            .save_message(ctx, chat_id, text)
            .await
            .map_err(|e| {
                tracing::error!(
                    op = "create_message",
                    chat_id,
                    error = e.as_str(),
                    "Failed to create message"
                );
                match e {
                    // The chat_id reference is the only constraint a valid message can break
                    RepoError::Validation => ServiceError::ChatNotFound,
                    e => ServiceError::from_repo(e),
                }
            })?;

        tracing::info!(op = "create_message", chat_id, message_id = message.id, "Message created");
        Ok(message)
    }

    async fn read_chat_messages(
        &self,
        ctx: &OperationContext,
        chat_id: i64,
        limit: i64,
    ) -> Result<ChatMessages, ServiceError> {
        tracing::info!(op = "read_chat_messages", chat_id, limit, "Starting read chat messages");

        let chat = self.chat_reader.get_chat(ctx, chat_id).await.map_err(|e| {
            tracing::error!(
                op = "read_chat_messages",
                chat_id,
                error = e.as_str(),
                "Failed to get chat"
            );
            match e {
                RepoError::NotFound => ServiceError::ChatNotFound,
                e => ServiceError::from_repo(e),
            }
        })?;

        let messages = self
            .message_reader
            .get_messages(ctx, chat_id, limit)
            .await
            .map_err(|e| {
                tracing::error!(
                    op = "read_chat_messages",
                    chat_id,
                    error = e.as_str(),
                    "Failed to get messages"
                );
                ServiceError::from_repo(e)
            })?;

        tracing::info!(
            op = "read_chat_messages",
            chat_id,
            count = messages.len(),
            "Read chat messages"
        );
        Ok(ChatMessages::new(chat, messages))
    }
}
