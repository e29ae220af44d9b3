//! Chat entity and the storage capabilities the use cases need for it.
//!
//! Maps to the `chats` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Message;
use crate::domain::{OperationContext, RepoError};

/// Longest accepted chat title, in Unicode code points after trimming.
pub const MAX_TITLE_LEN: usize = 200;

/// A named conversation container.
///
/// Maps to the `chats` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: VARCHAR(200) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// `id` and `created_at` are assigned by storage on insert and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A chat together with its most recent messages, newest first.
///
/// Assembled by the use-case layer; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessages {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl ChatMessages {
    pub fn new(chat: Chat, messages: Vec<Message>) -> Self {
        Self {
            id: chat.id,
            title: chat.title,
            created_at: chat.created_at,
            messages,
        }
    }
}

/// Persists new chats.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatSaver: Send + Sync {
    /// Insert a chat; storage assigns `id` and `created_at`.
    async fn save_chat(&self, ctx: &OperationContext, title: &str) -> Result<Chat, RepoError>;
}

/// Looks chats up by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatReader: Send + Sync {
    /// Fails with [`RepoError::NotFound`] when no chat has this id.
    async fn get_chat(&self, ctx: &OperationContext, chat_id: i64) -> Result<Chat, RepoError>;
}

/// Removes chats together with their messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRemover: Send + Sync {
    /// Deleting an absent chat succeeds without effect.
    async fn delete_chat(&self, ctx: &OperationContext, chat_id: i64) -> Result<(), RepoError>;
}
