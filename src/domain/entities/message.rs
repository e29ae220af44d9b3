//! Message entity and the storage capabilities the use cases need for it.
//!
//! Maps to the `messages` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{OperationContext, RepoError};

/// Longest accepted message text, in Unicode code points after trimming.
pub const MAX_MESSAGE_TEXT_LEN: usize = 5000;

/// Represents a message in a chat.
///
/// Maps to the `messages` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - chat_id: BIGINT NOT NULL REFERENCES chats(id) ON DELETE CASCADE
/// - text: VARCHAR(5000) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,

    /// Chat the message belongs to
    pub chat_id: i64,

    pub text: String,

    /// Timestamp assigned by storage when the message was sent
    pub created_at: DateTime<Utc>,
}

/// Persists new messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSaver: Send + Sync {
    /// Insert a message into an existing chat.
    ///
    /// A `chat_id` that references no chat fails with [`RepoError::Validation`].
    async fn save_message(
        &self,
        ctx: &OperationContext,
        chat_id: i64,
        text: &str,
    ) -> Result<Message, RepoError>;
}

/// Reads the message history of a chat.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageReader: Send + Sync {
    /// At most `limit` messages of the chat, newest first.
    async fn get_messages(
        &self,
        ctx: &OperationContext,
        chat_id: i64,
        limit: i64,
    ) -> Result<Vec<Message>, RepoError>;
}
