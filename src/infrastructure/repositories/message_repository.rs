//! Message Repository Implementation
//!
//! PostgreSQL implementation of message storage and newest-first history reads.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Message, MessageReader, MessageSaver, OperationContext, RepoError};
use crate::infrastructure::database::{execute, DEFAULT_OPERATION_TIMEOUT};

/// PostgreSQL message repository.
///
/// The `chat_id` foreign key is what rejects messages for absent chats; the
/// violation surfaces as [`RepoError::Validation`].
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
    operation_timeout: Duration,
}

impl PgMessageRepository {
    /// Creates a repository using the default operation timeout.
    pub fn new(pool: PgPool) -> Self {
        Self::with_timeout(pool, DEFAULT_OPERATION_TIMEOUT)
    }

    pub fn with_timeout(pool: PgPool, operation_timeout: Duration) -> Self {
        Self {
            pool,
            operation_timeout,
        }
    }
}

/// Internal row type for message queries.
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: i64,
    chat_id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl MessageRow {
    fn into_message(self) -> Message {
        Message {
            id: self.id,
            chat_id: self.chat_id,
            text: self.text,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl MessageSaver for PgMessageRepository {
    async fn save_message(
        &self,
        ctx: &OperationContext,
        chat_id: i64,
        text: &str,
    ) -> Result<Message, RepoError> {
        let query = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (chat_id, text)
            VALUES ($1, $2)
            RETURNING id, chat_id, text, created_at
            "#,
        )
        .bind(chat_id)
        .bind(text)
        .fetch_one(&self.pool);

        let row = execute("save_message", ctx, self.operation_timeout, query).await?;
        Ok(row.into_message())
    }
}

#[async_trait]
impl MessageReader for PgMessageRepository {
    /// Newest first; `id` breaks ties between identical timestamps.
    async fn get_messages(
        &self,
        ctx: &OperationContext,
        chat_id: i64,
        limit: i64,
    ) -> Result<Vec<Message>, RepoError> {
        let query = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, chat_id, text, created_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(chat_id)
        .bind(limit)
        .fetch_all(&self.pool);

        let rows = execute("get_messages", ctx, self.operation_timeout, query).await?;
        Ok(rows.into_iter().map(MessageRow::into_message).collect())
    }
}
