//! Chat Repository Implementation
//!
//! PostgreSQL implementation of the chat storage capabilities.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Chat, ChatReader, ChatRemover, ChatSaver, OperationContext, RepoError};
use crate::infrastructure::database::{execute, DEFAULT_OPERATION_TIMEOUT};

/// PostgreSQL chat repository.
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
    operation_timeout: Duration,
}

impl PgChatRepository {
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

/// Internal row type for chat queries.
#[derive(Debug, sqlx::FromRow)]
struct ChatRow {
    id: i64,
    title: String,
    created_at: DateTime<Utc>,
}

impl ChatRow {
    fn into_chat(self) -> Chat {
        Chat {
            id: self.id,
            title: self.title,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl ChatSaver for PgChatRepository {
    async fn save_chat(&self, ctx: &OperationContext, title: &str) -> Result<Chat, RepoError> {
        let query = sqlx::query_as::<_, ChatRow>(
            r#"
            INSERT INTO chats (title)
            VALUES ($1)
            RETURNING id, title, created_at
            "#,
        )
        .bind(title)
        .fetch_one(&self.pool);

        let row = execute("save_chat", ctx, self.operation_timeout, query).await?;
        Ok(row.into_chat())
    }
}

#[async_trait]
impl ChatReader for PgChatRepository {
    async fn get_chat(&self, ctx: &OperationContext, chat_id: i64) -> Result<Chat, RepoError> {
        // fetch_one reports a missing row as RowNotFound, classified as NotFound
        let query = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, title, created_at
            FROM chats
            WHERE id = $1
            "#,
        )
        .bind(chat_id)
        .fetch_one(&self.pool);

        let row = execute("get_chat", ctx, self.operation_timeout, query).await?;
        Ok(row.into_chat())
    }
}

#[async_trait]
impl ChatRemover for PgChatRepository {
    /// Messages go with the chat through `ON DELETE CASCADE`.
    async fn delete_chat(&self, ctx: &OperationContext, chat_id: i64) -> Result<(), RepoError> {
        let query = sqlx::query("DELETE FROM chats WHERE id = $1")
            .bind(chat_id)
            .execute(&self.pool);

        let result = execute("delete_chat", ctx, self.operation_timeout, query).await?;

        if result.rows_affected() == 0 {
            tracing::debug!(chat_id, "Delete of absent chat ignored");
        }

        Ok(())
    }
}
