//! Database Module
//!
//! PostgreSQL connection pool lifecycle, bounded operation execution and
//! storage error classification.

pub mod error_classifier;
pub mod operation;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::DatabaseSettings;
use crate::domain::{OperationContext, RepoError, StoreHealth};

pub use error_classifier::{classify, DriverError};
pub use operation::{execute, run_bounded, DEFAULT_OPERATION_TIMEOUT};

/// Upper bound for the connectivity check performed at startup.
const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool lifecycle failures.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database ping failed: {0}")]
    Ping(#[source] sqlx::Error),

    #[error("database ping timed out after {0:?}")]
    PingTimeout(Duration),

    #[error("database pool did not close within {0:?}")]
    CloseTimeout(Duration),
}

/// Create a PostgreSQL connection pool and verify it answers.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, DatabaseError> {
    let ssl_mode: PgSslMode = settings.ssl_mode.parse().map_err(DatabaseError::Connect)?;

    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.name)
        .ssl_mode(ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .max_lifetime(settings.max_lifetime())
        .acquire_timeout(settings.acquire_timeout())
        .connect_with(options)
        .await
        .map_err(DatabaseError::Connect)?;

    ping(&pool, PING_TIMEOUT).await?;

    Ok(pool)
}

/// Round-trip a trivial query within `timeout`.
pub async fn ping(pool: &PgPool, timeout: Duration) -> Result<(), DatabaseError> {
    tokio::time::timeout(timeout, sqlx::query("SELECT 1").execute(pool))
        .await
        .map_err(|_| DatabaseError::PingTimeout(timeout))?
        .map_err(DatabaseError::Ping)?;
    Ok(())
}

/// Close every pooled connection, giving up after `deadline`.
pub async fn close_pool(pool: &PgPool, deadline: Duration) -> Result<(), DatabaseError> {
    tokio::time::timeout(deadline, pool.close())
        .await
        .map_err(|_| DatabaseError::CloseTimeout(deadline))
}

/// Readiness probe backed by the connection pool.
#[derive(Clone)]
pub struct PgStoreHealth {
    pool: PgPool,
    operation_timeout: Duration,
}

impl PgStoreHealth {
    pub fn new(pool: PgPool, operation_timeout: Duration) -> Self {
        Self {
            pool,
            operation_timeout,
        }
    }
}

#[async_trait]
impl StoreHealth for PgStoreHealth {
    async fn ping(&self, ctx: &OperationContext) -> Result<(), RepoError> {
        execute(
            "ping",
            ctx,
            self.operation_timeout,
            sqlx::query("SELECT 1").execute(&self.pool),
        )
        .await
        .map(|_| ())
    }
}
