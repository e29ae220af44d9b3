//! Bounded execution of store operations.
//!
//! Every query runs under the earlier of the caller's deadline and the
//! store's own operation timeout, and is abandoned as soon as the caller's
//! context is cancelled.

use std::future::Future;
use std::time::Duration;

use super::error_classifier::{classify, DriverError};
use crate::domain::{OperationContext, RepoError};
use crate::infrastructure::metrics;

/// Default upper bound for a single store operation.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Run `fut` under the context's cancellation signal and the bounded deadline.
pub async fn run_bounded<F, T>(
    ctx: &OperationContext,
    limit: Duration,
    fut: F,
) -> Result<T, DriverError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    if ctx.is_cancelled() {
        return Err(DriverError::Cancelled);
    }

    let deadline = ctx.effective_deadline(limit);

    tokio::select! {
        biased;
        _ = ctx.cancelled() => Err(DriverError::Cancelled),
        outcome = tokio::time::timeout_at(deadline, fut) => match outcome {
            Ok(result) => result.map_err(DriverError::from),
            Err(_) => Err(DriverError::DeadlineExceeded),
        },
    }
}

/// Run a named store operation and classify its failure.
///
/// The raw driver error is logged here and goes no further.
pub async fn execute<F, T>(
    op: &'static str,
    ctx: &OperationContext,
    limit: Duration,
    fut: F,
) -> Result<T, RepoError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    let started = std::time::Instant::now();

    let result = run_bounded(ctx, limit, fut).await.map_err(|err| {
        let kind = classify(&err);
        tracing::warn!(op, kind = kind.as_str(), error = %err, "Store operation failed");
        kind
    });

    let outcome = result.as_ref().err().map_or("ok", RepoError::as_str);
    metrics::record_store_operation(op, outcome, started.elapsed().as_secs_f64());

    result
}
