//! Cancellation and deadline token threaded through every call.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Carries the caller's cancellation signal and optional deadline from the
/// request layer down to the store.
///
/// Cloning is cheap and clones share the same cancellation state.
#[derive(Debug, Clone, Default)]
pub struct OperationContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl OperationContext {
    /// A context with no deadline that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an absolute deadline. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// Set a deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The caller-supplied deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The deadline an operation bounded by `limit` must respect: the
    /// caller's deadline when it is earlier, `now + limit` otherwise.
    pub fn effective_deadline(&self, limit: Duration) -> Instant {
        let bound = Instant::now() + limit;
        match self.deadline {
            Some(deadline) if deadline < bound => deadline,
            _ => bound,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the context is cancelled.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }

    /// A guard that cancels this context when dropped.
    pub fn cancel_on_drop(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }
}
