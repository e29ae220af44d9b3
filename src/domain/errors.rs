//! Repository-tier error vocabulary.
//!
//! Every store operation reports failures using exactly these kinds; raw
//! driver errors are classified into them before they leave the store.

/// Closed set of storage failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RepoError {
    #[error("context cancelled error")]
    ContextCancelled,

    #[error("context deadline error")]
    ContextDeadline,

    /// Constraint or shape violation, including a missing referenced row.
    #[error("validation error")]
    Validation,

    #[error("duplicate key error")]
    Duplicate,

    #[error("not found error")]
    NotFound,

    #[error("internal error")]
    Internal,

    #[error("unknown error")]
    Unknown,
}

impl RepoError {
    /// True for cancellation and deadline expiry.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ContextCancelled | Self::ContextDeadline)
    }

    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContextCancelled => "context_cancelled",
            Self::ContextDeadline => "context_deadline",
            Self::Validation => "validation",
            Self::Duplicate => "duplicate",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
            Self::Unknown => "unknown",
        }
    }
}
