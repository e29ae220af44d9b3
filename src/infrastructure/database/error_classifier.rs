//! Storage Error Classifier
//!
//! Maps raw driver failures onto the closed [`RepoError`] vocabulary.
//! Classification is pure and total: anything it does not recognise is
//! reported as [`RepoError::Unknown`].

use sqlx::error::{DatabaseError, ErrorKind};

use crate::domain::RepoError;

/// SQLSTATE raised when a statement is cancelled server-side
/// (`statement_timeout`, `pg_cancel_backend`).
const QUERY_CANCELED: &str = "57014";

/// SQLSTATE class for data exceptions (value too long, invalid input syntax, ...).
const DATA_EXCEPTION_CLASS: &str = "22";

/// SQLSTATE class for integrity constraint violations.
const INTEGRITY_VIOLATION_CLASS: &str = "23";

/// A failure surfaced while running a store operation, before classification.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The caller's context was cancelled before or during the call.
    #[error("operation cancelled")]
    Cancelled,

    /// The effective operation deadline passed before the call completed.
    #[error("operation deadline exceeded")]
    DeadlineExceeded,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Classify a driver failure.
pub fn classify(err: &DriverError) -> RepoError {
    match err {
        DriverError::Cancelled => RepoError::ContextCancelled,
        DriverError::DeadlineExceeded => RepoError::ContextDeadline,
        DriverError::Sqlx(err) => classify_sqlx(err),
    }
}

fn classify_sqlx(err: &sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::RowNotFound => RepoError::NotFound,
        sqlx::Error::PoolTimedOut => RepoError::ContextDeadline,
        sqlx::Error::Database(db) => classify_database(db.as_ref()),
        sqlx::Error::Configuration(_)
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Encode(_)
        | sqlx::Error::Decode(_)
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepoError::Internal,
        _ => RepoError::Unknown,
    }
}

fn classify_database(err: &dyn DatabaseError) -> RepoError {
    match err.kind() {
        ErrorKind::UniqueViolation => return RepoError::Duplicate,
        ErrorKind::ForeignKeyViolation | ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
            return RepoError::Validation
        }
        _ => {}
    }

    match err.code() {
        Some(code) if code == QUERY_CANCELED => RepoError::ContextCancelled,
        Some(code)
            if code.starts_with(DATA_EXCEPTION_CLASS) || code.starts_with(INTEGRITY_VIOLATION_CLASS) =>
        {
            RepoError::Validation
        }
        Some(_) => RepoError::Internal,
        None => RepoError::Unknown,
    }
}
