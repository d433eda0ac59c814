//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A schema constraint rejected the write (duplicate email).
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Any other SQLite failure.
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// A previous holder of the connection lock panicked.
    #[error("store connection lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Whether this is a uniqueness/constraint failure.
    #[must_use]
    pub fn is_constraint(&self) -> bool {
        matches!(self, StoreError::Constraint(_))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, msg)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::Constraint(msg.clone().unwrap_or_else(|| code.to_string()))
            }
            _ => StoreError::Database(err),
        }
    }
}
