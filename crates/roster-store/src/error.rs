//! Error types for the storage layer.

use roster_core::ValidationError;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Another student already holds this code.
    #[error("student code '{0}' is already in use")]
    DuplicateStudentCode(String),

    /// The record violates a field constraint.
    #[error("invalid student record: {0}")]
    InvalidRecord(#[from] ValidationError),

    /// A stored row could not be turned back into a `Student`.
    #[error("corrupt student record: {0}")]
    CorruptRecord(String),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
