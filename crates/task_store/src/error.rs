//! Task store error types.

use thiserror::Error;

/// Errors that can occur during task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Database error: connection failure, statement failure, or a
    /// constraint violation.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;
