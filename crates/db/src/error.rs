/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness rule was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backend could not serve the request.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Convenience alias for storage results.
pub type StoreResult<T> = Result<T, StoreError>;
