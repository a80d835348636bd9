use crate::form::FieldViolation;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Per-field violations collected from a whole payload.
    #[error("Validation failed: {} invalid field(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A business rule refused the operation (voting closed, budget spent).
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
