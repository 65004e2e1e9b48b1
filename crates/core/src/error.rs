use crate::types::DbId;

/// Domain-level failures raised by validation, conversion, and lookups.
///
/// The API layer maps each variant onto an HTTP status, so code below the
/// handlers never deals in status codes directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
