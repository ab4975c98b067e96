use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A persistence write failed part-way through a multi-step operation.
    /// The message names the step, e.g. `failed to create floor 3`.
    #[error("Creation failed: {0}")]
    Creation(String),

    /// A persistence read failed. The message names what was being read.
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
