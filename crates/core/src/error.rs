use crate::types::DbId;

/// Domain error taxonomy shared by the repository and HTTP layers.
///
/// `NotFound` and `Conflict` are the two outcomes the booking workflow must
/// keep distinct: a caller reacts to "no such visit" differently from "this
/// slot is already taken".
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
