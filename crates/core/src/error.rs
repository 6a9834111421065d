use crate::types::DbId;
use crate::validation::FieldErrors;

/// Domain-level failures shared by every crate in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A per-user record (e.g. a volunteer registration) does not exist yet.
    #[error("{entity} not found for user {user_id}")]
    NotFoundForUser { entity: &'static str, user_id: DbId },

    /// One or more form fields failed structural validation.
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
