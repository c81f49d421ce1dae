use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} with email {email}")]
    NotFoundByEmail { entity: &'static str, email: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Token is invalid")]
    TokenInvalid,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Facility {facility_id} does not belong to gym chain {gym_chain_id}")]
    CrossChainFacility {
        facility_id: DbId,
        gym_chain_id: DbId,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
