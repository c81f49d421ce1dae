//! Gym chain rules.

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{require_text, require_text_if_present, validate_email};

/// Country recorded when a chain or facility is created without one.
pub const DEFAULT_COUNTRY: &str = "USA";

/// Validate the fields required to create a gym chain.
pub fn validate_new_chain(business_name: &str, business_email: &str) -> Result<(), CoreError> {
    require_text(business_name, "business_name")?;
    validate_email(business_email, "business_email")
}

/// Validate a partial chain update.
pub fn validate_chain_update(
    business_name: Option<&str>,
    business_email: Option<&str>,
) -> Result<(), CoreError> {
    require_text_if_present(business_name, "business_name")?;
    if let Some(email) = business_email {
        validate_email(email, "business_email")?;
    }
    Ok(())
}

/// Resolve a parent reference: the parent must exist and be active.
///
/// An inactive parent is reported the same way as a missing one, so new
/// children can never be attached to a deactivated record.
pub fn require_active_parent(
    entity: &'static str,
    id: DbId,
    is_active: Option<bool>,
) -> Result<(), CoreError> {
    match is_active {
        Some(true) => Ok(()),
        _ => Err(CoreError::NotFound { entity, id }),
    }
}
