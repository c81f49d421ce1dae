//! Manager profile rules.

use crate::error::CoreError;
use crate::validation::{require_text, require_text_if_present, validate_email};

/// Minimum password length when `PASSWORD_MIN_LENGTH` is not configured.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// Canonical form of a login e-mail: trimmed and lower-cased.
///
/// Uniqueness is enforced on this form, so `A@Example.com` and
/// `a@example.com` are the same identity.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate the fields required to create a manager profile.
pub fn validate_new_profile(first_name: &str, last_name: &str, email: &str) -> Result<(), CoreError> {
    require_text(first_name, "first_name")?;
    require_text(last_name, "last_name")?;
    validate_email(email, "email")
}

/// Validate a partial profile update.
pub fn validate_profile_update(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
) -> Result<(), CoreError> {
    require_text_if_present(first_name, "first_name")?;
    require_text_if_present(last_name, "last_name")?;
    if let Some(email) = email {
        validate_email(email, "email")?;
    }
    Ok(())
}

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), CoreError> {
    if password.chars().count() < min_length {
        return Err(CoreError::Validation(format!(
            "Password must be at least {min_length} characters long"
        )));
    }
    Ok(())
}
