//! Shared field-level validation helpers.
//!
//! Each helper returns a [`CoreError::Validation`] naming the offending field,
//! so per-entity rule modules can compose them with `?`.

use std::fmt::Display;

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::Date;

/// Reject empty or whitespace-only required text.
pub fn require_text(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Apply [`require_text`] only when an update supplies the field.
pub fn require_text_if_present(value: Option<&str>, field: &str) -> Result<(), CoreError> {
    match value {
        Some(v) => require_text(v, field),
        None => Ok(()),
    }
}

/// Reject negative numeric values. Works for integers and decimals alike.
pub fn require_non_negative<T>(value: T, field: &str) -> Result<(), CoreError>
where
    T: PartialOrd + Default + Display,
{
    if value < T::default() {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// Apply [`require_non_negative`] to an optional value.
pub fn require_non_negative_opt<T>(value: Option<T>, field: &str) -> Result<(), CoreError>
where
    T: PartialOrd + Default + Display,
{
    match value {
        Some(v) => require_non_negative(v, field),
        None => Ok(()),
    }
}

/// Require a non-blank, syntactically valid e-mail address.
pub fn validate_email(value: &str, field: &str) -> Result<(), CoreError> {
    require_text(value, field)?;
    if !value.validate_email() {
        return Err(CoreError::Validation(format!(
            "{field} is not a valid email address: '{value}'"
        )));
    }
    Ok(())
}

/// Require `later` to fall on or after `earlier`.
pub fn require_date_order(
    earlier: Date,
    later: Date,
    earlier_field: &str,
    later_field: &str,
) -> Result<(), CoreError> {
    if later < earlier {
        return Err(CoreError::Validation(format!(
            "{later_field} ({later}) must not be before {earlier_field} ({earlier})"
        )));
    }
    Ok(())
}
