//! Gym facility rules.

use crate::error::CoreError;
use crate::types::Decimal;
use crate::validation::{
    require_non_negative_opt, require_text, require_text_if_present, validate_email,
};

/// Postal address of a facility. All parts are required.
#[derive(Debug, Clone, Copy)]
pub struct AddressParts<'a> {
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
}

/// Validate the fields required to create a facility.
pub fn validate_new_facility(
    name: &str,
    address: AddressParts<'_>,
    email: Option<&str>,
    max_capacity: Option<i32>,
    square_footage: Option<Decimal>,
) -> Result<(), CoreError> {
    require_text(name, "name")?;
    require_text(address.address, "address")?;
    require_text(address.city, "city")?;
    require_text(address.state, "state")?;
    require_text(address.zip_code, "zip_code")?;
    if let Some(email) = email {
        validate_email(email, "email")?;
    }
    validate_capacity(max_capacity)?;
    require_non_negative_opt(square_footage, "square_footage")
}

/// Validate a partial facility update.
pub fn validate_facility_update(
    name: Option<&str>,
    address: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    zip_code: Option<&str>,
    max_capacity: Option<i32>,
    square_footage: Option<Decimal>,
) -> Result<(), CoreError> {
    require_text_if_present(name, "name")?;
    require_text_if_present(address, "address")?;
    require_text_if_present(city, "city")?;
    require_text_if_present(state, "state")?;
    require_text_if_present(zip_code, "zip_code")?;
    validate_capacity(max_capacity)?;
    require_non_negative_opt(square_footage, "square_footage")
}

/// `max_capacity`, when present, must be non-negative.
pub fn validate_capacity(max_capacity: Option<i32>) -> Result<(), CoreError> {
    require_non_negative_opt(max_capacity, "max_capacity")
}
