//! Amenity categories and rules.
//!
//! Categories form an open enumeration: the well-known values below are
//! suggested to clients, but any non-blank category is accepted.

use crate::error::CoreError;
use crate::types::Decimal;
use crate::validation::{require_non_negative_opt, require_text, require_text_if_present};

/// Physical equipment (treadmills, racks, ...).
pub const CATEGORY_EQUIPMENT: &str = "Equipment";
/// A staffed service (personal training, childcare, ...).
pub const CATEGORY_SERVICE: &str = "Service";
/// A space within the facility (pool, sauna, ...).
pub const CATEGORY_FACILITY: &str = "Facility";

/// Well-known categories.
pub const KNOWN_CATEGORIES: &[&str] = &[CATEGORY_EQUIPMENT, CATEGORY_SERVICE, CATEGORY_FACILITY];

/// Whether `category` is one of the well-known values (case-insensitive).
pub fn is_known_category(category: &str) -> bool {
    KNOWN_CATEGORIES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(category.trim()))
}

/// Validate the fields required to create an amenity.
pub fn validate_new_amenity(
    name: &str,
    category: &str,
    cost: Option<Decimal>,
) -> Result<(), CoreError> {
    require_text(name, "name")?;
    require_text(category, "category")?;
    require_non_negative_opt(cost, "cost")
}

/// Validate a partial amenity update.
pub fn validate_amenity_update(
    name: Option<&str>,
    category: Option<&str>,
    cost: Option<Decimal>,
) -> Result<(), CoreError> {
    require_text_if_present(name, "name")?;
    require_text_if_present(category, "category")?;
    require_non_negative_opt(cost, "cost")
}
