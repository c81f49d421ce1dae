//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Relationships are plain foreign-key columns. The "many" side of each
//! relationship is read through a repository query (for example
//! `GymFacilityRepo::list_by_chain`), never stored on the parent.

pub mod amenity;
pub mod employee;
pub mod gym_chain;
pub mod gym_facility;
pub mod manager_profile;
