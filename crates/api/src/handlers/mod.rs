//! Request handlers for the gym chain entities.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers check the domain rules from `gymchain_core`, delegate persistence
//! to the matching repository in `gymchain_db`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod amenity;
pub mod employee;
pub mod facility;
pub mod gym_chain;
pub mod manager;
