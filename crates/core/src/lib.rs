//! Domain types, error taxonomy, and validity rules for the gym chain backend.
//!
//! This crate has no database or HTTP dependencies so the same rules can be
//! applied by the repository layer, the API, and any future tooling.

pub mod amenity;
pub mod chain;
pub mod employee;
pub mod error;
pub mod facility;
pub mod manager;
pub mod tokens;
pub mod types;
pub mod validation;
