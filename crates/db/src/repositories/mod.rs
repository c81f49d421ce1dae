//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Navigation from a parent to
//! its children is an explicit `list_by_*` query on the child's repository.

pub mod amenity_repo;
pub mod employee_repo;
pub mod gym_chain_repo;
pub mod gym_facility_repo;
pub mod manager_profile_repo;

pub use amenity_repo::AmenityRepo;
pub use employee_repo::EmployeeRepo;
pub use gym_chain_repo::GymChainRepo;
pub use gym_facility_repo::GymFacilityRepo;
pub use manager_profile_repo::ManagerProfileRepo;
