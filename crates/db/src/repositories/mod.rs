//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod building_repo;
pub mod feedback_repo;
pub mod floor_repo;
pub mod personnel_repo;
pub mod placed_object_repo;

pub use admin_repo::AdminRepo;
pub use building_repo::BuildingRepo;
pub use feedback_repo::FeedbackRepo;
pub use floor_repo::FloorRepo;
pub use personnel_repo::PersonnelRepo;
pub use placed_object_repo::PlacedObjectRepo;
