//! Domain logic for the floor-plan backend.
//!
//! Everything here is free of database and HTTP dependencies. Persistence is
//! reached only through the [`store::FloorPlanStore`] trait so the numbering,
//! composition, and layout rules can be exercised against any backend.

pub mod composition;
pub mod error;
pub mod layout;
pub mod numbering;
pub mod placement;
pub mod store;
pub mod types;
