pub mod admin;
pub mod building;
pub mod composition;
pub mod feedback;
pub mod floor;
pub mod floor_layout;
pub mod personnel;
pub mod placed_object;
