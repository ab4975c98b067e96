pub mod admin;
pub mod building;
pub mod feedback;
pub mod floor;
pub mod personnel;
pub mod placed_object;
