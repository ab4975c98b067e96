//! Building entity model and DTOs.

use floorplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `buildings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Building {
    pub id: DbId,
    /// Number of floors created with the building. Not kept in sync later.
    pub floor_count: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a bare building (no floors).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBuilding {
    pub floor_count: i32,
}

/// DTO for updating a building.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBuilding {
    pub floor_count: Option<i32>,
}
