//! Floor entity model and DTOs.

use floorplan_core::store::FloorRecord;
use floorplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `floors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Floor {
    pub id: DbId,
    pub building_id: DbId,
    /// 1-based, unique within the building.
    pub number: i32,
    pub length: i32,
    pub width: i32,
    pub capacity: i32,
    pub created_at: Timestamp,
}

impl From<Floor> for FloorRecord {
    fn from(floor: Floor) -> Self {
        Self {
            id: floor.id,
            building_id: floor.building_id,
            number: floor.number,
            length: floor.length,
            width: floor.width,
            capacity: floor.capacity,
        }
    }
}

/// DTO for adding a single floor to an existing building.
///
/// The floor number is assigned by the server and capacity is derived from
/// the dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFloor {
    pub building_id: DbId,
    pub length: Option<i32>,
    pub width: Option<i32>,
}

/// DTO for updating a floor. The owning building cannot be changed and
/// capacity always follows the dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFloor {
    pub length: Option<i32>,
    pub width: Option<i32>,
}
