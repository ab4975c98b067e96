//! Placed object (furniture / equipment) model and DTOs.

use floorplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `placed_objects` table: one occupied unit cell.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlacedObject {
    pub id: DbId,
    pub floor_id: DbId,
    pub o_type: i32,
    pub state: bool,
    pub x_coor: i32,
    pub y_coor: i32,
    pub created_at: Timestamp,
}

/// DTO for placing an object on one cell.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlacedObject {
    pub floor_id: DbId,
    pub o_type: i32,
    #[serde(default)]
    pub state: bool,
    pub x_coor: i32,
    pub y_coor: i32,
}

/// DTO for updating a placed object.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlacedObject {
    pub floor_id: Option<DbId>,
    pub o_type: Option<i32>,
    pub state: Option<bool>,
    pub x_coor: Option<i32>,
    pub y_coor: Option<i32>,
}
