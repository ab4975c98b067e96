//! Personnel entity model and DTOs.

use floorplan_core::placement::Placement;
use floorplan_core::store::OccupantRecord;
use floorplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `personnels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Personnel {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub floor_id: Option<DbId>,
    pub x_coor: Option<i32>,
    pub y_coor: Option<i32>,
    pub created_at: Timestamp,
}

impl Personnel {
    /// Seat state derived from the three placement columns.
    pub fn placement(&self) -> Result<Placement, floorplan_core::error::CoreError> {
        Placement::from_columns(self.floor_id, self.x_coor, self.y_coor)
    }
}

impl From<Personnel> for OccupantRecord {
    fn from(p: Personnel) -> Self {
        Self {
            id: p.id,
            floor_id: p.floor_id,
            name: p.name,
            surname: p.surname,
            x_coor: p.x_coor,
            y_coor: p.y_coor,
        }
    }
}

/// DTO for creating a personnel record. New personnel are always unplaced.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonnel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    pub email: String,
    pub password: String,
}

/// DTO for updating personnel details. Placement changes go through the
/// coordinate endpoints instead.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePersonnel {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for seating a person.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCoordinates {
    pub personnel_id: DbId,
    pub floor_id: DbId,
    pub x_coor: i32,
    pub y_coor: i32,
}
