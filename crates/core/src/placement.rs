//! Personnel placement state.
//!
//! A personnel row stores its seat as three nullable columns
//! (`floor_id`, `x_coor`, `y_coor`). Either all three are set or none is.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Where a person sits, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Placement {
    Unplaced,
    Placed { floor_id: DbId, x: i32, y: i32 },
}

impl Placement {
    /// Interpret the three placement columns.
    ///
    /// Mixed null / non-null columns are rejected.
    pub fn from_columns(
        floor_id: Option<DbId>,
        x_coor: Option<i32>,
        y_coor: Option<i32>,
    ) -> Result<Self, CoreError> {
        match (floor_id, x_coor, y_coor) {
            (Some(floor_id), Some(x), Some(y)) => Ok(Self::Placed { floor_id, x, y }),
            (None, None, None) => Ok(Self::Unplaced),
            _ => Err(CoreError::Validation(
                "floor_id, x_coor and y_coor must be set or cleared together".to_string(),
            )),
        }
    }

    /// The `(floor_id, x_coor, y_coor)` column values for this placement.
    pub fn columns(self) -> (Option<DbId>, Option<i32>, Option<i32>) {
        match self {
            Self::Placed { floor_id, x, y } => (Some(floor_id), Some(x), Some(y)),
            Self::Unplaced => (None, None, None),
        }
    }

    pub fn is_placed(self) -> bool {
        matches!(self, Self::Placed { .. })
    }
}

/// Reject negative grid coordinates.
pub fn validate_seat(x: i32, y: i32) -> Result<(), CoreError> {
    if x < 0 || y < 0 {
        return Err(CoreError::Validation(format!(
            "Seat coordinates must be non-negative, got ({x}, {y})"
        )));
    }
    Ok(())
}
