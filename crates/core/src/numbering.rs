//! Sequential floor numbering within a building.
//!
//! Floor numbers are 1-based and contiguous per building. The next number is
//! always derived from what is stored right now (`max + 1`), so callers that
//! insert several floors must ask again after every insert.
//!
//! This is a read-then-write sequence. Two writers racing on one building
//! can both observe the same maximum; the `uq_floors_building_number`
//! constraint makes the loser's insert fail instead of storing a duplicate.

use crate::store::{FloorPlanStore, StoreError};
use crate::types::DbId;

/// The first number assigned in a building with no floors.
pub const FIRST_FLOOR_NUMBER: i32 = 1;

/// Next number after `existing`: one past the maximum, or
/// [`FIRST_FLOOR_NUMBER`] when there are none.
pub fn next_number(existing: &[i32]) -> i32 {
    existing
        .iter()
        .copied()
        .max()
        .map_or(FIRST_FLOOR_NUMBER, |max| max + 1)
}

/// Query the stored floors of `building_id` and return the next number.
///
/// A failed query is returned as-is, never read as an empty building.
pub async fn next_floor_number<S>(store: &S, building_id: DbId) -> Result<i32, StoreError>
where
    S: FloorPlanStore + ?Sized,
{
    let existing = store.floor_numbers(building_id).await?;
    Ok(next_number(&existing))
}
