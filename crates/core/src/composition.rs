//! Building + floors creation workflow.
//!
//! Creates one building row, then one floor row per specification, numbering
//! each floor from the store after the previous insert. The sequence is not
//! atomic: when floor N fails, the building and the floors before N stay
//! stored and the error names floor N.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::numbering::next_floor_number;
use crate::store::{FloorPlanStore, FloorRecord, NewFloor};
use crate::types::DbId;

/// Confirmation text returned when every floor was created.
pub const COMPOSITION_SUCCESS_MESSAGE: &str = "Building and Floors created successfully";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Dimensions of one floor to create. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FloorSpec {
    /// Missing, `null`, or `""` all mean 0.
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub length: Option<i32>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub width: Option<i32>,
}

impl FloorSpec {
    pub fn new(length: i32, width: i32) -> Self {
        Self {
            length: Some(length),
            width: Some(width),
        }
    }

    pub fn length_or_zero(&self) -> i32 {
        self.length.unwrap_or(0)
    }

    pub fn width_or_zero(&self) -> i32 {
        self.width.unwrap_or(0)
    }
}

/// A request to create a building with its floors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeBuilding {
    #[serde(default)]
    pub floors: Vec<FloorSpec>,
    /// Echoed back untouched; never used in computation.
    #[serde(default)]
    pub total_square_meters: serde_json::Value,
}

/// Accepts an integer, `null`, or an empty string (what a cleared numeric
/// form field submits).
fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("dimension {n} is not a 32-bit integer"))),
        other => Err(D::Error::custom(format!(
            "dimension must be an integer, got {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Result of a completed composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionReceipt {
    pub building_id: DbId,
    pub floors_created: usize,
    /// Floor numbers in insertion order.
    pub floor_numbers: Vec<i32>,
    pub total_square_meters: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the request before anything is written.
///
/// Rejects an empty floor list, negative dimensions, and floors whose
/// `length × width` does not fit the capacity column.
pub fn validate_composition(request: &ComposeBuilding) -> Result<(), CoreError> {
    if request.floors.is_empty() {
        return Err(CoreError::Validation(
            "At least one floor is required".to_string(),
        ));
    }
    i32::try_from(request.floors.len()).map_err(|_| {
        CoreError::Validation(format!("Too many floors: {}", request.floors.len()))
    })?;

    for (index, spec) in request.floors.iter().enumerate() {
        validate_floor_spec(index + 1, spec)?;
    }
    Ok(())
}

/// Check one floor spec. `position` is 1-based and only used in messages.
pub fn validate_floor_spec(position: usize, spec: &FloorSpec) -> Result<(), CoreError> {
    let (length, width) = (spec.length_or_zero(), spec.width_or_zero());
    if length < 0 || width < 0 {
        return Err(CoreError::Validation(format!(
            "Floor {position} has negative dimensions ({length} x {width})"
        )));
    }
    if length.checked_mul(width).is_none() {
        return Err(CoreError::Validation(format!(
            "Floor {position} area overflows ({length} x {width})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// Create a building and its floors.
///
/// Steps, each awaited before the next:
/// 1. validate (nothing is written on failure),
/// 2. insert the building with `floor_count = floors.len()`,
/// 3. [`append_floors`] in input order.
///
/// Errors name the failing step. Nothing already written is undone.
pub async fn compose_building<S>(
    store: &S,
    request: ComposeBuilding,
) -> Result<CompositionReceipt, CoreError>
where
    S: FloorPlanStore + ?Sized,
{
    validate_composition(&request)?;

    let floor_count = request.floors.len() as i32;
    let building_id = store
        .insert_building(floor_count)
        .await
        .map_err(|e| CoreError::Creation(format!("failed to create building: {e}")))?;

    let floors = append_floors(store, building_id, &request.floors).await?;

    Ok(CompositionReceipt {
        building_id,
        floors_created: floors.len(),
        floor_numbers: floors.iter().map(|f| f.number).collect(),
        total_square_meters: request.total_square_meters,
    })
}

/// Insert one floor per spec under `building_id`, returning the stored rows
/// in input order.
///
/// The number of each floor is read from the store after the previous insert
/// has completed, so repeated calls on one building continue the sequence.
/// Errors carry the 1-based position of the spec that failed.
pub async fn append_floors<S>(
    store: &S,
    building_id: DbId,
    specs: &[FloorSpec],
) -> Result<Vec<FloorRecord>, CoreError>
where
    S: FloorPlanStore + ?Sized,
{
    let mut created = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        let position = index + 1;

        let number = next_floor_number(store, building_id).await.map_err(|e| {
            CoreError::Query(format!(
                "failed to number floor {position} of building {building_id}: {e}"
            ))
        })?;

        let (length, width) = (spec.length_or_zero(), spec.width_or_zero());
        let floor = NewFloor {
            building_id,
            number,
            length,
            width,
            capacity: length.saturating_mul(width),
        };

        let record = store
            .insert_floor(&floor)
            .await
            .map_err(|e| CoreError::Creation(format!("failed to create floor {position}: {e}")))?;
        created.push(record);
    }
    Ok(created)
}
