//! Handler for the building + floors creation workflow.

use axum::extract::State;
use axum::Json;
use floorplan_core::composition::{self, ComposeBuilding, COMPOSITION_SUCCESS_MESSAGE};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// Confirmation payload for a completed composition.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionResponse {
    pub message: &'static str,
    pub total_square_meters: serde_json::Value,
}

/// POST /create-floor
///
/// Creates a building and one numbered floor per entry in `floors`.
/// Not atomic: on a 500 the building and any earlier floors remain stored,
/// and the error message names the floor that failed.
pub async fn create_building_with_floors(
    State(state): State<AppState>,
    AppJson(input): AppJson<ComposeBuilding>,
) -> AppResult<Json<CompositionResponse>> {
    let requested = input.floors.len();
    let receipt = composition::compose_building(state.store.as_ref(), input).await?;

    tracing::info!(
        building_id = receipt.building_id,
        floors = receipt.floors_created,
        requested,
        "Building composed"
    );

    Ok(Json(CompositionResponse {
        message: COMPOSITION_SUCCESS_MESSAGE,
        total_square_meters: receipt.total_square_meters,
    }))
}
