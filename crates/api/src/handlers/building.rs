//! Handlers for the building table.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use floorplan_core::types::DbId;
use floorplan_db::models::building::{Building, CreateBuilding, UpdateBuilding};
use floorplan_db::repositories::BuildingRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /fetch-building/{building_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Building>> {
    let building = BuildingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Building", id))?;
    Ok(Json(building))
}

/// GET /fetch-buildings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Building>>> {
    let buildings = BuildingRepo::list(&state.pool).await?;
    Ok(Json(buildings))
}

/// POST /create-building
///
/// Creates a bare building row. Use `/create-floor` to create a building
/// together with its floors.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateBuilding>,
) -> AppResult<(StatusCode, Json<Building>)> {
    if input.floor_count < 0 {
        return Err(AppError::BadRequest("floor_count must be non-negative".into()));
    }
    let building = BuildingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(building)))
}

/// PUT /update-building/{building_id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateBuilding>,
) -> AppResult<Json<Building>> {
    let building = BuildingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Building", id))?;
    Ok(Json(building))
}

/// DELETE /delete-building/{building_id}
///
/// Removes the building, its floors and their objects. Personnel seated in
/// the building become unplaced.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Building>> {
    let building = BuildingRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Building", id))?;
    tracing::info!(building_id = id, "Building deleted");
    Ok(Json(building))
}
