//! Handlers for personnel records and their seat placement.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use floorplan_core::placement::{self, Placement};
use floorplan_core::types::DbId;
use floorplan_db::models::personnel::{
    CreatePersonnel, Personnel, UpdateCoordinates, UpdatePersonnel,
};
use floorplan_db::repositories::{FloorRepo, PersonnelRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /fetch-personnel/{personnel_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Personnel>> {
    let personnel = PersonnelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Personnel", id))?;
    Ok(Json(personnel))
}

/// GET /fetch-personnels
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Personnel>>> {
    let personnel = PersonnelRepo::list(&state.pool).await?;
    Ok(Json(personnel))
}

/// GET /fetch-unplaced-users
///
/// An empty list when everyone is seated.
pub async fn list_unplaced(State(state): State<AppState>) -> AppResult<Json<Vec<Personnel>>> {
    let personnel = PersonnelRepo::list_unplaced(&state.pool).await?;
    Ok(Json(personnel))
}

/// GET /fetch-staff-personnel/{floor_id}
///
/// An empty list for an unknown or empty floor.
pub async fn list_by_floor(
    State(state): State<AppState>,
    Path(floor_id): Path<DbId>,
) -> AppResult<Json<Vec<Personnel>>> {
    let personnel = PersonnelRepo::list_by_floor(&state.pool, floor_id).await?;
    Ok(Json(personnel))
}

/// POST /create-personnel
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePersonnel>,
) -> AppResult<(StatusCode, Json<Personnel>)> {
    if input.email.trim().is_empty() {
        return Err(AppError::BadRequest("email is required".into()));
    }
    let personnel = PersonnelRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(personnel)))
}

/// PUT /update-personnel/{personnel_id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdatePersonnel>,
) -> AppResult<Json<Personnel>> {
    let personnel = PersonnelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Personnel", id))?;
    Ok(Json(personnel))
}

/// DELETE /delete-personnel/{personnel_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Personnel>> {
    let personnel = PersonnelRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Personnel", id))?;
    Ok(Json(personnel))
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// POST /update-personnel-coordinates/
///
/// Seats a person: floor and both coordinates are written together.
pub async fn place(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateCoordinates>,
) -> AppResult<Json<MessageResponse>> {
    placement::validate_seat(input.x_coor, input.y_coor)?;

    FloorRepo::find_by_id(&state.pool, input.floor_id)
        .await?
        .ok_or(AppError::not_found("Floor", input.floor_id))?;

    let seat = Placement::Placed {
        floor_id: input.floor_id,
        x: input.x_coor,
        y: input.y_coor,
    };
    PersonnelRepo::set_placement(&state.pool, input.personnel_id, seat)
        .await?
        .ok_or(AppError::not_found("Personnel", input.personnel_id))?;

    tracing::info!(
        personnel_id = input.personnel_id,
        floor_id = input.floor_id,
        x = input.x_coor,
        y = input.y_coor,
        "Personnel placed"
    );
    Ok(Json(MessageResponse {
        message: "Coordinates updated successfully",
    }))
}

/// PUT /update-personnel-coordinates-null/{personnel_id}
///
/// Clears floor and both coordinates together.
pub async fn unplace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    PersonnelRepo::set_placement(&state.pool, id, Placement::Unplaced)
        .await?
        .ok_or(AppError::not_found("Personnel", id))?;

    tracing::info!(personnel_id = id, "Personnel unplaced");
    Ok(Json(MessageResponse {
        message: "Personnel coordinates and floor_id set to null successfully!",
    }))
}
