//! Handlers for administrator records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use floorplan_core::types::DbId;
use floorplan_db::models::admin::{Admin, CreateAdmin, UpdateAdmin};
use floorplan_db::repositories::AdminRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /fetch-admin/{admin_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Admin>> {
    let admin = AdminRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Admin", id))?;
    Ok(Json(admin))
}

/// GET /fetch-admins
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Admin>>> {
    Ok(Json(AdminRepo::list(&state.pool).await?))
}

/// POST /create-admin
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAdmin>,
) -> AppResult<(StatusCode, Json<Admin>)> {
    if input.username.trim().is_empty() {
        return Err(AppError::BadRequest("username is required".into()));
    }
    let admin = AdminRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

/// PUT /update-admin/{admin_id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateAdmin>,
) -> AppResult<Json<Admin>> {
    let admin = AdminRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Admin", id))?;
    Ok(Json(admin))
}

/// DELETE /delete-admin/{admin_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Admin>> {
    let admin = AdminRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Admin", id))?;
    Ok(Json(admin))
}
