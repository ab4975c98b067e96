//! Handlers for feedback. There is no update endpoint.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use floorplan_core::types::DbId;
use floorplan_db::models::feedback::{CreateFeedback, Feedback};
use floorplan_db::repositories::FeedbackRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /fetch-feedback/{feedback_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Feedback>> {
    let feedback = FeedbackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Feedback", id))?;
    Ok(Json(feedback))
}

/// GET /fetch-feedbacks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Feedback>>> {
    Ok(Json(FeedbackRepo::list(&state.pool).await?))
}

/// POST /create-feedback
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFeedback>,
) -> AppResult<(StatusCode, Json<Feedback>)> {
    let feedback = FeedbackRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// DELETE /delete-feedback/{feedback_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Feedback>> {
    let feedback = FeedbackRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Feedback", id))?;
    Ok(Json(feedback))
}
