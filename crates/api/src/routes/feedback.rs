//! Feedback routes. Feedback cannot be edited once created.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// ```text
/// GET    /fetch-feedback/{feedback_id}   -> get_by_id
/// GET    /fetch-feedbacks                -> list
/// POST   /create-feedback                -> create
/// DELETE /delete-feedback/{feedback_id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fetch-feedback/{feedback_id}", get(feedback::get_by_id))
        .route("/fetch-feedbacks", get(feedback::list))
        .route("/create-feedback", post(feedback::create))
        .route("/delete-feedback/{feedback_id}", delete(feedback::delete))
}
