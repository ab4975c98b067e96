//! Request extractors whose rejections use the `{error, code}` error body.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use floorplan_core::error::CoreError;

use crate::error::AppError;

/// `axum::Json` for request bodies. A body that is not valid JSON for `T`
/// becomes a 400 `VALIDATION_ERROR` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}
