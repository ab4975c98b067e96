//! Feedback model and DTO.

use floorplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `feedbacks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub personnel_id: DbId,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedback {
    pub title: String,
    pub content: String,
    pub personnel_id: DbId,
}
