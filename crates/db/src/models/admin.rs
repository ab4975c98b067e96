//! Administrator model and DTOs.

use floorplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `admins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdmin {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdmin {
    pub username: Option<String>,
    pub password: Option<String>,
}
