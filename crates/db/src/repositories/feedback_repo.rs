//! Repository for the `feedbacks` table. Feedback is write-once.

use floorplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, Feedback};

const COLUMNS: &str = "id, title, content, personnel_id, created_at";

pub struct FeedbackRepo;

impl FeedbackRepo {
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedbacks (title, content, personnel_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.personnel_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedbacks WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all feedback, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedbacks ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Feedback>(&query).fetch_all(pool).await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("DELETE FROM feedbacks WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
