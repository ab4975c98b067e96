//! Repository for the `admins` table.

use floorplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::admin::{Admin, CreateAdmin, UpdateAdmin};

const COLUMNS: &str = "id, username, password, created_at";

pub struct AdminRepo;

impl AdminRepo {
    pub async fn create(pool: &PgPool, input: &CreateAdmin) -> Result<Admin, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (username, password) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(&input.username)
            .bind(&input.password)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE id = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins ORDER BY id ASC");
        sqlx::query_as::<_, Admin>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdmin,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!(
            "UPDATE admins SET
                username = COALESCE($2, username),
                password = COALESCE($3, password)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.password)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("DELETE FROM admins WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
