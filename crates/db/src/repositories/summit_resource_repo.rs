//! Repository for the `summit_resources` table.

use sqlx::PgPool;
use summit_core::types::DbId;

use crate::models::summit_resource::{CreateSummitResource, SummitResource, UpdateSummitResource};

/// Column list for `summit_resources` queries.
const COLUMNS: &str = "id, title, url, description, created_at";

/// Provides data access for resource links.
pub struct SummitResourceRepo;

impl SummitResourceRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<SummitResource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM summit_resources ORDER BY id");
        sqlx::query_as::<_, SummitResource>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SummitResource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM summit_resources WHERE id = $1");
        sqlx::query_as::<_, SummitResource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        dto: &CreateSummitResource,
    ) -> Result<SummitResource, sqlx::Error> {
        let query = format!(
            "INSERT INTO summit_resources (title, url, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SummitResource>(&query)
            .bind(&dto.title)
            .bind(&dto.url)
            .bind(&dto.description)
            .fetch_one(pool)
            .await
    }

    /// Partially update a resource. Only provided fields change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateSummitResource,
    ) -> Result<Option<SummitResource>, sqlx::Error> {
        let query = format!(
            "UPDATE summit_resources SET \
                 title = COALESCE($2, title), \
                 url = COALESCE($3, url), \
                 description = COALESCE($4, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SummitResource>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.url)
            .bind(&dto.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM summit_resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
