//! Repository for the `ideas` table.

use sqlx::PgPool;
use summit_core::types::DbId;

use crate::models::idea::{CreateIdea, Idea};

/// Column list for `ideas` queries.
const COLUMNS: &str = "id, name, title, description, component, tag, idea_type, created_at";

/// Provides data access for ideas.
pub struct IdeaRepo;

impl IdeaRepo {
    /// List all ideas, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Idea>(&query).fetch_all(pool).await
    }

    /// Find an idea by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas WHERE id = $1");
        sqlx::query_as::<_, Idea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new idea.
    pub async fn create(pool: &PgPool, dto: &CreateIdea) -> Result<Idea, sqlx::Error> {
        let query = format!(
            "INSERT INTO ideas (name, title, description, component, tag, idea_type) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Idea>(&query)
            .bind(&dto.name)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(&dto.component)
            .bind(&dto.tag)
            .bind(&dto.idea_type)
            .fetch_one(pool)
            .await
    }

    /// Set the kanban category key of an idea.
    pub async fn update_category(
        pool: &PgPool,
        id: DbId,
        category: &str,
    ) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!("UPDATE ideas SET idea_type = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Idea>(&query)
            .bind(id)
            .bind(category)
            .fetch_optional(pool)
            .await
    }

    /// Delete an idea. Dynamic fields and votes cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
