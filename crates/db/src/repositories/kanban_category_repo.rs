//! Repository for the `kanban_categories` table.

use sqlx::PgPool;
use summit_core::kanban::DEFAULT_CATEGORY_COLOR;
use summit_core::types::DbId;

use crate::models::kanban_category::{CreateKanbanCategory, KanbanCategory, UpdateKanbanCategory};

/// Column list for `kanban_categories` queries.
const COLUMNS: &str = "\
    id, key, title, color, display_order, is_active, created_at, updated_at";

/// Provides data access for kanban categories.
pub struct KanbanCategoryRepo;

impl KanbanCategoryRepo {
    /// List all categories in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<KanbanCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kanban_categories ORDER BY display_order, id");
        sqlx::query_as::<_, KanbanCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<KanbanCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kanban_categories WHERE id = $1");
        sqlx::query_as::<_, KanbanCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new category.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateKanbanCategory,
    ) -> Result<KanbanCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO kanban_categories (key, title, color, display_order, is_active) \
             VALUES ($1, $2, COALESCE($3, $6), \
                 COALESCE($4, (SELECT COALESCE(MAX(display_order), 0) + 1 FROM kanban_categories)), \
                 COALESCE($5, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KanbanCategory>(&query)
            .bind(&dto.key)
            .bind(&dto.title)
            .bind(&dto.color)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .bind(DEFAULT_CATEGORY_COLOR)
            .fetch_one(pool)
            .await
    }

    /// Partially update a category.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateKanbanCategory,
    ) -> Result<Option<KanbanCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE kanban_categories SET \
                 title = COALESCE($2, title), \
                 color = COALESCE($3, color), \
                 display_order = COALESCE($4, display_order), \
                 is_active = COALESCE($5, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KanbanCategory>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.color)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Ideas keep their key and show as unassigned.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kanban_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
