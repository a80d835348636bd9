//! Repository for the `idea_dynamic_fields` table.

use sqlx::PgPool;
use summit_core::types::DbId;

use crate::models::idea_dynamic_field::{CreateIdeaDynamicField, IdeaDynamicField};

/// Column list for `idea_dynamic_fields` queries.
const COLUMNS: &str = "id, idea_id, field_id, value, created_at";

/// Provides data access for dynamic idea attributes.
pub struct IdeaDynamicFieldRepo;

impl IdeaDynamicFieldRepo {
    /// List values, optionally scoped to one idea.
    pub async fn list(
        pool: &PgPool,
        idea_id: Option<DbId>,
    ) -> Result<Vec<IdeaDynamicField>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM idea_dynamic_fields \
             WHERE ($1::BIGINT IS NULL OR idea_id = $1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, IdeaDynamicField>(&query)
            .bind(idea_id)
            .fetch_all(pool)
            .await
    }

    /// Attach a value to an idea.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateIdeaDynamicField,
    ) -> Result<IdeaDynamicField, sqlx::Error> {
        let query = format!(
            "INSERT INTO idea_dynamic_fields (idea_id, field_id, value) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IdeaDynamicField>(&query)
            .bind(dto.idea_id)
            .bind(dto.field_id)
            .bind(&dto.value)
            .fetch_one(pool)
            .await
    }
}
