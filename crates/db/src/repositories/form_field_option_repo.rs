//! Repository for the `form_field_options` table.

use sqlx::PgPool;
use summit_core::types::DbId;

use crate::models::form_field::{CreateFormFieldOption, FormFieldOption, UpdateFormFieldOption};

/// Column list for `form_field_options` queries.
const COLUMNS: &str = "id, field_id, value, label, display_order, is_active, created_at";

/// Provides data access for list-field options.
pub struct FormFieldOptionRepo;

impl FormFieldOptionRepo {
    /// List options, optionally scoped to one field, in display order.
    pub async fn list(
        pool: &PgPool,
        field_id: Option<DbId>,
    ) -> Result<Vec<FormFieldOption>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM form_field_options \
             WHERE ($1::BIGINT IS NULL OR field_id = $1) \
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, FormFieldOption>(&query)
            .bind(field_id)
            .fetch_all(pool)
            .await
    }

    /// Find an option by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FormFieldOption>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_field_options WHERE id = $1");
        sqlx::query_as::<_, FormFieldOption>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new option. Without an explicit order it goes last within
    /// its field.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateFormFieldOption,
    ) -> Result<FormFieldOption, sqlx::Error> {
        let query = format!(
            "INSERT INTO form_field_options (field_id, value, label, display_order, is_active) \
             VALUES ($1, $2, $3, \
                 COALESCE($4, (SELECT COALESCE(MAX(display_order), 0) + 1 \
                               FROM form_field_options WHERE field_id = $1)), \
                 COALESCE($5, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormFieldOption>(&query)
            .bind(dto.field_id)
            .bind(&dto.value)
            .bind(&dto.label)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update an option.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateFormFieldOption,
    ) -> Result<Option<FormFieldOption>, sqlx::Error> {
        let query = format!(
            "UPDATE form_field_options SET \
                 value = COALESCE($2, value), \
                 label = COALESCE($3, label), \
                 display_order = COALESCE($4, display_order), \
                 is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormFieldOption>(&query)
            .bind(id)
            .bind(&dto.value)
            .bind(&dto.label)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an option by ID.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM form_field_options WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
