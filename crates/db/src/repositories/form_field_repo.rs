//! Repository for the `form_fields` table.

use sqlx::PgPool;
use summit_core::types::DbId;

use crate::models::form_field::{CreateFormField, FormField, UpdateFormField};

/// Column list for `form_fields` queries.
const COLUMNS: &str = "\
    id, name, label, field_type, required, placeholder, help_text, \
    display_order, is_active, allow_user_additions, created_at, updated_at";

/// Provides data access for form field definitions.
pub struct FormFieldRepo;

impl FormFieldRepo {
    /// List all fields (active and inactive) in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<FormField>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_fields ORDER BY display_order, id");
        sqlx::query_as::<_, FormField>(&query).fetch_all(pool).await
    }

    /// Find a field by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FormField>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_fields WHERE id = $1");
        sqlx::query_as::<_, FormField>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new field. Without an explicit order the field goes last.
    pub async fn create(pool: &PgPool, dto: &CreateFormField) -> Result<FormField, sqlx::Error> {
        let query = format!(
            "INSERT INTO form_fields \
                 (name, label, field_type, required, placeholder, help_text, \
                  display_order, is_active, allow_user_additions) \
             VALUES ($1, $2, $3, $4, $5, $6, \
                 COALESCE($7, (SELECT COALESCE(MAX(display_order), 0) + 1 FROM form_fields)), \
                 COALESCE($8, TRUE), COALESCE($9, FALSE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormField>(&query)
            .bind(&dto.name)
            .bind(&dto.label)
            .bind(&dto.field_type)
            .bind(dto.required)
            .bind(&dto.placeholder)
            .bind(&dto.help_text)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .bind(dto.allow_user_additions)
            .fetch_one(pool)
            .await
    }

    /// Partially update a field.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateFormField,
    ) -> Result<Option<FormField>, sqlx::Error> {
        let query = format!(
            "UPDATE form_fields SET \
                 name = COALESCE($2, name), \
                 label = COALESCE($3, label), \
                 field_type = COALESCE($4, field_type), \
                 required = COALESCE($5, required), \
                 placeholder = COALESCE($6, placeholder), \
                 help_text = COALESCE($7, help_text), \
                 display_order = COALESCE($8, display_order), \
                 is_active = COALESCE($9, is_active), \
                 allow_user_additions = COALESCE($10, allow_user_additions), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormField>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.label)
            .bind(&dto.field_type)
            .bind(dto.required)
            .bind(&dto.placeholder)
            .bind(&dto.help_text)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .bind(dto.allow_user_additions)
            .fetch_optional(pool)
            .await
    }

    /// Delete a field. Its options cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM form_fields WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
