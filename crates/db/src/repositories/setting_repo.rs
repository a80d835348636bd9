//! Repository for the `app_settings` key/value table.

use sqlx::PgPool;

use crate::models::setting::SettingRow;

/// Provides data access for JSON settings documents.
pub struct SettingRepo;

impl SettingRepo {
    /// Fetch a settings document by key.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<SettingRow>, sqlx::Error> {
        sqlx::query_as::<_, SettingRow>(
            "SELECT key, value, updated_at FROM app_settings WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(pool)
        .await
    }

    /// Insert or replace a settings document.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<SettingRow, sqlx::Error> {
        sqlx::query_as::<_, SettingRow>(
            "INSERT INTO app_settings (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW() \
             RETURNING key, value, updated_at",
        )
        .bind(key)
        .bind(value)
        .fetch_one(pool)
        .await
    }
}
