//! Postgres storage backend.
//!
//! Thin delegation to the repositories. Constraint violations are turned into
//! [`StoreError::Conflict`] so callers see the same errors as with
//! [`super::MemoryStore`].

use summit_core::types::DbId;

use super::Store;
use crate::error::{StoreError, StoreResult};
use crate::models::form_field::{
    CreateFormField, CreateFormFieldOption, FormField, FormFieldOption, UpdateFormField,
    UpdateFormFieldOption,
};
use crate::models::idea::{CreateIdea, Idea};
use crate::models::idea_dynamic_field::{CreateIdeaDynamicField, IdeaDynamicField};
use crate::models::kanban_category::{
    CreateKanbanCategory, KanbanCategory, UpdateKanbanCategory,
};
use crate::models::summit_resource::{
    CreateSummitResource, SummitResource, UpdateSummitResource,
};
use crate::models::vote::{IdeaVoteTotal, Vote};
use crate::repositories::{
    FormFieldOptionRepo, FormFieldRepo, IdeaDynamicFieldRepo, IdeaRepo, KanbanCategoryRepo,
    SettingRepo, SummitResourceRepo, VoteRepo,
};
use crate::DbPool;

/// Storage backed by a Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map unique (23505) and foreign-key (23503) violations to conflicts.
fn map_db_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.code().as_deref() {
            Some("23505") => {
                let constraint = db_err.constraint().unwrap_or("unique constraint");
                return StoreError::Conflict(format!("Duplicate value violates {constraint}"));
            }
            Some("23503") => {
                return StoreError::Conflict("Referenced record does not exist".to_string());
            }
            _ => {}
        }
    }
    StoreError::Database(err)
}

#[async_trait::async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Postgres health check failed");
                StoreError::Unavailable(e.to_string())
            })
    }

    // --- Ideas ---

    async fn list_ideas(&self) -> StoreResult<Vec<Idea>> {
        IdeaRepo::list(&self.pool).await.map_err(map_db_error)
    }

    async fn find_idea(&self, id: DbId) -> StoreResult<Option<Idea>> {
        IdeaRepo::find_by_id(&self.pool, id).await.map_err(map_db_error)
    }

    async fn create_idea(&self, dto: &CreateIdea) -> StoreResult<Idea> {
        IdeaRepo::create(&self.pool, dto).await.map_err(map_db_error)
    }

    async fn update_idea_category(&self, id: DbId, category: &str) -> StoreResult<Option<Idea>> {
        IdeaRepo::update_category(&self.pool, id, category)
            .await
            .map_err(map_db_error)
    }

    async fn delete_idea(&self, id: DbId) -> StoreResult<bool> {
        IdeaRepo::delete(&self.pool, id).await.map_err(map_db_error)
    }

    // --- Form fields ---

    async fn list_form_fields(&self) -> StoreResult<Vec<FormField>> {
        FormFieldRepo::list(&self.pool).await.map_err(map_db_error)
    }

    async fn find_form_field(&self, id: DbId) -> StoreResult<Option<FormField>> {
        FormFieldRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_error)
    }

    async fn create_form_field(&self, dto: &CreateFormField) -> StoreResult<FormField> {
        FormFieldRepo::create(&self.pool, dto)
            .await
            .map_err(map_db_error)
    }

    async fn update_form_field(
        &self,
        id: DbId,
        dto: &UpdateFormField,
    ) -> StoreResult<Option<FormField>> {
        FormFieldRepo::update(&self.pool, id, dto)
            .await
            .map_err(map_db_error)
    }

    async fn delete_form_field(&self, id: DbId) -> StoreResult<bool> {
        FormFieldRepo::delete(&self.pool, id)
            .await
            .map_err(map_db_error)
    }

    // --- Form field options ---

    async fn list_form_field_options(
        &self,
        field_id: Option<DbId>,
    ) -> StoreResult<Vec<FormFieldOption>> {
        FormFieldOptionRepo::list(&self.pool, field_id)
            .await
            .map_err(map_db_error)
    }

    async fn find_form_field_option(&self, id: DbId) -> StoreResult<Option<FormFieldOption>> {
        FormFieldOptionRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_error)
    }

    async fn create_form_field_option(
        &self,
        dto: &CreateFormFieldOption,
    ) -> StoreResult<FormFieldOption> {
        FormFieldOptionRepo::create(&self.pool, dto)
            .await
            .map_err(map_db_error)
    }

    async fn update_form_field_option(
        &self,
        id: DbId,
        dto: &UpdateFormFieldOption,
    ) -> StoreResult<Option<FormFieldOption>> {
        FormFieldOptionRepo::update(&self.pool, id, dto)
            .await
            .map_err(map_db_error)
    }

    async fn delete_form_field_option(&self, id: DbId) -> StoreResult<bool> {
        FormFieldOptionRepo::delete(&self.pool, id)
            .await
            .map_err(map_db_error)
    }

    // --- Idea dynamic fields ---

    async fn list_idea_dynamic_fields(
        &self,
        idea_id: Option<DbId>,
    ) -> StoreResult<Vec<IdeaDynamicField>> {
        IdeaDynamicFieldRepo::list(&self.pool, idea_id)
            .await
            .map_err(map_db_error)
    }

    async fn create_idea_dynamic_field(
        &self,
        dto: &CreateIdeaDynamicField,
    ) -> StoreResult<IdeaDynamicField> {
        IdeaDynamicFieldRepo::create(&self.pool, dto)
            .await
            .map_err(map_db_error)
    }

    // --- Kanban categories ---

    async fn list_kanban_categories(&self) -> StoreResult<Vec<KanbanCategory>> {
        KanbanCategoryRepo::list(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn find_kanban_category(&self, id: DbId) -> StoreResult<Option<KanbanCategory>> {
        KanbanCategoryRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_error)
    }

    async fn create_kanban_category(
        &self,
        dto: &CreateKanbanCategory,
    ) -> StoreResult<KanbanCategory> {
        KanbanCategoryRepo::create(&self.pool, dto)
            .await
            .map_err(map_db_error)
    }

    async fn update_kanban_category(
        &self,
        id: DbId,
        dto: &UpdateKanbanCategory,
    ) -> StoreResult<Option<KanbanCategory>> {
        KanbanCategoryRepo::update(&self.pool, id, dto)
            .await
            .map_err(map_db_error)
    }

    async fn delete_kanban_category(&self, id: DbId) -> StoreResult<bool> {
        KanbanCategoryRepo::delete(&self.pool, id)
            .await
            .map_err(map_db_error)
    }

    // --- Votes ---

    async fn list_votes(&self, session_id: Option<&str>) -> StoreResult<Vec<Vote>> {
        VoteRepo::list(&self.pool, session_id)
            .await
            .map_err(map_db_error)
    }

    async fn find_vote(&self, idea_id: DbId, session_id: &str) -> StoreResult<Option<Vote>> {
        VoteRepo::find(&self.pool, idea_id, session_id)
            .await
            .map_err(map_db_error)
    }

    async fn upsert_vote(
        &self,
        idea_id: DbId,
        session_id: &str,
        vote_count: i32,
    ) -> StoreResult<Vote> {
        VoteRepo::upsert(&self.pool, idea_id, session_id, vote_count)
            .await
            .map_err(map_db_error)
    }

    async fn delete_vote(&self, idea_id: DbId, session_id: &str) -> StoreResult<bool> {
        VoteRepo::delete(&self.pool, idea_id, session_id)
            .await
            .map_err(map_db_error)
    }

    async fn session_vote_total(&self, session_id: &str) -> StoreResult<i64> {
        VoteRepo::session_total(&self.pool, session_id)
            .await
            .map_err(map_db_error)
    }

    async fn vote_totals(&self) -> StoreResult<Vec<IdeaVoteTotal>> {
        VoteRepo::totals(&self.pool).await.map_err(map_db_error)
    }

    // --- Settings documents ---

    async fn get_setting(&self, key: &str) -> StoreResult<Option<serde_json::Value>> {
        let row = SettingRepo::get(&self.pool, key)
            .await
            .map_err(map_db_error)?;
        Ok(row.map(|r| r.value))
    }

    async fn put_setting(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> StoreResult<serde_json::Value> {
        let row = SettingRepo::upsert(&self.pool, key, value)
            .await
            .map_err(map_db_error)?;
        Ok(row.value)
    }

    // --- Summit resources ---

    async fn list_summit_resources(&self) -> StoreResult<Vec<SummitResource>> {
        SummitResourceRepo::list(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn find_summit_resource(&self, id: DbId) -> StoreResult<Option<SummitResource>> {
        SummitResourceRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_error)
    }

    async fn create_summit_resource(
        &self,
        dto: &CreateSummitResource,
    ) -> StoreResult<SummitResource> {
        SummitResourceRepo::create(&self.pool, dto)
            .await
            .map_err(map_db_error)
    }

    async fn update_summit_resource(
        &self,
        id: DbId,
        dto: &UpdateSummitResource,
    ) -> StoreResult<Option<SummitResource>> {
        SummitResourceRepo::update(&self.pool, id, dto)
            .await
            .map_err(map_db_error)
    }

    async fn delete_summit_resource(&self, id: DbId) -> StoreResult<bool> {
        SummitResourceRepo::delete(&self.pool, id)
            .await
            .map_err(map_db_error)
    }
}
