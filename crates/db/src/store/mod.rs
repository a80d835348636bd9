//! Backend-agnostic storage interface.
//!
//! Handlers and services talk to an `Arc<dyn Store>`. Two backends exist:
//! [`MemoryStore`] for development and demos, and [`PgStore`] over the
//! Postgres repositories. Each method touches a single entity; callers that
//! chain several writes get no transaction.

pub mod memory;
pub mod postgres;
pub mod seed;

use summit_core::types::DbId;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::StoreResult;
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

/// Storage backend trait.
///
/// Ordering contracts shared by all backends:
/// - ideas: newest first
/// - form fields, options, categories: `display_order`, then id
/// - dynamic fields, votes, resources: id ascending
///
/// `find_*` and `update_*` return `None` for unknown ids; `delete_*` returns
/// whether a row was removed.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Check that the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    // --- Ideas ---

    async fn list_ideas(&self) -> StoreResult<Vec<Idea>>;
    async fn find_idea(&self, id: DbId) -> StoreResult<Option<Idea>>;
    async fn create_idea(&self, dto: &CreateIdea) -> StoreResult<Idea>;
    async fn update_idea_category(&self, id: DbId, category: &str) -> StoreResult<Option<Idea>>;
    /// Delete an idea together with its dynamic fields and votes.
    async fn delete_idea(&self, id: DbId) -> StoreResult<bool>;

    // --- Form fields ---

    async fn list_form_fields(&self) -> StoreResult<Vec<FormField>>;
    async fn find_form_field(&self, id: DbId) -> StoreResult<Option<FormField>>;
    async fn create_form_field(&self, dto: &CreateFormField) -> StoreResult<FormField>;
    async fn update_form_field(
        &self,
        id: DbId,
        dto: &UpdateFormField,
    ) -> StoreResult<Option<FormField>>;
    /// Delete a field and its options. Dynamic values that reference it stay.
    async fn delete_form_field(&self, id: DbId) -> StoreResult<bool>;

    // --- Form field options ---

    async fn list_form_field_options(
        &self,
        field_id: Option<DbId>,
    ) -> StoreResult<Vec<FormFieldOption>>;
    async fn find_form_field_option(&self, id: DbId) -> StoreResult<Option<FormFieldOption>>;
    async fn create_form_field_option(
        &self,
        dto: &CreateFormFieldOption,
    ) -> StoreResult<FormFieldOption>;
    async fn update_form_field_option(
        &self,
        id: DbId,
        dto: &UpdateFormFieldOption,
    ) -> StoreResult<Option<FormFieldOption>>;
    async fn delete_form_field_option(&self, id: DbId) -> StoreResult<bool>;

    // --- Idea dynamic fields ---

    async fn list_idea_dynamic_fields(
        &self,
        idea_id: Option<DbId>,
    ) -> StoreResult<Vec<IdeaDynamicField>>;
    async fn create_idea_dynamic_field(
        &self,
        dto: &CreateIdeaDynamicField,
    ) -> StoreResult<IdeaDynamicField>;

    // --- Kanban categories ---

    async fn list_kanban_categories(&self) -> StoreResult<Vec<KanbanCategory>>;
    async fn find_kanban_category(&self, id: DbId) -> StoreResult<Option<KanbanCategory>>;
    async fn create_kanban_category(
        &self,
        dto: &CreateKanbanCategory,
    ) -> StoreResult<KanbanCategory>;
    async fn update_kanban_category(
        &self,
        id: DbId,
        dto: &UpdateKanbanCategory,
    ) -> StoreResult<Option<KanbanCategory>>;
    async fn delete_kanban_category(&self, id: DbId) -> StoreResult<bool>;

    // --- Votes ---

    async fn list_votes(&self, session_id: Option<&str>) -> StoreResult<Vec<Vote>>;
    async fn find_vote(&self, idea_id: DbId, session_id: &str) -> StoreResult<Option<Vote>>;
    /// Create or overwrite the (idea, session) row. `vote_count` must be >= 1.
    async fn upsert_vote(
        &self,
        idea_id: DbId,
        session_id: &str,
        vote_count: i32,
    ) -> StoreResult<Vote>;
    async fn delete_vote(&self, idea_id: DbId, session_id: &str) -> StoreResult<bool>;
    /// Sum of a session's votes across all ideas.
    async fn session_vote_total(&self, session_id: &str) -> StoreResult<i64>;
    /// Vote sums per idea, ideas without votes omitted.
    async fn vote_totals(&self) -> StoreResult<Vec<IdeaVoteTotal>>;

    // --- Settings documents ---

    async fn get_setting(&self, key: &str) -> StoreResult<Option<serde_json::Value>>;
    async fn put_setting(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> StoreResult<serde_json::Value>;

    // --- Summit resources ---

    async fn list_summit_resources(&self) -> StoreResult<Vec<SummitResource>>;
    async fn find_summit_resource(&self, id: DbId) -> StoreResult<Option<SummitResource>>;
    async fn create_summit_resource(
        &self,
        dto: &CreateSummitResource,
    ) -> StoreResult<SummitResource>;
    async fn update_summit_resource(
        &self,
        id: DbId,
        dto: &UpdateSummitResource,
    ) -> StoreResult<Option<SummitResource>>;
    async fn delete_summit_resource(&self, id: DbId) -> StoreResult<bool>;
}
