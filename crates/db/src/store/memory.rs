//! In-memory storage backend.
//!
//! Mirrors the Postgres schema rules (uniqueness, cascades, ordering) so the
//! service behaves the same against either backend. Every method takes the
//! table lock once, so each call is atomic on its own.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use summit_core::types::DbId;
use tokio::sync::RwLock;

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
use summit_core::kanban::DEFAULT_CATEGORY_COLOR;

#[derive(Default)]
struct Tables {
    next_id: DbId,
    ideas: BTreeMap<DbId, Idea>,
    form_fields: BTreeMap<DbId, FormField>,
    form_field_options: BTreeMap<DbId, FormFieldOption>,
    idea_dynamic_fields: BTreeMap<DbId, IdeaDynamicField>,
    kanban_categories: BTreeMap<DbId, KanbanCategory>,
    votes: BTreeMap<DbId, Vote>,
    settings: HashMap<String, serde_json::Value>,
    summit_resources: BTreeMap<DbId, SummitResource>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn active_field_name_taken(&self, name: &str, except: Option<DbId>) -> bool {
        self.form_fields
            .values()
            .any(|f| f.is_active && f.name == name && Some(f.id) != except)
    }

    fn option_value_taken(&self, field_id: DbId, value: &str, except: Option<DbId>) -> bool {
        self.form_field_options
            .values()
            .any(|o| o.field_id == field_id && o.value == value && Some(o.id) != except)
    }
}

/// Next display order after the current maximum (1 for an empty set).
fn next_order(orders: impl Iterator<Item = i32>) -> i32 {
    orders.max().unwrap_or(0) + 1
}

fn sorted_by_order<T: Clone>(rows: impl Iterator<Item = T>, key: impl Fn(&T) -> (i32, DbId)) -> Vec<T> {
    let mut out: Vec<T> = rows.collect();
    out.sort_by_key(|r| key(r));
    out
}

/// Storage backed by process memory. Data is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Ideas
    // -----------------------------------------------------------------------

    async fn list_ideas(&self) -> StoreResult<Vec<Idea>> {
        let t = self.tables.read().await;
        Ok(t.ideas.values().rev().cloned().collect())
    }

    async fn find_idea(&self, id: DbId) -> StoreResult<Option<Idea>> {
        Ok(self.tables.read().await.ideas.get(&id).cloned())
    }

    async fn create_idea(&self, dto: &CreateIdea) -> StoreResult<Idea> {
        let mut t = self.tables.write().await;
        let idea = Idea {
            id: t.next_id(),
            name: dto.name.clone(),
            title: dto.title.clone(),
            description: dto.description.clone(),
            component: dto.component.clone(),
            tag: dto.tag.clone(),
            idea_type: dto.idea_type.clone(),
            created_at: Utc::now(),
        };
        t.ideas.insert(idea.id, idea.clone());
        Ok(idea)
    }

    async fn update_idea_category(&self, id: DbId, category: &str) -> StoreResult<Option<Idea>> {
        let mut t = self.tables.write().await;
        Ok(t.ideas.get_mut(&id).map(|idea| {
            idea.idea_type = category.to_string();
            idea.clone()
        }))
    }

    async fn delete_idea(&self, id: DbId) -> StoreResult<bool> {
        let mut t = self.tables.write().await;
        if t.ideas.remove(&id).is_none() {
            return Ok(false);
        }
        t.idea_dynamic_fields.retain(|_, d| d.idea_id != id);
        t.votes.retain(|_, v| v.idea_id != id);
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Form fields
    // -----------------------------------------------------------------------

    async fn list_form_fields(&self) -> StoreResult<Vec<FormField>> {
        let t = self.tables.read().await;
        Ok(sorted_by_order(t.form_fields.values().cloned(), |f| {
            (f.display_order, f.id)
        }))
    }

    async fn find_form_field(&self, id: DbId) -> StoreResult<Option<FormField>> {
        Ok(self.tables.read().await.form_fields.get(&id).cloned())
    }

    async fn create_form_field(&self, dto: &CreateFormField) -> StoreResult<FormField> {
        let mut t = self.tables.write().await;
        let is_active = dto.is_active.unwrap_or(true);
        if is_active && t.active_field_name_taken(&dto.name, None) {
            return Err(StoreError::Conflict(format!(
                "An active form field named '{}' already exists",
                dto.name
            )));
        }
        let now = Utc::now();
        let display_order = dto
            .display_order
            .unwrap_or_else(|| next_order(t.form_fields.values().map(|f| f.display_order)));
        let field = FormField {
            id: t.next_id(),
            name: dto.name.clone(),
            label: dto.label.clone(),
            field_type: dto.field_type.clone(),
            required: dto.required,
            placeholder: dto.placeholder.clone(),
            help_text: dto.help_text.clone(),
            display_order,
            is_active,
            allow_user_additions: dto.allow_user_additions.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        t.form_fields.insert(field.id, field.clone());
        Ok(field)
    }

    async fn update_form_field(
        &self,
        id: DbId,
        dto: &UpdateFormField,
    ) -> StoreResult<Option<FormField>> {
        let mut t = self.tables.write().await;
        let Some(current) = t.form_fields.get(&id).cloned() else {
            return Ok(None);
        };

        let name = dto.name.clone().unwrap_or(current.name.clone());
        let is_active = dto.is_active.unwrap_or(current.is_active);
        if is_active && t.active_field_name_taken(&name, Some(id)) {
            return Err(StoreError::Conflict(format!(
                "An active form field named '{name}' already exists"
            )));
        }

        let updated = FormField {
            name,
            label: dto.label.clone().unwrap_or(current.label),
            field_type: dto.field_type.clone().unwrap_or(current.field_type),
            required: dto.required.unwrap_or(current.required),
            placeholder: dto.placeholder.clone().or(current.placeholder),
            help_text: dto.help_text.clone().or(current.help_text),
            display_order: dto.display_order.unwrap_or(current.display_order),
            is_active,
            allow_user_additions: dto
                .allow_user_additions
                .unwrap_or(current.allow_user_additions),
            updated_at: Utc::now(),
            ..current
        };
        t.form_fields.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete_form_field(&self, id: DbId) -> StoreResult<bool> {
        let mut t = self.tables.write().await;
        if t.form_fields.remove(&id).is_none() {
            return Ok(false);
        }
        t.form_field_options.retain(|_, o| o.field_id != id);
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Form field options
    // -----------------------------------------------------------------------

    async fn list_form_field_options(
        &self,
        field_id: Option<DbId>,
    ) -> StoreResult<Vec<FormFieldOption>> {
        let t = self.tables.read().await;
        let rows = t
            .form_field_options
            .values()
            .filter(|o| field_id.map_or(true, |fid| o.field_id == fid))
            .cloned();
        Ok(sorted_by_order(rows, |o| (o.display_order, o.id)))
    }

    async fn find_form_field_option(&self, id: DbId) -> StoreResult<Option<FormFieldOption>> {
        Ok(self.tables.read().await.form_field_options.get(&id).cloned())
    }

    async fn create_form_field_option(
        &self,
        dto: &CreateFormFieldOption,
    ) -> StoreResult<FormFieldOption> {
        let mut t = self.tables.write().await;
        if !t.form_fields.contains_key(&dto.field_id) {
            return Err(StoreError::Conflict(format!(
                "Form field {} does not exist",
                dto.field_id
            )));
        }
        if t.option_value_taken(dto.field_id, &dto.value, None) {
            return Err(StoreError::Conflict(format!(
                "Option '{}' already exists for field {}",
                dto.value, dto.field_id
            )));
        }
        let display_order = dto.display_order.unwrap_or_else(|| {
            next_order(
                t.form_field_options
                    .values()
                    .filter(|o| o.field_id == dto.field_id)
                    .map(|o| o.display_order),
            )
        });
        let option = FormFieldOption {
            id: t.next_id(),
            field_id: dto.field_id,
            value: dto.value.clone(),
            label: dto.label.clone(),
            display_order,
            is_active: dto.is_active.unwrap_or(true),
            created_at: Utc::now(),
        };
        t.form_field_options.insert(option.id, option.clone());
        Ok(option)
    }

    async fn update_form_field_option(
        &self,
        id: DbId,
        dto: &UpdateFormFieldOption,
    ) -> StoreResult<Option<FormFieldOption>> {
        let mut t = self.tables.write().await;
        let Some(current) = t.form_field_options.get(&id).cloned() else {
            return Ok(None);
        };
        let value = dto.value.clone().unwrap_or(current.value.clone());
        if t.option_value_taken(current.field_id, &value, Some(id)) {
            return Err(StoreError::Conflict(format!(
                "Option '{value}' already exists for field {}",
                current.field_id
            )));
        }
        let updated = FormFieldOption {
            value,
            label: dto.label.clone().unwrap_or(current.label),
            display_order: dto.display_order.unwrap_or(current.display_order),
            is_active: dto.is_active.unwrap_or(current.is_active),
            ..current
        };
        t.form_field_options.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete_form_field_option(&self, id: DbId) -> StoreResult<bool> {
        Ok(self
            .tables
            .write()
            .await
            .form_field_options
            .remove(&id)
            .is_some())
    }

    // -----------------------------------------------------------------------
    // Idea dynamic fields
    // -----------------------------------------------------------------------

    async fn list_idea_dynamic_fields(
        &self,
        idea_id: Option<DbId>,
    ) -> StoreResult<Vec<IdeaDynamicField>> {
        let t = self.tables.read().await;
        Ok(t.idea_dynamic_fields
            .values()
            .filter(|d| idea_id.map_or(true, |iid| d.idea_id == iid))
            .cloned()
            .collect())
    }

    async fn create_idea_dynamic_field(
        &self,
        dto: &CreateIdeaDynamicField,
    ) -> StoreResult<IdeaDynamicField> {
        let mut t = self.tables.write().await;
        if !t.ideas.contains_key(&dto.idea_id) {
            return Err(StoreError::Conflict(format!(
                "Idea {} does not exist",
                dto.idea_id
            )));
        }
        let row = IdeaDynamicField {
            id: t.next_id(),
            idea_id: dto.idea_id,
            field_id: dto.field_id,
            value: dto.value.clone(),
            created_at: Utc::now(),
        };
        t.idea_dynamic_fields.insert(row.id, row.clone());
        Ok(row)
    }

    // -----------------------------------------------------------------------
    // Kanban categories
    // -----------------------------------------------------------------------

    async fn list_kanban_categories(&self) -> StoreResult<Vec<KanbanCategory>> {
        let t = self.tables.read().await;
        Ok(sorted_by_order(t.kanban_categories.values().cloned(), |c| {
            (c.display_order, c.id)
        }))
    }

    async fn find_kanban_category(&self, id: DbId) -> StoreResult<Option<KanbanCategory>> {
        Ok(self.tables.read().await.kanban_categories.get(&id).cloned())
    }

    async fn create_kanban_category(
        &self,
        dto: &CreateKanbanCategory,
    ) -> StoreResult<KanbanCategory> {
        let mut t = self.tables.write().await;
        if t.kanban_categories.values().any(|c| c.key == dto.key) {
            return Err(StoreError::Conflict(format!(
                "A category with key '{}' already exists",
                dto.key
            )));
        }
        let now = Utc::now();
        let display_order = dto
            .display_order
            .unwrap_or_else(|| next_order(t.kanban_categories.values().map(|c| c.display_order)));
        let category = KanbanCategory {
            id: t.next_id(),
            key: dto.key.clone(),
            title: dto.title.clone(),
            color: dto
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            display_order,
            is_active: dto.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        t.kanban_categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_kanban_category(
        &self,
        id: DbId,
        dto: &UpdateKanbanCategory,
    ) -> StoreResult<Option<KanbanCategory>> {
        let mut t = self.tables.write().await;
        Ok(t.kanban_categories.get_mut(&id).map(|c| {
            if let Some(title) = &dto.title {
                c.title = title.clone();
            }
            if let Some(color) = &dto.color {
                c.color = color.clone();
            }
            if let Some(order) = dto.display_order {
                c.display_order = order;
            }
            if let Some(active) = dto.is_active {
                c.is_active = active;
            }
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn delete_kanban_category(&self, id: DbId) -> StoreResult<bool> {
        Ok(self
            .tables
            .write()
            .await
            .kanban_categories
            .remove(&id)
            .is_some())
    }

    // -----------------------------------------------------------------------
    // Votes
    // -----------------------------------------------------------------------

    async fn list_votes(&self, session_id: Option<&str>) -> StoreResult<Vec<Vote>> {
        let t = self.tables.read().await;
        Ok(t.votes
            .values()
            .filter(|v| session_id.map_or(true, |s| v.session_id == s))
            .cloned()
            .collect())
    }

    async fn find_vote(&self, idea_id: DbId, session_id: &str) -> StoreResult<Option<Vote>> {
        let t = self.tables.read().await;
        Ok(t.votes
            .values()
            .find(|v| v.idea_id == idea_id && v.session_id == session_id)
            .cloned())
    }

    async fn upsert_vote(
        &self,
        idea_id: DbId,
        session_id: &str,
        vote_count: i32,
    ) -> StoreResult<Vote> {
        let mut t = self.tables.write().await;
        if !t.ideas.contains_key(&idea_id) {
            return Err(StoreError::Conflict(format!("Idea {idea_id} does not exist")));
        }
        let now = Utc::now();
        let existing = t
            .votes
            .values_mut()
            .find(|v| v.idea_id == idea_id && v.session_id == session_id);
        if let Some(vote) = existing {
            vote.vote_count = vote_count;
            vote.updated_at = now;
            return Ok(vote.clone());
        }
        let vote = Vote {
            id: t.next_id(),
            idea_id,
            session_id: session_id.to_string(),
            vote_count,
            created_at: now,
            updated_at: now,
        };
        t.votes.insert(vote.id, vote.clone());
        Ok(vote)
    }

    async fn delete_vote(&self, idea_id: DbId, session_id: &str) -> StoreResult<bool> {
        let mut t = self.tables.write().await;
        let before = t.votes.len();
        t.votes
            .retain(|_, v| !(v.idea_id == idea_id && v.session_id == session_id));
        Ok(t.votes.len() != before)
    }

    async fn session_vote_total(&self, session_id: &str) -> StoreResult<i64> {
        let t = self.tables.read().await;
        Ok(t.votes
            .values()
            .filter(|v| v.session_id == session_id)
            .map(|v| i64::from(v.vote_count))
            .sum())
    }

    async fn vote_totals(&self) -> StoreResult<Vec<IdeaVoteTotal>> {
        let t = self.tables.read().await;
        let mut totals: BTreeMap<DbId, i64> = BTreeMap::new();
        for v in t.votes.values() {
            *totals.entry(v.idea_id).or_default() += i64::from(v.vote_count);
        }
        Ok(totals
            .into_iter()
            .map(|(idea_id, total_votes)| IdeaVoteTotal {
                idea_id,
                total_votes,
            })
            .collect())
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    async fn get_setting(&self, key: &str) -> StoreResult<Option<serde_json::Value>> {
        Ok(self.tables.read().await.settings.get(key).cloned())
    }

    async fn put_setting(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> StoreResult<serde_json::Value> {
        self.tables
            .write()
            .await
            .settings
            .insert(key.to_string(), value.clone());
        Ok(value.clone())
    }

    // -----------------------------------------------------------------------
    // Summit resources
    // -----------------------------------------------------------------------

    async fn list_summit_resources(&self) -> StoreResult<Vec<SummitResource>> {
        Ok(self
            .tables
            .read()
            .await
            .summit_resources
            .values()
            .cloned()
            .collect())
    }

    async fn find_summit_resource(&self, id: DbId) -> StoreResult<Option<SummitResource>> {
        Ok(self.tables.read().await.summit_resources.get(&id).cloned())
    }

    async fn create_summit_resource(
        &self,
        dto: &CreateSummitResource,
    ) -> StoreResult<SummitResource> {
        let mut t = self.tables.write().await;
        let resource = SummitResource {
            id: t.next_id(),
            title: dto.title.clone(),
            url: dto.url.clone(),
            description: dto.description.clone(),
            created_at: Utc::now(),
        };
        t.summit_resources.insert(resource.id, resource.clone());
        Ok(resource)
    }

    async fn update_summit_resource(
        &self,
        id: DbId,
        dto: &UpdateSummitResource,
    ) -> StoreResult<Option<SummitResource>> {
        let mut t = self.tables.write().await;
        Ok(t.summit_resources.get_mut(&id).map(|r| {
            if let Some(title) = &dto.title {
                r.title = title.clone();
            }
            if let Some(url) = &dto.url {
                r.url = url.clone();
            }
            if let Some(description) = &dto.description {
                r.description = Some(description.clone());
            }
            r.clone()
        }))
    }

    async fn delete_summit_resource(&self, id: DbId) -> StoreResult<bool> {
        Ok(self
            .tables
            .write()
            .await
            .summit_resources
            .remove(&id)
            .is_some())
    }
}
