//! Store contract tests against the in-memory backend:
//! - cascade deletes (idea -> dynamic fields and votes, field -> options)
//! - uniqueness rules (active field names, option values, category keys)
//! - ordering contracts
//! - vote upsert and totals

use assert_matches::assert_matches;
use summit_db::models::form_field::{CreateFormField, CreateFormFieldOption, UpdateFormField};
use summit_db::models::idea::CreateIdea;
use summit_db::models::idea_dynamic_field::CreateIdeaDynamicField;
use summit_db::models::kanban_category::{CreateKanbanCategory, UpdateKanbanCategory};
use summit_db::models::summit_resource::{CreateSummitResource, UpdateSummitResource};
use summit_db::store::{MemoryStore, Store};
use summit_db::StoreError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_idea(title: &str, category: &str) -> CreateIdea {
    CreateIdea {
        name: "Ada".to_string(),
        title: title.to_string(),
        description: String::new(),
        component: None,
        tag: None,
        idea_type: category.to_string(),
    }
}

fn new_field(name: &str, field_type: &str) -> CreateFormField {
    CreateFormField {
        name: name.to_string(),
        label: name.to_string(),
        field_type: field_type.to_string(),
        required: false,
        placeholder: None,
        help_text: None,
        display_order: None,
        is_active: None,
        allow_user_additions: None,
    }
}

fn new_option(field_id: i64, value: &str) -> CreateFormFieldOption {
    CreateFormFieldOption {
        field_id,
        value: value.to_string(),
        label: value.to_uppercase(),
        display_order: None,
        is_active: None,
    }
}

fn new_category(key: &str) -> CreateKanbanCategory {
    CreateKanbanCategory {
        key: key.to_string(),
        title: key.to_string(),
        color: None,
        display_order: None,
        is_active: None,
    }
}

// ---------------------------------------------------------------------------
// Ideas
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ideas_list_newest_first() {
    let store = MemoryStore::new();
    let first = store.create_idea(&new_idea("First", "ai_idea")).await.unwrap();
    let second = store.create_idea(&new_idea("Second", "ai_idea")).await.unwrap();

    let ids: Vec<_> = store.list_ideas().await.unwrap().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn deleting_idea_cascades_to_values_and_votes() {
    let store = MemoryStore::new();
    let idea = store.create_idea(&new_idea("Drones", "ai_idea")).await.unwrap();
    let other = store.create_idea(&new_idea("Bots", "ai_idea")).await.unwrap();
    store
        .create_idea_dynamic_field(&CreateIdeaDynamicField {
            idea_id: idea.id,
            field_id: 99,
            value: "x".to_string(),
        })
        .await
        .unwrap();
    store.upsert_vote(idea.id, "s1", 2).await.unwrap();
    store.upsert_vote(other.id, "s1", 1).await.unwrap();

    assert!(store.delete_idea(idea.id).await.unwrap());
    assert!(!store.delete_idea(idea.id).await.unwrap());

    assert!(store
        .list_idea_dynamic_fields(Some(idea.id))
        .await
        .unwrap()
        .is_empty());
    assert_eq!(store.session_vote_total("s1").await.unwrap(), 1);
}

#[tokio::test]
async fn update_category_of_missing_idea_returns_none() {
    let store = MemoryStore::new();
    assert!(store.update_idea_category(42, "ai_story").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Form fields and options
// ---------------------------------------------------------------------------

#[tokio::test]
async fn active_field_names_are_unique() {
    let store = MemoryStore::new();
    let field = store.create_form_field(&new_field("team", "text")).await.unwrap();

    let dup = store.create_form_field(&new_field("team", "text")).await;
    assert_matches!(dup, Err(StoreError::Conflict(_)));

    // Deactivating frees the name.
    store
        .update_form_field(
            field.id,
            &UpdateFormField {
                is_active: Some(false),
                ..UpdateFormField::default()
            },
        )
        .await
        .unwrap();
    assert!(store.create_form_field(&new_field("team", "text")).await.is_ok());
}

#[tokio::test]
async fn fields_are_ordered_by_display_order() {
    let store = MemoryStore::new();
    let a = store.create_form_field(&new_field("a", "text")).await.unwrap();
    let b = store.create_form_field(&new_field("b", "text")).await.unwrap();
    assert_eq!(b.display_order, a.display_order + 1);

    store
        .update_form_field(
            a.id,
            &UpdateFormField {
                display_order: Some(10),
                ..UpdateFormField::default()
            },
        )
        .await
        .unwrap();
    let names: Vec<_> = store
        .list_form_fields()
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[tokio::test]
async fn option_values_are_unique_per_field() {
    let store = MemoryStore::new();
    let colors = store.create_form_field(&new_field("color", "list")).await.unwrap();
    let sizes = store.create_form_field(&new_field("size", "list")).await.unwrap();

    store.create_form_field_option(&new_option(colors.id, "red")).await.unwrap();
    assert_matches!(
        store.create_form_field_option(&new_option(colors.id, "red")).await,
        Err(StoreError::Conflict(_))
    );
    assert!(store.create_form_field_option(&new_option(sizes.id, "red")).await.is_ok());
    assert_matches!(
        store.create_form_field_option(&new_option(12345, "red")).await,
        Err(StoreError::Conflict(_))
    );
}

#[tokio::test]
async fn deleting_field_removes_its_options_but_keeps_values() {
    let store = MemoryStore::new();
    let field = store.create_form_field(&new_field("color", "list")).await.unwrap();
    store.create_form_field_option(&new_option(field.id, "red")).await.unwrap();
    let idea = store.create_idea(&new_idea("Paint", "")).await.unwrap();
    store
        .create_idea_dynamic_field(&CreateIdeaDynamicField {
            idea_id: idea.id,
            field_id: field.id,
            value: "red".to_string(),
        })
        .await
        .unwrap();

    assert!(store.delete_form_field(field.id).await.unwrap());
    assert!(store
        .list_form_field_options(Some(field.id))
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        store.list_idea_dynamic_fields(Some(idea.id)).await.unwrap().len(),
        1
    );
}

// ---------------------------------------------------------------------------
// Kanban categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn category_keys_are_unique_and_color_defaults() {
    let store = MemoryStore::new();
    let cat = store.create_kanban_category(&new_category("ai_idea")).await.unwrap();
    assert_eq!(cat.color, summit_core::kanban::DEFAULT_CATEGORY_COLOR);
    assert!(cat.is_active);
    assert_matches!(
        store.create_kanban_category(&new_category("ai_idea")).await,
        Err(StoreError::Conflict(_))
    );

    let updated = store
        .update_kanban_category(
            cat.id,
            &UpdateKanbanCategory {
                title: Some("Ideas".to_string()),
                ..UpdateKanbanCategory::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.key, "ai_idea");
    assert_eq!(updated.title, "Ideas");
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upsert_overwrites_count_and_totals_aggregate() {
    let store = MemoryStore::new();
    let a = store.create_idea(&new_idea("A", "")).await.unwrap();
    let b = store.create_idea(&new_idea("B", "")).await.unwrap();

    let first = store.upsert_vote(a.id, "s1", 1).await.unwrap();
    let again = store.upsert_vote(a.id, "s1", 3).await.unwrap();
    assert_eq!(first.id, again.id);
    assert_eq!(again.vote_count, 3);

    store.upsert_vote(a.id, "s2", 1).await.unwrap();
    store.upsert_vote(b.id, "s2", 2).await.unwrap();

    assert_eq!(store.session_vote_total("s1").await.unwrap(), 3);
    assert_eq!(store.session_vote_total("nobody").await.unwrap(), 0);
    assert_eq!(store.list_votes(Some("s2")).await.unwrap().len(), 2);

    let totals = store.vote_totals().await.unwrap();
    let a_total = totals.iter().find(|t| t.idea_id == a.id).unwrap();
    assert_eq!(a_total.total_votes, 4);

    assert!(store.delete_vote(a.id, "s1").await.unwrap());
    assert!(store.find_vote(a.id, "s1").await.unwrap().is_none());
}

#[tokio::test]
async fn vote_for_missing_idea_conflicts() {
    let store = MemoryStore::new();
    assert_matches!(
        store.upsert_vote(404, "s1", 1).await,
        Err(StoreError::Conflict(_))
    );
}

// ---------------------------------------------------------------------------
// Settings and resources
// ---------------------------------------------------------------------------

#[tokio::test]
async fn settings_documents_round_trip() {
    let store = MemoryStore::new();
    assert!(store.get_setting("voting").await.unwrap().is_none());
    let doc = serde_json::json!({"votingEnabled": false});
    store.put_setting("voting", &doc).await.unwrap();
    assert_eq!(store.get_setting("voting").await.unwrap(), Some(doc));
}

#[tokio::test]
async fn resource_partial_update_keeps_other_fields() {
    let store = MemoryStore::new();
    let res = store
        .create_summit_resource(&CreateSummitResource {
            title: "Agenda".to_string(),
            url: "https://example.com/agenda".to_string(),
            description: Some("Day one".to_string()),
        })
        .await
        .unwrap();

    let updated = store
        .update_summit_resource(
            res.id,
            &UpdateSummitResource {
                title: Some("Full agenda".to_string()),
                ..UpdateSummitResource::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Full agenda");
    assert_eq!(updated.url, res.url);
    assert_eq!(updated.description.as_deref(), Some("Day one"));

    assert!(store.delete_summit_resource(res.id).await.unwrap());
    assert!(store.find_summit_resource(res.id).await.unwrap().is_none());
}
