//! Default form and board for a fresh installation.

use crate::error::StoreResult;
use crate::models::form_field::{CreateFormField, CreateFormFieldOption};
use crate::models::kanban_category::CreateKanbanCategory;

use super::Store;

/// Default kanban columns: key, title, color.
pub const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("ai_idea", "AI Idea", "#3b82f6"),
    ("ai_story", "AI Story", "#10b981"),
];

struct SeedField {
    name: &'static str,
    label: &'static str,
    field_type: &'static str,
    required: bool,
    placeholder: Option<&'static str>,
}

const DEFAULT_FIELDS: &[SeedField] = &[
    SeedField {
        name: "submitter_name",
        label: "Your name",
        field_type: "text",
        required: true,
        placeholder: Some("Jane Doe"),
    },
    SeedField {
        name: "idea_title",
        label: "Idea title",
        field_type: "text",
        required: true,
        placeholder: None,
    },
    SeedField {
        name: "idea_description",
        label: "Description",
        field_type: "textarea",
        required: true,
        placeholder: Some("What problem does it solve?"),
    },
    SeedField {
        name: "component",
        label: "Component",
        field_type: "text",
        required: false,
        placeholder: None,
    },
    SeedField {
        name: "tag",
        label: "Tag",
        field_type: "text",
        required: false,
        placeholder: None,
    },
    SeedField {
        name: "type",
        label: "Type",
        field_type: "list",
        required: true,
        placeholder: None,
    },
];

/// What [`seed_defaults`] created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub fields: usize,
    pub options: usize,
    pub categories: usize,
}

/// Create the default form and categories.
///
/// Each part is seeded only when its table is empty, so restarting against
/// an existing database changes nothing.
pub async fn seed_defaults(store: &dyn Store) -> StoreResult<SeedReport> {
    let mut report = SeedReport::default();

    if store.list_kanban_categories().await?.is_empty() {
        for (order, (key, title, color)) in DEFAULT_CATEGORIES.iter().enumerate() {
            store
                .create_kanban_category(&CreateKanbanCategory {
                    key: key.to_string(),
                    title: title.to_string(),
                    color: Some(color.to_string()),
                    display_order: Some(order as i32 + 1),
                    is_active: Some(true),
                })
                .await?;
            report.categories += 1;
        }
    }

    if store.list_form_fields().await?.is_empty() {
        for (order, seed) in DEFAULT_FIELDS.iter().enumerate() {
            let field = store
                .create_form_field(&CreateFormField {
                    name: seed.name.to_string(),
                    label: seed.label.to_string(),
                    field_type: seed.field_type.to_string(),
                    required: seed.required,
                    placeholder: seed.placeholder.map(str::to_string),
                    help_text: None,
                    display_order: Some(order as i32 + 1),
                    is_active: Some(true),
                    allow_user_additions: Some(false),
                })
                .await?;
            report.fields += 1;

            if seed.field_type == "list" {
                for (opt_order, (key, title, _)) in DEFAULT_CATEGORIES.iter().enumerate() {
                    store
                        .create_form_field_option(&CreateFormFieldOption {
                            field_id: field.id,
                            value: key.to_string(),
                            label: title.to_string(),
                            display_order: Some(opt_order as i32 + 1),
                            is_active: Some(true),
                        })
                        .await?;
                    report.options += 1;
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeds_once() {
        let store = MemoryStore::new();
        let first = seed_defaults(&store).await.unwrap();
        assert_eq!(
            first,
            SeedReport {
                fields: 6,
                options: 2,
                categories: 2
            }
        );

        let second = seed_defaults(&store).await.unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(store.list_form_fields().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn type_field_lists_the_categories() {
        let store = MemoryStore::new();
        seed_defaults(&store).await.unwrap();
        let fields = store.list_form_fields().await.unwrap();
        let type_field = fields.iter().find(|f| f.name == "type").unwrap();
        let options = store
            .list_form_field_options(Some(type_field.id))
            .await
            .unwrap();
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["ai_idea", "ai_story"]);
    }
}
