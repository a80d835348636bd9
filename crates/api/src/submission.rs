//! Submission pipeline: active form descriptors, validation, then the idea
//! and its dynamic values.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};
use summit_core::error::CoreError;
use summit_core::form::{
    partition, FieldDescriptor, FieldKind, FieldViolation, FormSchema, OptionDescriptor,
};
use summit_core::types::DbId;
use summit_db::models::form_field::{CreateFormFieldOption, FormFieldOption};
use summit_db::models::idea::{CreateIdea, Idea};
use summit_db::models::idea_dynamic_field::{CreateIdeaDynamicField, IdeaDynamicField};
use summit_db::store::Store;
use summit_db::StoreError;

use crate::error::{AppError, AppResult};

/// Everything a successful submission created.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub idea: Idea,
    pub dynamic_fields: Vec<IdeaDynamicField>,
    pub new_options: Vec<FormFieldOption>,
}

/// Result of a dry run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub violations: Vec<FieldViolation>,
}

/// Build the schema from the active fields and their active options.
///
/// A stored field with an unknown type fails the load.
pub async fn load_form_schema(store: &dyn Store) -> AppResult<FormSchema> {
    let fields = store.list_form_fields().await?;

    let mut options: HashMap<DbId, Vec<OptionDescriptor>> = HashMap::new();
    for option in store.list_form_field_options(None).await? {
        if option.is_active {
            options
                .entry(option.field_id)
                .or_default()
                .push(OptionDescriptor {
                    value: option.value,
                    label: option.label,
                });
        }
    }

    let mut descriptors = Vec::new();
    for field in fields.into_iter().filter(|f| f.is_active) {
        let kind = FieldKind::from_str(&field.field_type)?;
        descriptors.push(FieldDescriptor {
            id: field.id,
            name: field.name,
            label: field.label,
            kind,
            required: field.required,
            placeholder: field.placeholder,
            help_text: field.help_text,
            display_order: field.display_order,
            allow_user_additions: field.allow_user_additions,
            options: if kind == FieldKind::List {
                options.remove(&field.id).unwrap_or_default()
            } else {
                Vec::new()
            },
        });
    }

    Ok(FormSchema::new(descriptors)?)
}

/// Validate a payload without writing anything.
pub async fn dry_run(store: &dyn Store, payload: &Map<String, Value>) -> AppResult<ValidationReport> {
    let schema = load_form_schema(store).await?;
    let violations = match schema.validate(payload) {
        Ok(_) => Vec::new(),
        Err(violations) => violations,
    };
    Ok(ValidationReport {
        valid: violations.is_empty(),
        violations,
    })
}

/// Validate a payload and persist it as an idea.
///
/// Nothing is written when validation fails. Writes after the idea itself
/// are not rolled back: a failure there leaves the idea without the
/// remaining values and is reported as an internal error.
pub async fn submit(store: &dyn Store, payload: &Map<String, Value>) -> AppResult<SubmissionOutcome> {
    let schema = load_form_schema(store).await?;
    let validated = schema
        .validate(payload)
        .map_err(CoreError::InvalidFields)?;
    let parts = partition(validated);

    let category = match parts.core.category {
        Some(category) => category,
        None => default_category(store).await?,
    };

    let idea = store
        .create_idea(&CreateIdea {
            name: parts.core.submitter_name.unwrap_or_default(),
            title: parts.core.title.unwrap_or_default(),
            description: parts.core.description.unwrap_or_default(),
            component: parts.core.component,
            tag: parts.core.tag,
            idea_type: category,
        })
        .await?;

    let mut dynamic_fields = Vec::with_capacity(parts.dynamic.len());
    for value in parts.dynamic {
        let row = store
            .create_idea_dynamic_field(&CreateIdeaDynamicField {
                idea_id: idea.id,
                field_id: value.field_id,
                value: value.value,
            })
            .await
            .map_err(|e| partial_failure(idea.id, &value.name, e))?;
        dynamic_fields.push(row);
    }

    let mut new_options = Vec::new();
    for option in parts.new_options {
        let created = store
            .create_form_field_option(&CreateFormFieldOption {
                field_id: option.field_id,
                value: option.value.clone(),
                label: option.label,
                display_order: None,
                is_active: Some(true),
            })
            .await;
        match created {
            Ok(row) => new_options.push(row),
            // Added by a concurrent submission.
            Err(StoreError::Conflict(_)) => {
                tracing::debug!(field_id = option.field_id, value = %option.value, "Option already exists");
            }
            Err(e) => return Err(partial_failure(idea.id, &option.value, e)),
        }
    }

    tracing::info!(
        idea_id = idea.id,
        category = %idea.idea_type,
        dynamic_fields = dynamic_fields.len(),
        new_options = new_options.len(),
        "Idea submitted",
    );

    Ok(SubmissionOutcome {
        idea,
        dynamic_fields,
        new_options,
    })
}

/// The first active category, or an empty key when there is none.
async fn default_category(store: &dyn Store) -> AppResult<String> {
    Ok(store
        .list_kanban_categories()
        .await?
        .into_iter()
        .find(|c| c.is_active)
        .map(|c| c.key)
        .unwrap_or_default())
}

fn partial_failure(idea_id: DbId, what: &str, err: StoreError) -> AppError {
    tracing::error!(idea_id, field = what, error = %err, "Submission partially stored");
    AppError::InternalError(format!("Idea {idea_id} was created but '{what}' could not be stored"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use summit_db::models::form_field::CreateFormField;
    use summit_db::store::MemoryStore;

    async fn add_field(store: &MemoryStore, name: &str, field_type: &str, required: bool) -> DbId {
        store
            .create_form_field(&CreateFormField {
                name: name.into(),
                label: name.into(),
                field_type: field_type.into(),
                required,
                placeholder: None,
                help_text: None,
                display_order: None,
                is_active: None,
                allow_user_additions: Some(true),
            })
            .await
            .unwrap()
            .id
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn required_empty_field_creates_nothing() {
        let store = MemoryStore::new();
        add_field(&store, "submitter_name", "text", true).await;
        add_field(&store, "idea_title", "text", true).await;

        let payload = object(json!({"submitter_name": "", "idea_title": "Foo"}));
        let err = submit(&store, &payload).await.unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::InvalidFields(ref v)) if v[0].field == "submitter_name"
        );
        assert!(store.list_ideas().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn well_formed_submission_creates_idea_and_values() {
        let store = MemoryStore::new();
        add_field(&store, "submitter_name", "text", true).await;
        add_field(&store, "idea_title", "text", true).await;
        let team = add_field(&store, "team", "text", false).await;
        add_field(&store, "budget", "number", false).await;

        let payload = object(json!({
            "submitter_name": "Dana",
            "idea_title": "Foo",
            "team": "Platform",
        }));
        let outcome = submit(&store, &payload).await.unwrap();

        assert_eq!(outcome.idea.name, "Dana");
        assert_eq!(outcome.idea.title, "Foo");
        assert_eq!(outcome.dynamic_fields.len(), 1);
        assert_eq!(outcome.dynamic_fields[0].field_id, team);
        assert_eq!(store.list_ideas().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn user_additions_become_options() {
        let store = MemoryStore::new();
        add_field(&store, "idea_title", "text", true).await;
        let flavor = add_field(&store, "flavor", "list", false).await;

        let payload = object(json!({"idea_title": "Ice cream", "flavor": "Salted Caramel"}));
        let outcome = submit(&store, &payload).await.unwrap();

        assert_eq!(outcome.new_options.len(), 1);
        assert_eq!(outcome.new_options[0].value, "salted_caramel");
        let options = store.list_form_field_options(Some(flavor)).await.unwrap();
        assert_eq!(options.len(), 1);
    }

    #[tokio::test]
    async fn dry_run_reports_without_writing() {
        let store = MemoryStore::new();
        add_field(&store, "idea_title", "text", true).await;

        let report = dry_run(&store, &object(json!({"nope": 1}))).await.unwrap();
        assert!(!report.valid);
        assert_eq!(report.violations.len(), 2);
        assert!(store.list_ideas().await.unwrap().is_empty());
    }
}
