//! Split a validated submission into idea attributes and dynamic values.

use super::field::FieldValue;
use super::validate::ValidatedSubmission;
use crate::types::DbId;

/// The fixed idea attributes a form field can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreRole {
    SubmitterName,
    Title,
    Description,
    Component,
    Tag,
    Category,
}

impl CoreRole {
    /// Map a form field name onto the idea attribute it fills, if any.
    pub fn for_field_name(name: &str) -> Option<Self> {
        match name {
            "submitter_name" | "name" => Some(Self::SubmitterName),
            "idea_title" | "title" => Some(Self::Title),
            "idea_description" | "description" => Some(Self::Description),
            "component" => Some(Self::Component),
            "tag" => Some(Self::Tag),
            "type" | "category" | "idea_type" => Some(Self::Category),
            _ => None,
        }
    }
}

/// Idea attributes collected from the core-role fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreAttributes {
    pub submitter_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub component: Option<String>,
    pub tag: Option<String>,
    pub category: Option<String>,
}

impl CoreAttributes {
    fn slot(&mut self, role: CoreRole) -> &mut Option<String> {
        match role {
            CoreRole::SubmitterName => &mut self.submitter_name,
            CoreRole::Title => &mut self.title,
            CoreRole::Description => &mut self.description,
            CoreRole::Component => &mut self.component,
            CoreRole::Tag => &mut self.tag,
            CoreRole::Category => &mut self.category,
        }
    }
}

/// A non-core field value, stored as a key/value row linked to the idea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicValue {
    pub field_id: DbId,
    pub name: String,
    pub value: String,
}

/// A list value introduced by the submitter that should become an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOption {
    pub field_id: DbId,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct PartitionedSubmission {
    pub core: CoreAttributes,
    pub dynamic: Vec<DynamicValue>,
    pub new_options: Vec<NewOption>,
}

/// Partition validated fields by role.
///
/// When two fields map to the same role, the first in form order fills it
/// and the other is kept as a dynamic value.
pub fn partition(submission: ValidatedSubmission) -> PartitionedSubmission {
    let mut out = PartitionedSubmission::default();

    for field in submission.fields {
        if let FieldValue::Choice {
            value,
            new_label: Some(label),
        } = &field.value
        {
            out.new_options.push(NewOption {
                field_id: field.field_id,
                value: value.clone(),
                label: label.clone(),
            });
        }

        let text = field.value.to_text();
        if text.is_empty() {
            continue;
        }

        if let Some(role) = CoreRole::for_field_name(&field.name) {
            let slot = out.core.slot(role);
            if slot.is_none() {
                *slot = Some(text);
                continue;
            }
        }

        out.dynamic.push(DynamicValue {
            field_id: field.field_id,
            name: field.name,
            value: text,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate::ValidatedField;

    fn text(id: DbId, name: &str, value: &str) -> ValidatedField {
        ValidatedField {
            field_id: id,
            name: name.to_string(),
            value: FieldValue::Text(value.to_string()),
        }
    }

    #[test]
    fn core_roles_and_dynamic_values_are_split() {
        let submission = ValidatedSubmission {
            fields: vec![
                text(1, "submitter_name", "Dana"),
                text(2, "idea_title", "Foo"),
                text(3, "department", "Research"),
                ValidatedField {
                    field_id: 4,
                    name: "team_size".to_string(),
                    value: FieldValue::Number(3.0),
                },
            ],
        };
        let out = partition(submission);
        assert_eq!(out.core.submitter_name.as_deref(), Some("Dana"));
        assert_eq!(out.core.title.as_deref(), Some("Foo"));
        assert_eq!(out.core.category, None);
        assert_eq!(
            out.dynamic,
            vec![
                DynamicValue {
                    field_id: 3,
                    name: "department".to_string(),
                    value: "Research".to_string(),
                },
                DynamicValue {
                    field_id: 4,
                    name: "team_size".to_string(),
                    value: "3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn second_field_for_a_role_stays_dynamic() {
        let out = partition(ValidatedSubmission {
            fields: vec![text(1, "title", "First"), text(2, "idea_title", "Second")],
        });
        assert_eq!(out.core.title.as_deref(), Some("First"));
        assert_eq!(out.dynamic.len(), 1);
        assert_eq!(out.dynamic[0].name, "idea_title");
    }

    #[test]
    fn new_list_values_are_reported() {
        let out = partition(ValidatedSubmission {
            fields: vec![ValidatedField {
                field_id: 9,
                name: "type".to_string(),
                value: FieldValue::Choice {
                    value: "edge".to_string(),
                    new_label: Some("Edge".to_string()),
                },
            }],
        });
        assert_eq!(out.core.category.as_deref(), Some("edge"));
        assert_eq!(
            out.new_options,
            vec![NewOption {
                field_id: 9,
                value: "edge".to_string(),
                label: "Edge".to_string(),
            }]
        );
    }
}
