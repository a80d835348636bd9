//! Payload validation against the active form.

use serde_json::{Map, Value};

use super::field::{FieldDescriptor, FieldValue};
use super::FieldViolation;
use crate::error::CoreError;
use crate::types::DbId;

/// The active submission form: descriptors in display order.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldDescriptor>,
}

/// One field that passed validation and carries a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedField {
    pub field_id: DbId,
    pub name: String,
    pub value: FieldValue,
}

/// Every non-empty field of a payload, in form order.
#[derive(Debug, Clone, Default)]
pub struct ValidatedSubmission {
    pub fields: Vec<ValidatedField>,
}

impl FormSchema {
    /// Build a schema from active descriptors.
    ///
    /// Descriptors are sorted by `display_order` (then id). Two active
    /// fields sharing a name make the form ambiguous and fail the load.
    pub fn new(mut fields: Vec<FieldDescriptor>) -> Result<Self, CoreError> {
        fields.sort_by_key(|f| (f.display_order, f.id));

        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|other| other.name == field.name) {
                return Err(CoreError::Validation(format!(
                    "Form has more than one active field named '{}'",
                    field.name
                )));
            }
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a submitted payload.
    ///
    /// All violations are collected. Keys that are not active fields are
    /// violations too. Empty optional fields are dropped from the result.
    pub fn validate(
        &self,
        payload: &Map<String, Value>,
    ) -> Result<ValidatedSubmission, Vec<FieldViolation>> {
        let mut violations = Vec::new();
        let mut fields = Vec::new();

        for key in payload.keys() {
            if self.field(key).is_none() {
                violations.push(FieldViolation::new(key, "is not an active form field"));
            }
        }

        for field in &self.fields {
            let raw = match payload.get(&field.name) {
                Some(v) if !is_empty(v) => v,
                _ => {
                    if field.required {
                        violations.push(FieldViolation::new(
                            &field.name,
                            format!("{} is required", field.label),
                        ));
                    }
                    continue;
                }
            };

            match (field.kind.check())(field, raw) {
                Ok(value) => fields.push(ValidatedField {
                    field_id: field.id,
                    name: field.name.clone(),
                    value,
                }),
                Err(message) => violations.push(FieldViolation::new(&field.name, message)),
            }
        }

        if violations.is_empty() {
            Ok(ValidatedSubmission { fields })
        } else {
            Err(violations)
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
