//! Dynamic submission form engine.
//!
//! Administrators describe the submission form as a list of field
//! descriptors. At submission time the engine validates an arbitrary JSON
//! payload against the active descriptors and splits the result into the
//! fixed idea attributes and free-form dynamic attributes.

pub mod field;
pub mod partition;
pub mod validate;

use serde::{Deserialize, Serialize};

pub use field::{FieldDescriptor, FieldKind, FieldValue, OptionDescriptor};
pub use partition::{partition, CoreAttributes, CoreRole, DynamicValue, NewOption, PartitionedSubmission};
pub use validate::{FormSchema, ValidatedField, ValidatedSubmission};

/// A single field-level violation reported back to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
