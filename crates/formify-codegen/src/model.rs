//! Intermediate form model shared by the generators.
//!
//! Field specs are turned into typed bindings (state key, control shape,
//! display label) and a validation plan before any code is written.

use formify_core::{FieldKind, FieldSpec};
use indexmap::IndexMap;
use serde::Serialize;

use crate::validation::ValidationPlan;

/// Stored value of a checked checkbox.
///
/// Checkbox state is kept as a string; anything other than this value,
/// including the empty string, reads as unchecked.
pub const CHECKED_VALUE: &str = "true";

/// Heading used when the form has no fields.
pub const DEFAULT_HEADING: &str = "Form";

/// The control shape a field renders as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    /// Multi-line text area.
    TextArea,
    /// Boolean toggle stored as a string.
    Checkbox,
    /// Single-line input whose `type` attribute is the kind tag verbatim.
    Input { input_type: String },
}

impl Control {
    pub fn for_kind(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Textarea => Self::TextArea,
            FieldKind::Checkbox => Self::Checkbox,
            other => Self::Input {
                input_type: other.as_str().to_string(),
            },
        }
    }
}

/// A field bound to its generated state slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldBinding {
    /// Machine name: state key, `id` and `name` attribute.
    pub key: String,
    /// Label as written in the description.
    pub label: String,
    /// Label shown next to the control, first letter uppercased.
    pub display_label: String,
    pub required: bool,
    pub control: Control,
}

impl FieldBinding {
    pub fn new(field: &FieldSpec) -> Self {
        Self {
            key: field.machine_name(),
            label: field.label().to_string(),
            display_label: capitalize_first(field.label()),
            required: field.is_required(),
            control: Control::for_kind(field.kind()),
        }
    }
}

/// Two fields that share a machine name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCollision {
    pub key: String,
    pub first: String,
    pub second: String,
}

/// Everything the component generator needs, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormModel {
    pub heading: String,
    pub fields: Vec<FieldBinding>,
    pub validation: ValidationPlan,
}

impl FormModel {
    pub fn from_fields(fields: &[FieldSpec]) -> Self {
        Self {
            heading: heading_for(fields),
            fields: fields.iter().map(FieldBinding::new).collect(),
            validation: ValidationPlan::synthesize(fields),
        }
    }

    /// State keys in field order. Colliding keys appear once per field.
    pub fn state_keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    /// The first pair of fields whose labels lowercase to the same key.
    pub fn first_collision(&self) -> Option<KeyCollision> {
        let mut seen: IndexMap<&str, &str> = IndexMap::new();
        for field in &self.fields {
            if let Some(first) = seen.get(field.key.as_str()) {
                return Some(KeyCollision {
                    key: field.key.clone(),
                    first: first.to_string(),
                    second: field.label.clone(),
                });
            }
            seen.insert(&field.key, &field.label);
        }
        None
    }
}

/// Heading for a form: the first label split at capital letters.
pub fn heading_for(fields: &[FieldSpec]) -> String {
    fields
        .first()
        .map(|f| split_capitalized(f.label()))
        .unwrap_or_else(|| DEFAULT_HEADING.to_string())
}

/// Insert a space before every ASCII capital letter except a leading one.
///
/// `DateOfBirth` becomes `Date Of Birth`. Existing spaces are kept, so
/// `Full Name` becomes `Full  Name`.
pub fn split_capitalized(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    for (i, c) in label.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn capitalize_first(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
