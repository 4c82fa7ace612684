//! Field descriptors and output formats.

use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownFormatError;

/// A field type tag.
///
/// The vocabulary is open: tags outside the known set are preserved verbatim
/// in [`FieldKind::Other`] and rendered as a generic single-line input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Textarea,
    Checkbox,
    Tel,
    Url,
    Date,
    File,
    Other(String),
}

impl FieldKind {
    /// The tag as written in a field description.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Date => "date",
            Self::File => "file",
            Self::Other(tag) => tag,
        }
    }

    /// Tags offered by the field-row type selector, in display order.
    pub fn known() -> &'static [FieldKind] {
        &[
            Self::Text,
            Self::Email,
            Self::Password,
            Self::Number,
            Self::Textarea,
            Self::Checkbox,
            Self::Tel,
            Self::Url,
            Self::Date,
            Self::File,
        ]
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "email" => Self::Email,
            "password" => Self::Password,
            "number" => Self::Number,
            "textarea" => Self::Textarea,
            "checkbox" => Self::Checkbox,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "date" => Self::Date,
            "file" => Self::File,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        FieldKind::from(tag.as_str())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One form field: label, type tag and whether a value is mandatory.
///
/// A `FieldSpec` is immutable once built. The parser guarantees a non-empty,
/// trimmed label and type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSpec {
    label: String,
    kind: FieldKind,
    required: bool,
}

impl FieldSpec {
    pub fn new(label: impl Into<String>, kind: impl Into<FieldKind>, required: bool) -> Self {
        Self {
            label: label.into(),
            kind: kind.into(),
            required,
        }
    }

    /// Shorthand for a mandatory field.
    pub fn required(label: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
        Self::new(label, kind, true)
    }

    /// Shorthand for an optional field.
    pub fn optional(label: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
        Self::new(label, kind, false)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The generated identifier and state key: the label, lowercased.
    ///
    /// Two labels that differ only in case share a machine name.
    pub fn machine_name(&self) -> String {
        self.label.to_lowercase()
    }

    /// Render back into the field-description wire format.
    pub fn to_line(&self) -> String {
        let keyword = if self.required { "required" } else { "optional" };
        format!("{} ({}, {})", self.label, self.kind, keyword)
    }
}

/// Target of code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    /// Plain HTML form, validation left to browser attributes.
    Html,
    /// React/TypeScript component with synthesized validation.
    #[default]
    React,
}

impl OutputFormat {
    /// Editor language identifier for a document holding the output.
    pub fn language_id(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::React => "typescript",
        }
    }

    /// File extension for the generated source.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::React => "tsx",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "react" | "jsx" | "tsx" => Ok(Self::React),
            _ => Err(UnknownFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::React => write!(f, "react"),
        }
    }
}
