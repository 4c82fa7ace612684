//! Side-panel state: template gallery, editable field rows, live preview.
//!
//! This is presentation state only. It turns rows into the field-description
//! text and hands that text to the core, exactly as a user typing the
//! description by hand would.

use formify_codegen::{generator_for, CodegenError, ReactOptions};
use formify_core::{FieldKind, FormTemplate, OutputFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Key of the template selected when the panel opens.
pub const DEFAULT_TEMPLATE: &str = "blank";

/// Errors surfaced to the panel user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("Please add at least one field to generate the form.")]
    NoFields,

    #[error("No field row at index {0}")]
    RowOutOfRange(usize),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// Tags offered by a row's type selector, in display order.
pub fn type_options() -> Vec<&'static str> {
    FieldKind::known().iter().map(FieldKind::as_str).collect()
}

/// One editable field row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRow {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
}

impl Default for FieldRow {
    fn default() -> Self {
        Self {
            label: String::new(),
            kind: FieldKind::Text.as_str().to_string(),
            required: true,
        }
    }
}

impl FieldRow {
    /// The row in field-description format.
    pub fn to_line(&self) -> String {
        let keyword = if self.required { "required" } else { "optional" };
        format!("{} ({}, {})", self.label, self.kind, keyword)
    }
}

/// State behind the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    selected_template: String,
    rows: Vec<FieldRow>,
    preview_visible: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            selected_template: DEFAULT_TEMPLATE.to_string(),
            rows: Vec::new(),
            preview_visible: false,
        }
    }

    pub fn selected_template(&self) -> &str {
        &self.selected_template
    }

    pub fn rows(&self) -> &[FieldRow] {
        &self.rows
    }

    /// True when the empty-state placeholder should be shown.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace the rows with a template's fields.
    ///
    /// Returns `false` and leaves the state untouched for unknown keys.
    pub fn select_template(&mut self, key: &str) -> bool {
        let Some(template) = FormTemplate::find(key) else {
            return false;
        };
        self.selected_template = template.key.to_string();
        self.rows = template
            .fields
            .iter()
            .map(|f| FieldRow {
                label: f.label.to_string(),
                kind: f.kind.to_string(),
                required: f.required,
            })
            .collect();
        debug!(template = key, rows = self.rows.len(), "template selected");
        true
    }

    /// Append a blank row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(FieldRow::default());
        self.rows.len() - 1
    }

    pub fn remove_row(&mut self, index: usize) -> Result<FieldRow, PanelError> {
        if index >= self.rows.len() {
            return Err(PanelError::RowOutOfRange(index));
        }
        Ok(self.rows.remove(index))
    }

    pub fn update_row(&mut self, index: usize, row: FieldRow) -> Result<(), PanelError> {
        let slot = self
            .rows
            .get_mut(index)
            .ok_or(PanelError::RowOutOfRange(index))?;
        *slot = row;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Flip preview visibility and return the new state.
    pub fn toggle_preview(&mut self) -> bool {
        self.preview_visible = !self.preview_visible;
        self.preview_visible
    }

    /// The description text built from the current rows.
    pub fn description(&self) -> String {
        self.rows
            .iter()
            .map(FieldRow::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Preview text, when the preview is shown.
    pub fn preview(&self) -> Option<String> {
        self.preview_visible.then(|| self.description())
    }

    /// Generate code from the current rows.
    pub fn generate(&self, format: OutputFormat, options: ReactOptions) -> Result<String, PanelError> {
        if self.rows.is_empty() {
            return Err(PanelError::NoFields);
        }
        let fields = formify_parser::parse(&self.description()).map_err(CodegenError::from)?;
        Ok(generator_for(format, options).generate(&fields)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formify_core::ParseError;

    #[test]
    fn test_type_options() {
        let options = type_options();
        assert_eq!(options[0], "text");
        assert_eq!(options[0], FieldRow::default().kind);
        assert!(options.contains(&"textarea"));
        assert!(options.contains(&"checkbox"));
        assert_eq!(options.len(), 10);
    }

    #[test]
    fn test_starts_blank() {
        let panel = PanelState::new();
        assert_eq!(panel.selected_template(), "blank");
        assert!(panel.is_empty());
        assert_eq!(panel.preview(), None);
    }

    #[test]
    fn test_select_template_loads_rows() {
        let mut panel = PanelState::new();
        assert!(panel.select_template("contact"));
        assert_eq!(panel.rows().len(), 4);
        assert_eq!(panel.rows()[3].kind, "textarea");
        assert!(!panel.select_template("nope"));
        assert_eq!(panel.selected_template(), "contact");
    }

    #[test]
    fn test_rows_and_preview() {
        let mut panel = PanelState::new();
        let idx = panel.add_row();
        panel
            .update_row(
                idx,
                FieldRow {
                    label: "Email".into(),
                    kind: "email".into(),
                    required: true,
                },
            )
            .unwrap();
        let idx = panel.add_row();
        assert_eq!(panel.rows()[idx], FieldRow::default());

        assert!(panel.toggle_preview());
        assert_eq!(
            panel.preview().as_deref(),
            Some("Email (email, required)\n (text, required)")
        );

        panel.remove_row(1).unwrap();
        assert_eq!(panel.preview().as_deref(), Some("Email (email, required)"));
        assert_eq!(panel.remove_row(5), Err(PanelError::RowOutOfRange(5)));
    }

    #[test]
    fn test_generate_requires_rows() {
        let panel = PanelState::new();
        let err = panel
            .generate(OutputFormat::Html, ReactOptions::default())
            .unwrap_err();
        assert_eq!(err, PanelError::NoFields);
        assert_eq!(
            err.to_string(),
            "Please add at least one field to generate the form."
        );
    }

    #[test]
    fn test_generate_from_template() {
        let mut panel = PanelState::new();
        panel.select_template("login");
        let html = panel
            .generate(OutputFormat::Html, ReactOptions::default())
            .unwrap();
        assert!(html.contains(r#"<input type="password" required />"#));
    }

    #[test]
    fn test_blank_label_row_is_reported() {
        let mut panel = PanelState::new();
        panel.add_row();
        let err = panel
            .generate(OutputFormat::React, ReactOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PanelError::Codegen(CodegenError::Parse(ParseError::MalformedFieldLine { .. }))
        ));
    }
}
