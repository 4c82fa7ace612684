//! Plain HTML form generator.
//!
//! No validation logic is emitted; required fields only carry the browser's
//! `required` attribute.

use formify_core::{FieldSpec, OutputFormat};
use tracing::debug;

use super::writer::{element_to_string, Dialect};
use super::FormGenerator;
use crate::element::Element;
use crate::error::Result;

/// HTML form generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlGenerator;

impl HtmlGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the form. Total over any field list, including an empty one.
    pub fn render(&self, fields: &[FieldSpec]) -> String {
        debug!(fields = fields.len(), "rendering html form");
        element_to_string(&self.build_form(fields), Dialect::Html)
    }

    /// Build the markup tree for a form.
    pub fn build_form(&self, fields: &[FieldSpec]) -> Element {
        let form = fields
            .iter()
            .fold(Element::new("form"), |form, field| form.child(field_label(field)));
        form.child(
            Element::new("button")
                .attr("type", "submit")
                .text("Submit"),
        )
    }
}

fn field_label(field: &FieldSpec) -> Element {
    Element::new("label")
        .text(format!("{}: ", field.label()))
        .child(
            Element::new("input")
                .attr("type", field.kind().as_str())
                .flag_if("required", field.is_required()),
        )
}

impl FormGenerator for HtmlGenerator {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn generate(&self, fields: &[FieldSpec]) -> Result<String> {
        Ok(self.render(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_has_only_submit() {
        let html = HtmlGenerator::new().render(&[]);
        insta::assert_snapshot!(html, @r#"
        <form>
          <button type="submit">Submit</button>
        </form>
        "#);
        assert!(!html.contains("<label"));
    }

    #[test]
    fn test_login_form() {
        let fields = [
            FieldSpec::required("Email", "email"),
            FieldSpec::required("Password", "password"),
        ];
        let html = HtmlGenerator::new().render(&fields);
        insta::assert_snapshot!(html, @r#"
        <form>
          <label>Email: <input type="email" required /></label>
          <label>Password: <input type="password" required /></label>
          <button type="submit">Submit</button>
        </form>
        "#);
    }

    #[test]
    fn test_optional_field_has_no_required_marker() {
        let html = HtmlGenerator::new().render(&[FieldSpec::optional("Bio", "textarea")]);
        assert!(html.contains(r#"<label>Bio: <input type="textarea" /></label>"#));
    }

    #[test]
    fn test_label_is_escaped() {
        let html = HtmlGenerator::new().render(&[FieldSpec::optional("<b>Name</b>", "text")]);
        assert!(html.contains("&lt;b&gt;Name&lt;/b&gt;: "));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_generate_via_trait() {
        let gen = HtmlGenerator::new();
        assert_eq!(gen.format(), OutputFormat::Html);
        let code = gen.generate(&[FieldSpec::required("Age", "number")]).unwrap();
        assert!(code.contains(r#"<input type="number" required />"#));
    }
}
