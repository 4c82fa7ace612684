//! Form code generation from Formify field descriptions.
//!
//! Two output strategies are provided:
//!
//! - **Markup** ([`render_markup`]): a plain HTML form whose only validation
//!   is the browser's `required` attribute.
//! - **Component** ([`render_component`]): a React/TypeScript component with
//!   per-field state, synthesized validation rules, change handling and a
//!   submission lifecycle.
//!
//! Generators first build a typed model ([`FormModel`], [`ValidationPlan`],
//! [`Element`] trees) and then serialize it; escaping of labels happens only
//! in the writer.
//!
//! # Example
//!
//! ```
//! use formify_codegen::{generate, OutputFormat};
//!
//! let html = generate("Email (email, required)", OutputFormat::Html).unwrap();
//! assert!(html.contains(r#"<input type="email" required />"#));
//! ```

pub mod element;
pub mod error;
pub mod generators;
pub mod model;
pub mod validation;

pub use element::{Attr, AttrValue, Element, Node};
pub use error::{CodegenError, Result};
pub use formify_core::{FieldKind, FieldSpec, FormTemplate, OutputFormat, ParseError};
pub use generators::{generator_for, FormGenerator, HtmlGenerator, ReactGenerator, ReactOptions};
pub use model::{Control, FieldBinding, FormModel, KeyCollision};
pub use validation::{Check, FormatRule, ValidationOutcome, ValidationPlan, ValidationRule};

use tracing::debug;

/// Render fields as a plain HTML form.
pub fn render_markup(fields: &[FieldSpec]) -> String {
    HtmlGenerator::new().render(fields)
}

/// Render fields as a React component with default options.
pub fn render_component(fields: &[FieldSpec]) -> String {
    ReactGenerator::new().render(fields)
}

/// Parse a field description and render it in one step.
pub fn generate(text: &str, format: OutputFormat) -> Result<String> {
    generate_with(text, format, ReactOptions::default())
}

/// Parse a field description and render it with explicit React options.
pub fn generate_with(text: &str, format: OutputFormat, options: ReactOptions) -> Result<String> {
    let fields = formify_parser::parse(text)?;
    debug!(%format, fields = fields.len(), "generating form");
    generator_for(format, options).generate(&fields)
}

/// Render a built-in template.
pub fn generate_template(key: &str, format: OutputFormat, options: ReactOptions) -> Result<String> {
    let template =
        FormTemplate::find(key).ok_or_else(|| CodegenError::UnknownTemplate(key.to_string()))?;
    generator_for(format, options).generate(&template.field_specs())
}
