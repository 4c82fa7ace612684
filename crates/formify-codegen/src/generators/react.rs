//! React component generator with hooks-based state and validation.
//!
//! The component keeps one string slot per field in `formData`, a matching
//! `errors` record, and an `isSubmitting` flag. Submission runs
//! Idle → Validating → (Invalid → Idle) | (Submitting → Idle).

use convert_case::{Case, Casing};
use formify_core::{FieldSpec, OutputFormat};
use tracing::{debug, warn};

use super::writer::{js_key, js_member, js_string, write_element, CodeWriter, Dialect};
use super::FormGenerator;
use crate::element::Element;
use crate::error::{CodegenError, Result};
use crate::model::{Control, FieldBinding, FormModel, CHECKED_VALUE};
use crate::validation::{Check, ValidationRule};

const DEFAULT_COMPONENT_NAME: &str = "MyForm";
const DEFAULT_SUBTITLE: &str = "Please fill in the required information";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

const INPUT_CLASSES: &str =
    "w-full px-3 py-2 border ${ERR} rounded-lg focus:outline-none focus:border-blue-400 transition-colors";
const CHECKBOX_CLASSES: &str =
    "rounded ${ERR} text-blue-500 focus:ring-2 focus:ring-blue-400 focus:ring-opacity-50 transition-colors";
const BUTTON_CLASSES: &str = "w-full py-2.5 px-4 border border-transparent rounded-lg text-sm font-medium text-white bg-blue-500 hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-400 transition-colors";

/// Options for React output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactOptions {
    /// Name of the exported component, normalized to PascalCase.
    pub component_name: String,
    /// Line shown under the heading.
    pub subtitle: String,
    /// Reject fields whose labels lowercase to the same key.
    pub strict_keys: bool,
    /// Placeholder network delay in the submit handler.
    pub submit_delay_ms: u64,
}

impl Default for ReactOptions {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            strict_keys: false,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

impl ReactOptions {
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_keys = strict;
        self
    }

    /// The component name as emitted.
    pub fn resolved_component_name(&self) -> String {
        let name = self.component_name.to_case(Case::Pascal);
        if name.is_empty() || !super::writer::is_js_identifier(&name) {
            DEFAULT_COMPONENT_NAME.to_string()
        } else {
            name
        }
    }
}

/// React code generator.
#[derive(Debug, Clone, Default)]
pub struct ReactGenerator {
    options: ReactOptions,
}

impl ReactGenerator {
    /// Create a new React generator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReactOptions) -> Self {
        Self { options }
    }

    /// Render the component without the strict key check.
    pub fn render(&self, fields: &[FieldSpec]) -> String {
        let model = FormModel::from_fields(fields);
        if let Some(collision) = model.first_collision() {
            warn!(
                key = %collision.key,
                first = %collision.first,
                second = %collision.second,
                "fields share a state key"
            );
        }
        debug!(
            fields = model.fields.len(),
            rules = model.validation.rules.len(),
            "rendering react component"
        );
        self.generate_component_code(&model)
    }

    fn generate_component_code(&self, model: &FormModel) -> String {
        let empty = empty_record(model);
        let name = self.options.resolved_component_name();
        let page = self.build_page(model);
        let mut w = CodeWriter::new();

        w.line(r#"import { useState, FormEvent, ChangeEvent } from "react";"#);
        w.blank();
        write_interface(&mut w, "FormData", model);
        w.blank();
        write_interface(&mut w, "FormErrors", model);
        w.blank();

        w.block(format!("export default function {name}() {{"), "}", |w| {
            w.line(format!("const [formData, setFormData] = useState<FormData>({empty});"));
            w.line(format!("const [errors, setErrors] = useState<FormErrors>({empty});"));
            w.line("const [isSubmitting, setIsSubmitting] = useState(false);");
            w.blank();
            write_validate(w, model, &empty);
            w.blank();
            write_change_handler(w);
            w.blank();
            write_submit_handler(w, &empty, self.options.submit_delay_ms);
            w.blank();
            w.block("return (", ");", |w| write_element(w, &page, Dialect::Jsx));
        });

        w.finish()
    }

    /// Page wrapper, heading, form body and submit button.
    pub fn build_page(&self, model: &FormModel) -> Element {
        let header = Element::new("div")
            .attr("className", "text-center")
            .child(
                Element::new("h2")
                    .attr("className", "text-3xl font-semibold text-gray-800")
                    .text(&model.heading),
            )
            .child(
                Element::new("p")
                    .attr("className", "mt-2 text-sm text-gray-500")
                    .text(&self.options.subtitle),
            );

        let form = model
            .fields
            .iter()
            .fold(
                Element::new("form")
                    .expr_attr("onSubmit", "handleSubmit")
                    .attr("className", "mt-8 space-y-4"),
                |form, field| form.child(field_block(field)),
            )
            .child(Element::new("div").attr("className", "pt-4").child(submit_button()));

        Element::new("div")
            .attr(
                "className",
                "min-h-screen bg-gray-50 flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8",
            )
            .child(
                Element::new("div")
                    .attr(
                        "className",
                        "max-w-md w-full space-y-8 bg-white p-8 rounded-xl shadow-sm",
                    )
                    .child(header)
                    .child(form),
            )
    }
}

impl FormGenerator for ReactGenerator {
    fn format(&self) -> OutputFormat {
        OutputFormat::React
    }

    fn generate(&self, fields: &[FieldSpec]) -> Result<String> {
        if self.options.strict_keys {
            if let Some(c) = FormModel::from_fields(fields).first_collision() {
                return Err(CodegenError::DuplicateFieldKey {
                    key: c.key,
                    first: c.first,
                    second: c.second,
                });
            }
        }
        Ok(self.render(fields))
    }
}

/// `{ email: "", password: "" }`, or `{}` without fields.
fn empty_record(model: &FormModel) -> String {
    if model.fields.is_empty() {
        return "{}".to_string();
    }
    let entries: Vec<String> = model
        .state_keys()
        .map(|k| format!("{}: \"\"", js_key(k)))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

fn write_interface(w: &mut CodeWriter, name: &str, model: &FormModel) {
    if model.fields.is_empty() {
        w.line(format!("interface {name} {{}}"));
        return;
    }
    w.block(format!("interface {name} {{"), "}", |w| {
        for key in model.state_keys() {
            w.line(format!("{}: string;", js_key(key)));
        }
    });
}

fn write_validate(w: &mut CodeWriter, model: &FormModel, empty: &str) {
    w.block("const validateForm = (): boolean => {", "};", |w| {
        w.line(format!("const nextErrors: FormErrors = {empty};"));
        for rule in &model.validation.rules {
            write_rule(w, rule);
        }
        w.line("setErrors(nextErrors);");
        w.line("return Object.values(nextErrors).every(error => !error);");
    });
}

/// One statement per rule. Statements never short-circuit each other, so a
/// later failing rule overwrites the message of an earlier one.
fn write_rule(w: &mut CodeWriter, rule: &ValidationRule) {
    let value = js_member("formData", &rule.key);
    let slot = js_member("nextErrors", &rule.key);
    let assign = format!("{slot} = {};", js_string(&rule.message));

    match rule.check {
        Check::Presence => w.line(format!("if (!{value}) {assign}")),
        Check::Format { rule: format } => {
            w.block(
                format!("if ({value} && {}) {{", format.js_failure(&value)),
                "}",
                |w| w.line(&assign),
            );
        }
    }
}

fn write_change_handler(w: &mut CodeWriter) {
    w.block(
        "const handleChange = (e: ChangeEvent<HTMLInputElement | HTMLTextAreaElement>) => {",
        "};",
        |w| {
            w.line("const { name, value, type } = e.target;");
            w.line(r#"const val = type === "checkbox" ? (e.target as HTMLInputElement).checked.toString() : value;"#);
            w.line("setFormData(prev => ({ ...prev, [name]: val }));");
            w.block("if (errors[name as keyof FormErrors]) {", "}", |w| {
                w.line(r#"setErrors(prev => ({ ...prev, [name]: "" }));"#);
            });
        },
    );
}

fn write_submit_handler(w: &mut CodeWriter, empty: &str, delay_ms: u64) {
    w.block("const handleSubmit = async (e: FormEvent<HTMLFormElement>) => {", "};", |w| {
        w.line("e.preventDefault();");
        w.line("if (!validateForm()) return;");
        w.blank();
        w.line("setIsSubmitting(true);");
        w.block("try {", "} catch (error) {", |w| {
            w.line(format!("await new Promise(resolve => setTimeout(resolve, {delay_ms}));"));
            w.line(r#"console.log("Form submitted:", formData);"#);
            w.line(format!("setFormData({empty});"));
            w.line(format!("setErrors({empty});"));
            w.line(r#"alert("Form submitted successfully!");"#);
        });
        w.indent();
        w.line(r#"console.error("Error submitting form:", error);"#);
        w.line(r#"alert("Error submitting form. Please try again.");"#);
        w.dedent();
        w.block("} finally {", "}", |w| w.line("setIsSubmitting(false);"));
    });
}

fn field_block(field: &FieldBinding) -> Element {
    let value = js_member("formData", &field.key);
    let error = js_member("errors", &field.key);
    let caption = if field.required {
        format!("{} *", field.display_label)
    } else {
        field.display_label.clone()
    };
    let error_line = Element::new("p")
        .attr("className", "mt-1 text-sm text-red-500")
        .expr(&error);

    let block = Element::new("div").attr("className", "mb-4");
    let block = match &field.control {
        Control::Checkbox => block.child(
            Element::new("label")
                .attr("className", "inline-flex items-center")
                .child(
                    Element::new("input")
                        .attr("type", "checkbox")
                        .attr("name", &field.key)
                        .expr_attr("checked", format!("{value} === {}", js_string(CHECKED_VALUE)))
                        .expr_attr("onChange", "handleChange")
                        .flag_if("required", field.required)
                        .expr_attr("className", error_classes(CHECKBOX_CLASSES, &error)),
                )
                .child(
                    Element::new("span")
                        .attr("className", "ml-2 text-sm text-gray-600")
                        .text(caption),
                ),
        ),
        Control::TextArea => block.child(caption_label(field, caption)).child(
            bound_control(Element::new("textarea"), field, &value, &error).expr_attr("rows", "4"),
        ),
        Control::Input { input_type } => block.child(caption_label(field, caption)).child(
            bound_control(
                Element::new("input").attr("type", input_type),
                field,
                &value,
                &error,
            ),
        ),
    };

    block.conditional(error, error_line)
}

fn caption_label(field: &FieldBinding, caption: String) -> Element {
    Element::new("label")
        .attr("htmlFor", &field.key)
        .attr("className", "block text-sm font-medium text-gray-600 mb-1")
        .text(caption)
}

fn bound_control(control: Element, field: &FieldBinding, value: &str, error: &str) -> Element {
    control
        .attr("id", &field.key)
        .attr("name", &field.key)
        .expr_attr("value", value)
        .expr_attr("onChange", "handleChange")
        .flag_if("required", field.required)
        .expr_attr("className", error_classes(INPUT_CLASSES, error))
}

/// Template literal switching the border color on the field's error.
fn error_classes(classes: &str, error: &str) -> String {
    let border = format!("${{{error} ? \"border-red-400\" : \"border-gray-200\"}}");
    format!("`{}`", classes.replace("${ERR}", &border))
}

fn submit_button() -> Element {
    Element::new("button")
        .attr("type", "submit")
        .expr_attr("disabled", "isSubmitting")
        .expr_attr(
            "className",
            format!("`{BUTTON_CLASSES} ${{isSubmitting ? \"opacity-70 cursor-not-allowed\" : \"\"}}`"),
        )
        .expr(r#"isSubmitting ? "Submitting..." : "Submit""#)
}
