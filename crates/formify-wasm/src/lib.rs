//! WebAssembly bindings for Formify.
//!
//! Exposes the parser and generators to a JavaScript side panel, plus a
//! [`FormBuilder`] that holds the panel's template and field-row state.
//!
//! ## Example
//!
//! ```js
//! import { FormBuilder, documentInfo, fieldTypes, generate } from 'formify-wasm';
//!
//! const code = generate("Email (email, required)", { format: "html" });
//!
//! const builder = new FormBuilder();
//! builder.selectTemplate("login");
//! builder.togglePreview();
//! console.log(builder.preview());
//! const tsx = builder.generate({ format: "react", componentName: "LoginForm" });
//! const { languageId } = documentInfo("react");
//! ```

use formify_codegen::{generator_for, HtmlGenerator, ReactGenerator};
use formify_core::FormTemplate;
use wasm_bindgen::prelude::*;

pub mod panel;
mod types;

pub use panel::{type_options, FieldRow, PanelError, PanelState};
pub use types::{DocumentInfo, GenerateOptionsJs};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Get the version of the bindings.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse a field description into an array of `{ label, kind, required }`.
#[wasm_bindgen(js_name = parseFields)]
pub fn parse_fields(text: &str) -> Result<JsValue, JsError> {
    let fields = formify_parser::parse(text).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&fields)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Parse and render as an HTML form.
#[wasm_bindgen(js_name = renderMarkup)]
pub fn render_markup(text: &str) -> Result<String, JsError> {
    let fields = formify_parser::parse(text).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(HtmlGenerator::new().render(&fields))
}

/// Parse and render as a React component with default options.
#[wasm_bindgen(js_name = renderComponent)]
pub fn render_component(text: &str) -> Result<String, JsError> {
    let fields = formify_parser::parse(text).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(ReactGenerator::new().render(&fields))
}

/// Parse and render with `{ format, componentName, strictKeys }` options.
#[wasm_bindgen]
pub fn generate(text: &str, options: JsValue) -> Result<String, JsError> {
    let (format, options) = options_from_js(options)?;
    let fields = formify_parser::parse(text).map_err(|e| JsError::new(&e.to_string()))?;
    generator_for(format, options)
        .generate(&fields)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// The template gallery.
#[wasm_bindgen]
pub fn templates() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(FormTemplate::all())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Type tags for the field-row selector.
#[wasm_bindgen(js_name = fieldTypes)]
pub fn field_types() -> Vec<String> {
    type_options().into_iter().map(str::to_string).collect()
}

/// `{ languageId, extension }` for a document holding output of `format`.
#[wasm_bindgen(js_name = documentInfo)]
pub fn document_info(format: &str) -> Result<JsValue, JsError> {
    let format: formify_core::OutputFormat =
        format.parse().map_err(|e: formify_core::UnknownFormatError| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&DocumentInfo::for_format(format))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn options_from_js(options: JsValue) -> Result<(formify_core::OutputFormat, formify_codegen::ReactOptions), JsError> {
    let js: GenerateOptionsJs = if options.is_undefined() || options.is_null() {
        GenerateOptionsJs::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?
    };
    js.into_core().map_err(|e| JsError::new(&e.to_string()))
}

/// Panel state for JavaScript.
#[wasm_bindgen]
pub struct FormBuilder {
    state: PanelState,
}

#[wasm_bindgen]
impl FormBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: PanelState::new(),
        }
    }

    #[wasm_bindgen(js_name = selectedTemplate)]
    pub fn selected_template(&self) -> String {
        self.state.selected_template().to_string()
    }

    #[wasm_bindgen(js_name = selectTemplate)]
    pub fn select_template(&mut self, key: &str) -> Result<(), JsError> {
        if self.state.select_template(key) {
            Ok(())
        } else {
            Err(JsError::new(&format!("Unknown template: {}", key)))
        }
    }

    /// Current rows as `{ label, type, required }` objects.
    pub fn rows(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.state.rows())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = addRow)]
    pub fn add_row(&mut self) -> usize {
        self.state.add_row()
    }

    #[wasm_bindgen(js_name = removeRow)]
    pub fn remove_row(&mut self, index: usize) -> Result<(), JsError> {
        self.state
            .remove_row(index)
            .map(|_| ())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = updateRow)]
    pub fn update_row(&mut self, index: usize, row: JsValue) -> Result<(), JsError> {
        let row: FieldRow = serde_wasm_bindgen::from_value(row)
            .map_err(|e| JsError::new(&format!("Invalid field row: {}", e)))?;
        self.state
            .update_row(index, row)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    #[wasm_bindgen(js_name = togglePreview)]
    pub fn toggle_preview(&mut self) -> bool {
        self.state.toggle_preview()
    }

    /// Description text, or `undefined` while the preview is hidden.
    pub fn preview(&self) -> Option<String> {
        self.state.preview()
    }

    pub fn description(&self) -> String {
        self.state.description()
    }

    pub fn generate(&self, options: JsValue) -> Result<String, JsError> {
        let (format, options) = options_from_js(options)?;
        self.state
            .generate(format, options)
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
