//! TypeScript-friendly option types for the WASM bindings.

use formify_codegen::ReactOptions;
use formify_core::{OutputFormat, UnknownFormatError};
use serde::{Deserialize, Serialize};

/// Generation options from JavaScript.
///
/// ```ts
/// { format: "react", componentName: "SignupForm", strictKeys: false }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptionsJs {
    /// `html` or `react`; defaults to `react`.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub component_name: Option<String>,
    #[serde(default)]
    pub strict_keys: Option<bool>,
}

impl GenerateOptionsJs {
    pub fn into_core(self) -> Result<(OutputFormat, ReactOptions), UnknownFormatError> {
        let format = match self.format {
            Some(name) => name.parse()?,
            None => OutputFormat::default(),
        };
        let mut options = ReactOptions::default();
        if let Some(name) = self.component_name {
            options.component_name = name;
        }
        if let Some(strict) = self.strict_keys {
            options.strict_keys = strict;
        }
        Ok((format, options))
    }
}

/// How the host editor should open generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub language_id: &'static str,
    pub extension: &'static str,
}

impl DocumentInfo {
    pub fn for_format(format: OutputFormat) -> Self {
        Self {
            language_id: format.language_id(),
            extension: format.extension(),
        }
    }
}
