//! Error types for code generation.

use formify_core::ParseError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The field description could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Two fields lowercase to the same state key (strict mode only).
    #[error("Fields '{first}' and '{second}' both map to the state key '{key}'")]
    DuplicateFieldKey {
        key: String,
        first: String,
        second: String,
    },

    /// No built-in template has this key.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}
