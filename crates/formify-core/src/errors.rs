//! Error types for Formify.

use thiserror::Error;

/// Errors while parsing a field description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line does not have the `Label (type, required|optional)` shape.
    #[error("Invalid line format: {line}")]
    MalformedFieldLine {
        /// The offending line, with a trailing carriage return removed.
        line: String,
        /// 1-based position of the line in the trimmed input.
        line_number: usize,
    },
}

impl ParseError {
    /// Text of the line that failed to parse, without a trailing `\r`.
    pub fn line(&self) -> &str {
        match self {
            Self::MalformedFieldLine { line, .. } => line,
        }
    }
}

/// An output format name that is neither `html` nor `react`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown output format '{0}' (expected html or react)")]
pub struct UnknownFormatError(pub String);
