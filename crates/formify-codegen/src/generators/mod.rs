//! Code generators for the supported output formats.

mod html;
mod react;
pub mod writer;

pub use html::HtmlGenerator;
pub use react::{ReactGenerator, ReactOptions};

use formify_core::{FieldSpec, OutputFormat};

use crate::error::Result;

/// Common trait for form generators.
pub trait FormGenerator {
    /// Format this generator produces.
    fn format(&self) -> OutputFormat;

    /// Generate source for a form with the given fields, in order.
    fn generate(&self, fields: &[FieldSpec]) -> Result<String>;
}

/// Pick a generator for a format. `options` only affect React output.
pub fn generator_for(format: OutputFormat, options: ReactOptions) -> Box<dyn FormGenerator> {
    match format {
        OutputFormat::Html => Box::new(HtmlGenerator::new()),
        OutputFormat::React => Box::new(ReactGenerator::with_options(options)),
    }
}
