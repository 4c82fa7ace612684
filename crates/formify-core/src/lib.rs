//! Core types and utilities shared by the Formify crates.
//!
//! This crate provides the foundational types used across the workspace:
//! - Field descriptors produced by the parser and consumed by the generators
//! - Output format selection
//! - The built-in form template gallery
//! - Error types

pub mod errors;
pub mod templates;
pub mod types;

pub use errors::*;
pub use templates::{FormTemplate, TemplateField};
pub use types::*;
