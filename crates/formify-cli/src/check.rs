//! `formify check`

use anyhow::{Context, Result};
use formify_codegen::{FormModel, ValidationPlan};
use formify_core::FieldSpec;
use serde::Serialize;
use std::path::Path;
use tracing::warn;

use crate::generate::read_input;

/// What `check` prints: parsed fields, their state keys and the synthesized rules.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub fields: Vec<FieldSpec>,
    pub keys: Vec<String>,
    pub validation: ValidationPlan,
}

impl CheckReport {
    pub fn from_text(text: &str) -> Result<Self> {
        let fields = formify_parser::parse(text)?;
        let model = FormModel::from_fields(&fields);
        if let Some(collision) = model.first_collision() {
            warn!(key = %collision.key, "two fields share a state key");
        }
        let keys = model.state_keys().map(str::to_string).collect();
        Ok(Self {
            fields,
            keys,
            validation: model.validation,
        })
    }
}

pub fn run(input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let report = CheckReport::from_text(&text)?;
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}
