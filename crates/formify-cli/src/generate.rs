//! `formify generate`

use anyhow::{Context, Result};
use formify_codegen::{generate_template, generate_with, ReactOptions};
use formify_core::OutputFormat;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;

/// Flags of the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub format: Option<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub template: Option<String>,
    pub component_name: Option<String>,
    pub strict: bool,
}

pub fn run(args: GenerateArgs, config: &Config) -> Result<()> {
    let (format, options) = resolve_options(&args, config)?;

    let code = match &args.template {
        Some(key) => generate_template(key, format, options)?,
        None => {
            let text = read_input(args.input.as_deref())?;
            generate_with(&text, format, options)?
        }
    };

    match output_path(&args, format) {
        Some(path) => {
            std::fs::write(&path, &code)
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            info!(path = %path.display(), %format, "wrote generated form");
        }
        None => println!("{code}"),
    }

    Ok(())
}

/// Merge config defaults with command-line flags; flags win.
pub fn resolve_options(args: &GenerateArgs, config: &Config) -> Result<(OutputFormat, ReactOptions)> {
    let format = match &args.format {
        Some(name) => name.parse()?,
        None => config.generate.format.unwrap_or_default(),
    };

    let mut options = config.react_options();
    if let Some(name) = &args.component_name {
        options.component_name = name.clone();
    }
    if args.strict {
        options.strict_keys = true;
    }

    Ok((format, options))
}

/// Where generated code goes: `-o`, else `<template>.<ext>` for templates,
/// else stdout (`None`).
pub fn output_path(args: &GenerateArgs, format: OutputFormat) -> Option<PathBuf> {
    args.output.clone().or_else(|| {
        args.template
            .as_ref()
            .map(|key| PathBuf::from(format!("{key}.{}", format.extension())))
    })
}

/// Read a description from a file, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {:?}", path)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
