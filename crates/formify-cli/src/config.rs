//! `formify.toml` configuration.

use anyhow::{Context, Result};
use formify_codegen::ReactOptions;
use formify_core::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "formify.toml";

/// formify.toml structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateSection,
}

/// `[generate]` defaults, overridden by command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateSection {
    #[serde(default)]
    pub format: Option<OutputFormat>,

    #[serde(default)]
    pub component_name: Option<String>,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub strict_keys: Option<bool>,

    #[serde(default)]
    pub submit_delay_ms: Option<u64>,
}

impl Config {
    /// Load config from an explicit path, or from `./formify.toml` if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse config from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// React options with config values applied over the defaults.
    pub fn react_options(&self) -> ReactOptions {
        let mut options = ReactOptions::default();
        let section = &self.generate;
        if let Some(name) = &section.component_name {
            options.component_name = name.clone();
        }
        if let Some(subtitle) = &section.subtitle {
            options.subtitle = subtitle.clone();
        }
        if let Some(strict) = section.strict_keys {
            options.strict_keys = strict;
        }
        if let Some(delay) = section.submit_delay_ms {
            options.submit_delay_ms = delay;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.react_options(), ReactOptions::default());
    }

    #[test]
    fn test_generate_section() {
        let config = Config::from_str(
            r#"
[generate]
format = "html"
component_name = "SignupForm"
strict_keys = true
submit_delay_ms = 250
"#,
        )
        .unwrap();
        assert_eq!(config.generate.format, Some(OutputFormat::Html));
        let options = config.react_options();
        assert_eq!(options.component_name, "SignupForm");
        assert!(options.strict_keys);
        assert_eq!(options.submit_delay_ms, 250);
    }

    #[test]
    fn test_bad_format_is_rejected() {
        assert!(Config::from_str("[generate]\nformat = \"vue\"\n").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generate]\ncomponent_name = \"Contact\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.generate.component_name.as_deref(), Some("Contact"));
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
