//! Optional `.emopalette.toml` configuration.
//!
//! Configuration touches presentation only (export format, output
//! directory, label language); it never changes classification logic.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::LabelLanguage;
use crate::errors::SurveyError;
use crate::io::output::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".emopalette.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub labels: LabelConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when the CLI is not given one.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Directory derived export files are written into.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelConfig {
    /// `ko` reproduces the reference export labels (격렬형, 둔감형, ...).
    #[serde(default)]
    pub language: LabelLanguage,
}

impl SurveyConfig {
    /// Load configuration. An explicit path must exist and parse; with no
    /// path, `.emopalette.toml` in the working directory is used if
    /// present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, SurveyError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    debug!("no {CONFIG_FILE_NAME} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, SurveyError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SurveyError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&contents).map_err(|e| {
            SurveyError::config(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

/// The commented default configuration `init` writes.
pub const DEFAULT_CONFIG: &str = r#"# emopalette configuration

[output]
# Format used when none is given on the command line: csv, json, terminal
default_format = "csv"
# Uncomment to collect derived export files in one place
# directory = "exports"

[labels]
# "ko" exports the reference Korean labels instead of English ones
language = "en"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config_file() {
        let config = SurveyConfig::default();
        assert_eq!(config.output.default_format, OutputFormat::Csv);
        assert_eq!(config.labels.language, LabelLanguage::En);
        assert!(config.output.directory.is_none());
    }

    #[test]
    fn default_config_text_parses() {
        let config: SurveyConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.output.default_format, OutputFormat::Csv);
        assert_eq!(config.labels.language, LabelLanguage::En);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: SurveyConfig = toml::from_str("[labels]\nlanguage = \"ko\"\n").unwrap();
        assert_eq!(config.labels.language, LabelLanguage::Ko);
        assert_eq!(config.output.default_format, OutputFormat::Csv);
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let result = toml::from_str::<SurveyConfig>("[output]\ndefault_format = \"xml\"\n");
        assert!(result.is_err());
    }
}
