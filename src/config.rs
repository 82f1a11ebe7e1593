//! YAML configuration file support for MedNLP.
//!
//! A single YAML file describes the annotation settings and where the
//! lexicon comes from. Every section is optional.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # MedNLP configuration
//! version: "1.0"
//! name: "cardiology"
//!
//! annotate:
//!   version: 1
//!   reject_blank_input: true
//!   markup: "html"
//!
//! lexicon:
//!   # JSON lexicon file; the built-in dictionary is used when omitted.
//!   path: "lexicon.json"
//!   # Terms appended after the base lexicon, per category.
//!   extra:
//!     Drug: ["aspirin", "atorvastatin"]
//!     Symptom: ["palpitations"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use annotate::{AnnotateConfig, MarkupStyle};
use lexicon::{Category, Lexicon, LexiconBuilder, LexiconError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MednlpConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub annotate: AnnotateYamlConfig,

    #[serde(default)]
    pub lexicon: LexiconYamlConfig,
}

impl MednlpConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: MednlpConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.annotate.validate()?;
        self.lexicon.validate()?;

        Ok(())
    }
}

impl Default for MednlpConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            annotate: AnnotateYamlConfig::default(),
            lexicon: LexiconYamlConfig::default(),
        }
    }
}

/// Annotation YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub reject_blank_input: bool,

    #[serde(default)]
    pub markup: MarkupStyle,
}

impl AnnotateYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "annotate.version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_annotate_config(&self) -> AnnotateConfig {
        AnnotateConfig {
            version: self.version,
            reject_blank_input: self.reject_blank_input,
            markup: self.markup,
        }
    }
}

impl Default for AnnotateYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            reject_blank_input: true,
            markup: MarkupStyle::Html,
        }
    }
}

/// Lexicon source YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconYamlConfig {
    /// JSON lexicon file. `None` selects the built-in dictionary.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Extra terms per category name, appended in order.
    #[serde(default)]
    pub extra: BTreeMap<String, Vec<String>>,
}

impl LexiconYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        for key in self.extra.keys() {
            key.parse::<Category>()
                .map_err(|e| ConfigLoadError::Validation(format!("lexicon.extra: {e}")))?;
        }
        Ok(())
    }

    /// Loads the base lexicon and appends the extra terms.
    pub fn build_lexicon(&self) -> Result<Lexicon, LexiconError> {
        let base = match &self.path {
            Some(path) => Lexicon::from_path(path)?,
            None => Lexicon::builtin(),
        };

        let mut builder = LexiconBuilder::from(base);
        for (key, terms) in &self.extra {
            let category: Category = key.parse()?;
            builder = builder.terms(category, terms.iter().cloned());
        }
        builder.build()
    }
}

fn default_version() -> u32 {
    1
}

fn true_value() -> bool {
    true
}
