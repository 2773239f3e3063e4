//! Configuration for the precis summarizer.

use crate::error::{PrecisError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text processing configuration.
    pub text: TextConfig,

    /// Summary selection configuration.
    pub summary: SummaryConfig,
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// Missing sections and keys fall back to their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PrecisError::FileNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        log::info!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.summary.sentence_count == 0 {
            return Err(PrecisError::Config(
                "summary.sentence_count must be at least 1".to_string(),
            ));
        }
        if self.summary.max_input_bytes == Some(0) {
            return Err(PrecisError::Config(
                "summary.max_input_bytes must be at least 1 when set".to_string(),
            ));
        }
        if self.text.language.trim().is_empty() {
            return Err(PrecisError::Config("text.language must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Text processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Convert tokens to lowercase before scoring.
    /// Default: true.
    pub lowercase: bool,

    /// Stop-word language code or name ("en", "german", ...).
    /// Default: "en".
    pub language: String,

    /// Read stop words from this file instead of the bundled list.
    /// Default: None.
    pub stopwords_path: Option<PathBuf>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            language: "en".to_string(),
            stopwords_path: None,
        }
    }
}

/// Summary selection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Sentences selected when the caller does not say otherwise.
    /// Default: 3.
    pub sentence_count: usize,

    /// Reject documents longer than this many bytes.
    /// Default: None (unbounded).
    pub max_input_bytes: Option<usize>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            sentence_count: crate::DEFAULT_SENTENCE_COUNT,
            max_input_bytes: None,
        }
    }
}
