//! Token normalization for scoring.

use crate::config::TextConfig;

/// Applies case folding to tokens and classifies punctuation.
#[derive(Debug, Clone)]
pub struct Normalizer {
    lowercase: bool,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: &TextConfig) -> Self {
        Self {
            lowercase: config.lowercase,
        }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(&TextConfig::default())
    }

    /// Normalizes a single token.
    pub fn normalize_token(&self, token: &str) -> String {
        if self.lowercase {
            token.to_lowercase()
        } else {
            token.to_string()
        }
    }

    /// Returns true if the token carries no letters or digits.
    ///
    /// Covers ASCII punctuation as well as Unicode marks such as `—` or `«`.
    pub fn is_punctuation(token: &str) -> bool {
        !token.is_empty() && !token.chars().any(char::is_alphanumeric)
    }
}
