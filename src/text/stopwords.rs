//! Stop-word sets.
//!
//! Bundled lists come from the `stop-words` crate. A set is read-only once
//! built; the English set is shared process-wide and loaded on first use.

use crate::error::{PrecisError, Result};
use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use stop_words::LANGUAGE;

static ENGLISH: OnceCell<Arc<StopWords>> = OnceCell::new();

/// Languages with a bundled stop-word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    English,
    /// German.
    German,
    /// French.
    French,
    /// Spanish.
    Spanish,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Dutch.
    Dutch,
    /// Russian.
    Russian,
    /// Swedish.
    Swedish,
    /// Norwegian.
    Norwegian,
    /// Danish.
    Danish,
    /// Finnish.
    Finnish,
    /// Hungarian.
    Hungarian,
    /// Turkish.
    Turkish,
    /// Polish.
    Polish,
    /// Arabic.
    Arabic,
}

impl Language {
    fn bundled(self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::German => LANGUAGE::German,
            Language::French => LANGUAGE::French,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
            Language::Russian => LANGUAGE::Russian,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Danish => LANGUAGE::Danish,
            Language::Finnish => LANGUAGE::Finnish,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Turkish => LANGUAGE::Turkish,
            Language::Polish => LANGUAGE::Polish,
            Language::Arabic => LANGUAGE::Arabic,
        }
    }
}

impl FromStr for Language {
    type Err = PrecisError;

    fn from_str(s: &str) -> Result<Self> {
        let lang = match s.trim().to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "de" | "german" => Language::German,
            "fr" | "french" => Language::French,
            "es" | "spanish" => Language::Spanish,
            "it" | "italian" => Language::Italian,
            "pt" | "portuguese" => Language::Portuguese,
            "nl" | "dutch" => Language::Dutch,
            "ru" | "russian" => Language::Russian,
            "sv" | "swedish" => Language::Swedish,
            "no" | "norwegian" => Language::Norwegian,
            "da" | "danish" => Language::Danish,
            "fi" | "finnish" => Language::Finnish,
            "hu" | "hungarian" => Language::Hungarian,
            "tr" | "turkish" => Language::Turkish,
            "pl" | "polish" => Language::Polish,
            "ar" | "arabic" => Language::Arabic,
            other => {
                return Err(PrecisError::ResourceUnavailable(format!(
                    "no stop-word list for language '{}'",
                    other
                )))
            }
        };
        Ok(lang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A closed, read-only set of stop words (stored lowercase).
#[derive(Debug, Clone)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    /// Returns the shared English set, loading it on first use.
    pub fn english() -> Result<Arc<StopWords>> {
        ENGLISH
            .get_or_try_init(|| Self::load(Language::English).map(Arc::new))
            .map(Arc::clone)
    }

    /// Loads the bundled list for a language.
    pub fn load(language: Language) -> Result<Self> {
        let words: FxHashSet<String> = stop_words::get(language.bundled())
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        if words.is_empty() {
            return Err(PrecisError::ResourceUnavailable(format!(
                "bundled stop-word list for {} is empty",
                language
            )));
        }

        log::info!("Loaded {} stop words for {}", words.len(), language);
        Ok(Self { words })
    }

    /// Loads stop words from a file with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored. A missing,
    /// unreadable or empty file is reported as an unavailable resource.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PrecisError::ResourceUnavailable(format!(
                "cannot read stop words from {}: {}",
                path.display(),
                e
            ))
        })?;

        let words: FxHashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        if words.is_empty() {
            return Err(PrecisError::ResourceUnavailable(format!(
                "stop-word file {} contains no words",
                path.display()
            )));
        }

        log::info!("Loaded {} stop words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Creates a stop-word set from a fixed list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check if a word is a stop word, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Get the number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_stopwords() {
        let stop_words = StopWords::load(Language::English).unwrap();

        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("is"));
        assert!(stop_words.contains("and"));
        assert!(!stop_words.contains("machine"));
        assert!(!stop_words.contains("learning"));
    }

    #[test]
    fn test_shared_english_is_cached() {
        let a = StopWords::english().unwrap();
        let b = StopWords::english().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_german_stopwords() {
        let stop_words = StopWords::load(Language::German).unwrap();

        assert!(stop_words.contains("der"));
        assert!(stop_words.contains("und"));
        assert!(!stop_words.contains("machine"));
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("German".parse::<Language>().unwrap(), Language::German);

        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(err.is_resource_unavailable());
    }

    #[test]
    fn test_custom_list() {
        let stop_words = StopWords::from_list(&["Custom", "words"]);

        assert!(stop_words.contains("custom"));
        assert!(stop_words.contains("words"));
        assert!(!stop_words.contains("the"));
        assert_eq!(stop_words.len(), 2);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let stop_words = StopWords::from_list(&["the", "is"]);

        assert!(stop_words.contains("The"));
        assert!(stop_words.contains("IS"));
        assert!(!stop_words.contains("Cat"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# project stop words").unwrap();
        writeln!(file, "Lorem").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  ipsum  ").unwrap();

        let stop_words = StopWords::from_file(file.path()).unwrap();
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("lorem"));
        assert!(stop_words.contains("ipsum"));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = StopWords::from_file("/no/such/stopwords.txt").unwrap_err();
        assert!(err.is_resource_unavailable());
    }

    #[test]
    fn test_empty_file_is_unavailable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = StopWords::from_file(file.path()).unwrap_err();
        assert!(err.is_resource_unavailable());
    }
}
