//! Extractive summarization by word frequency.
//!
//! The pipeline is segment → tokenize → count → score → select. Each call is
//! independent; the only shared state is the read-only stop-word set.

use crate::config::{Config, SummaryConfig, TextConfig};
use crate::error::{PrecisError, Result};
use crate::scoring::{FrequencyTable, ScoredSentence, SentenceSelector};
use crate::text::{Language, Sentence, SentenceSegmenter, StopWords, Tokenizer};
use crate::DEFAULT_SENTENCE_COUNT;
use std::fmt;
use std::sync::Arc;

/// The selected sentences of a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Selected sentences with their scores.
    pub sentences: Vec<ScoredSentence>,
    /// Number of sentences the document was split into.
    pub total_sentences: usize,
}

impl Summary {
    /// Joins the selected sentences with single spaces.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of selected sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Frequency-based extractive summarizer.
#[derive(Debug, Clone)]
pub struct Summarizer {
    segmenter: SentenceSegmenter,
    tokenizer: Tokenizer,
    stop_words: Arc<StopWords>,
    config: SummaryConfig,
}

impl Summarizer {
    /// Creates a summarizer using the given stop words and default settings.
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        Self {
            segmenter: SentenceSegmenter::new(),
            tokenizer: Tokenizer::default_config(),
            stop_words,
            config: SummaryConfig::default(),
        }
    }

    /// Creates a summarizer backed by the shared English stop words.
    pub fn english() -> Result<Self> {
        Ok(Self::new(StopWords::english()?))
    }

    /// Creates a summarizer from a full configuration.
    ///
    /// Fails with [`PrecisError::ResourceUnavailable`] when the configured
    /// stop words cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self> {
        let stop_words = load_stop_words(&config.text)?;
        Ok(Self::new(stop_words)
            .with_text_config(&config.text)
            .with_config(config.summary.clone()))
    }

    /// Replaces the summary settings.
    pub fn with_config(mut self, config: SummaryConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the tokenizer settings.
    pub fn with_text_config(mut self, config: &TextConfig) -> Self {
        self.tokenizer = Tokenizer::new(config);
        self
    }

    /// The configured default sentence count.
    pub fn default_sentence_count(&self) -> usize {
        self.config.sentence_count
    }

    /// Summarizes `text` into at most `sentence_count` sentences.
    ///
    /// # Errors
    /// [`PrecisError::InvalidArgument`] if `sentence_count` is zero or the
    /// text exceeds the configured size limit.
    ///
    /// # Example
    /// ```
    /// use precis::{StopWords, Summarizer};
    /// use std::sync::Arc;
    ///
    /// let summarizer = Summarizer::new(Arc::new(StopWords::from_list(&["are", "the"])));
    /// let summary = summarizer
    ///     .summarize("Rust is fast. The weather is nice. Rust is safe and Rust is fun.", 1)
    ///     .unwrap();
    /// assert_eq!(summary, "Rust is safe and Rust is fun.");
    /// ```
    pub fn summarize(&self, text: &str, sentence_count: usize) -> Result<String> {
        Ok(self.summarize_detailed(text, sentence_count)?.text())
    }

    /// Summarizes `text` and keeps per-sentence scores and positions.
    pub fn summarize_detailed(&self, text: &str, sentence_count: usize) -> Result<Summary> {
        let selector = SentenceSelector::new(sentence_count)?;
        self.check_size(text)?;

        let sentences = self.segmenter.segment(text)?;
        if sentences.is_empty() {
            return Ok(Summary::default());
        }

        let frequencies = self.frequency_table(text);
        let sentence_tokens = self.tokenizer.tokenize_by_sentence(&sentences);
        let scored = SentenceSelector::score(&sentences, &sentence_tokens, &frequencies);
        let selected = selector.select(&scored);

        log::debug!(
            "Selected {} of {} sentences ({} distinct words counted)",
            selected.len(),
            sentences.len(),
            frequencies.len()
        );

        Ok(Summary {
            sentences: selected,
            total_sentences: sentences.len(),
        })
    }

    /// Scores every sentence of `text` without selecting any.
    pub fn score_sentences(&self, text: &str) -> Result<Vec<ScoredSentence>> {
        self.check_size(text)?;
        let sentences = self.segmenter.segment(text)?;
        let frequencies = self.frequency_table(text);
        let sentence_tokens = self.tokenizer.tokenize_by_sentence(&sentences);
        Ok(SentenceSelector::score(&sentences, &sentence_tokens, &frequencies))
    }

    /// Builds the word frequency table for `text`.
    pub fn frequencies(&self, text: &str) -> Result<FrequencyTable> {
        self.check_size(text)?;
        Ok(self.frequency_table(text))
    }

    /// Splits `text` into sentences.
    pub fn sentences(&self, text: &str) -> Result<Vec<Sentence>> {
        self.check_size(text)?;
        self.segmenter.segment(text)
    }

    fn frequency_table(&self, text: &str) -> FrequencyTable {
        let tokens = self.tokenizer.tokenize(text);
        FrequencyTable::build(&tokens, &self.stop_words)
    }

    fn check_size(&self, text: &str) -> Result<()> {
        match self.config.max_input_bytes {
            Some(limit) if text.len() > limit => Err(PrecisError::InvalidArgument(format!(
                "input is {} bytes, limit is {}",
                text.len(),
                limit
            ))),
            _ => Ok(()),
        }
    }
}

/// Resolves the stop-word set named by a text configuration.
pub fn load_stop_words(config: &TextConfig) -> Result<Arc<StopWords>> {
    if let Some(path) = &config.stopwords_path {
        return StopWords::from_file(path).map(Arc::new);
    }

    match config.language.parse::<Language>()? {
        Language::English => StopWords::english(),
        other => StopWords::load(other).map(Arc::new),
    }
}

/// Converts a signed sentence count into a positive `usize`.
///
/// Zero and negative values are a [`PrecisError::InvalidArgument`].
pub fn sentence_count(n: i64) -> Result<usize> {
    usize::try_from(n)
        .ok()
        .filter(|&count| count > 0)
        .ok_or_else(|| {
            PrecisError::InvalidArgument(format!(
                "sentence_count must be a positive integer, got {}",
                n
            ))
        })
}

/// Summarizes English text into [`DEFAULT_SENTENCE_COUNT`] sentences.
pub fn summarize_default(text: &str) -> Result<String> {
    Summarizer::english()?.summarize(text, DEFAULT_SENTENCE_COUNT)
}

/// Summarizes English text into `sentence_count` sentences.
///
/// Uses the shared English stop words. Fails with
/// [`PrecisError::InvalidArgument`] when `sentence_count` is zero or negative.
pub fn summarize(text: &str, sentence_count: i64) -> Result<String> {
    let count = self::sentence_count(sentence_count)?;
    Summarizer::english()?.summarize(text, count)
}
