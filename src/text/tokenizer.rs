//! Word tokenization for scoring.

use crate::config::TextConfig;
use crate::text::{Normalizer, Sentence};
use unicode_segmentation::UnicodeSegmentation;

/// A token with its position in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The normalized token text.
    pub text: String,
    /// Start position in the original text (byte offset).
    pub start: usize,
    /// End position in the original text (byte offset).
    pub end: usize,
    /// Token index in the sequence.
    pub index: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(text: String, start: usize, end: usize, index: usize) -> Self {
        Self {
            text,
            start,
            end,
            index,
        }
    }

    /// Returns true if this token is a punctuation mark.
    pub fn is_punctuation(&self) -> bool {
        Normalizer::is_punctuation(&self.text)
    }
}

/// Tokenizer that splits text on Unicode word boundaries.
///
/// Words, numbers and individual punctuation marks each become a token;
/// whitespace is dropped. Contractions such as `don't` stay whole.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    normalizer: Normalizer,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: &TextConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(&TextConfig::default())
    }

    /// Tokenizes text into a sequence of tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenize_at(text, 0)
    }

    /// Tokenizes text whose first byte sits at `base_offset` in a larger document.
    fn tokenize_at(&self, text: &str, base_offset: usize) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (start, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            let start = base_offset + start;
            let end = start + segment.len();
            let index = tokens.len();
            tokens.push(Token::new(self.normalizer.normalize_token(segment), start, end, index));
        }

        tokens
    }

    /// Tokenizes text and returns only the token strings.
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }

    /// Tokenizes each sentence independently.
    ///
    /// Token offsets are reported in document coordinates, so they line up
    /// with the sentence spans.
    pub fn tokenize_by_sentence(&self, sentences: &[Sentence]) -> Vec<Vec<Token>> {
        sentences
            .iter()
            .map(|sentence| self.tokenize_at(&sentence.text, sentence.start))
            .collect()
    }
}
