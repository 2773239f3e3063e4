//! Word frequency table.

use crate::text::{StopWords, Token};
use rustc_hash::FxHashMap;

/// Occurrence counts of the significant words in a document.
///
/// Stop words and punctuation are never counted; every other token is
/// counted by its normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Builds a table from a document's token sequence.
    pub fn build(tokens: &[Token], stop_words: &StopWords) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();

        for token in tokens {
            if token.is_punctuation() || stop_words.contains(&token.text) {
                continue;
            }
            *counts.entry(token.text.clone()).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// Returns the count for a word, 0 if it is absent.
    #[inline]
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Sums the counts of every token in a sentence.
    ///
    /// Tokens are not filtered here; stop words and punctuation simply
    /// contribute 0 because they were never counted.
    pub fn score(&self, tokens: &[Token]) -> usize {
        tokens.iter().map(|t| self.get(&t.text)).sum()
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over `(word, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Returns the `k` most frequent words, highest count first.
    ///
    /// Equal counts are ordered alphabetically.
    pub fn most_common(&self, k: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(k);
        entries
    }
}
