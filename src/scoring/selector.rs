//! Top-k sentence selection.
//!
//! Sentences are ranked by score with ties going to the earlier position,
//! then the winners are put back into document order. Scores are tracked
//! per position, so repeated sentences are independent candidates.

use crate::error::{PrecisError, Result};
use crate::scoring::FrequencyTable;
use crate::text::{Sentence, Token};

/// A sentence with its frequency score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    /// The sentence.
    pub sentence: Sentence,
    /// Sum of the frequency counts of its tokens.
    pub score: usize,
}

/// Selects the highest scoring sentences.
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    sentence_count: usize,
}

impl SentenceSelector {
    /// Creates a selector returning up to `sentence_count` sentences.
    ///
    /// Fails with [`PrecisError::InvalidArgument`] when the count is zero.
    pub fn new(sentence_count: usize) -> Result<Self> {
        if sentence_count == 0 {
            return Err(PrecisError::InvalidArgument(
                "sentence_count must be a positive integer".to_string(),
            ));
        }
        Ok(Self { sentence_count })
    }

    /// The requested number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Scores sentences against a frequency table.
    ///
    /// `tokens` holds the tokens of each sentence, in the same order as `sentences`.
    pub fn score(
        sentences: &[Sentence],
        tokens: &[Vec<Token>],
        frequencies: &FrequencyTable,
    ) -> Vec<ScoredSentence> {
        sentences
            .iter()
            .zip(tokens)
            .map(|(sentence, sentence_tokens)| ScoredSentence {
                sentence: sentence.clone(),
                score: frequencies.score(sentence_tokens),
            })
            .collect()
    }

    /// Picks the top sentences and returns them in document order.
    ///
    /// Returns every sentence when fewer than the requested count exist.
    pub fn select(&self, scored: &[ScoredSentence]) -> Vec<ScoredSentence> {
        let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.sentence.index.cmp(&b.sentence.index))
        });
        ranked.truncate(self.sentence_count);

        ranked.sort_by_key(|s| s.sentence.index);
        ranked.into_iter().cloned().collect()
    }
}
