//! Regex-assisted sentence segmentation.
//!
//! Sentence boundaries are found with a protect-and-scan approach: periods
//! that belong to abbreviations, initials, titles, numbers and suspension
//! points are marked first, then the text is scanned for runs of `.`, `!`
//! and `?` followed by whitespace. Every sentence is a verbatim slice of the
//! input, so callers can always map a sentence back to its byte span.

use crate::error::{PrecisError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// "et al."
static COMPOSITE_ABBREV: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bet al\.").unwrap());

static SUSPENSION_POINTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());

static FLOAT_POINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]\.[0-9]").unwrap());

static LEADING_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\s)\.[0-9]").unwrap());

// U.S.A., e.g., i.e.
static ABBREVIATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:[A-Za-z]\.){2,}").unwrap());

// Single capitals except the pronoun "I"
static INITIALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-HJ-Z]\.").unwrap());

static TITLES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:Mr|Mrs|Ms|Dr|Prof|Sr|Jr|St|Mt|Rev|Gen|Col|Capt|Lt|Sgt|Hon|Fig|Inc|Ltd|vs|approx|dept)\.",
    )
    .unwrap()
});

/// Characters that may trail a sentence ender and still belong to the sentence.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{2019}', '\u{201D}', '\u{00BB}'];

const ENDERS: &[char] = &['.', '!', '?'];

/// A sentence with its position in the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The sentence text, exactly as it appears in the document.
    pub text: String,
    /// Start position in the document (byte offset).
    pub start: usize,
    /// End position in the document (byte offset, exclusive).
    pub end: usize,
    /// Ordinal position of the sentence in the document.
    pub index: usize,
}

/// Splits documents into sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Creates a new segmenter.
    pub fn new() -> Self {
        Self
    }

    /// Segments a document into sentences.
    ///
    /// Handles common edge cases including:
    /// - Titles (Dr., Mr., Prof.) and initials (H. P. Luhn)
    /// - Dotted abbreviations (U.S.A., e.g.) and "et al."
    /// - Floating-point numbers (3.14, .625)
    /// - Suspension points (...)
    /// - Closing quotes and parentheses after the ender ("Hello." and (Aside.))
    ///
    /// Empty or whitespace-only input yields no sentences; input without any
    /// ender yields a single sentence.
    ///
    /// # Example
    /// ```
    /// use precis::text::SentenceSegmenter;
    ///
    /// let sentences = SentenceSegmenter::new()
    ///     .segment("Dr. Smith went to Washington. He arrived at 3.14 p.m.")
    ///     .unwrap();
    /// assert_eq!(sentences.len(), 2);
    /// ```
    pub fn segment(&self, text: &str) -> Result<Vec<Sentence>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let protected = protected_periods(text);
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            if !ENDERS.contains(&c) || (c == '.' && protected[pos]) {
                continue;
            }

            // Swallow the rest of the ender run and any closing quotes or brackets
            let mut end = pos + c.len_utf8();
            while let Some(&(next_pos, next)) = chars.peek() {
                if ENDERS.contains(&next) || CLOSERS.contains(&next) {
                    end = next_pos + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let at_boundary = match chars.peek() {
                None => true,
                Some(&(_, next)) => next.is_whitespace(),
            };
            if at_boundary {
                push_trimmed(text, start, end, &mut sentences)?;
                start = end;
            }
        }

        push_trimmed(text, start, text.len(), &mut sentences)?;
        Ok(sentences)
    }

    /// Segments a document and returns only the sentence strings.
    pub fn segment_to_strings(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.segment(text)?.into_iter().map(|s| s.text).collect())
    }
}

/// Marks every byte offset holding a period that must not end a sentence.
fn protected_periods(text: &str) -> Vec<bool> {
    let mut protected = vec![false; text.len()];

    let patterns: [&Regex; 7] = [
        &COMPOSITE_ABBREV,
        &SUSPENSION_POINTS,
        &FLOAT_POINT,
        &LEADING_DECIMAL,
        &ABBREVIATION,
        &INITIALS,
        &TITLES,
    ];

    for re in patterns {
        for m in re.find_iter(text) {
            for (offset, c) in m.as_str().char_indices() {
                if c == '.' {
                    protected[m.start() + offset] = true;
                }
            }
        }
    }

    protected
}

/// Pushes `text[start..end]` with surrounding whitespace removed, if anything is left.
fn push_trimmed(text: &str, start: usize, end: usize, sentences: &mut Vec<Sentence>) -> Result<()> {
    let slice = text.get(start..end).ok_or_else(|| {
        PrecisError::TokenizationFailure(format!(
            "sentence span {}..{} is not on a character boundary",
            start, end
        ))
    })?;

    let trimmed_start = start + (slice.len() - slice.trim_start().len());
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    sentences.push(Sentence {
        text: trimmed.to_string(),
        start: trimmed_start,
        end: trimmed_start + trimmed.len(),
        index: sentences.len(),
    });
    Ok(())
}
