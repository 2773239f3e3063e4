//! # precis - Extractive Text Summarization
//!
//! precis picks the most important sentences of a document by word
//! frequency and returns them, verbatim and in their original order.
//!
//! ## Overview
//!
//! Every word that is neither a stop word nor punctuation is counted across
//! the whole document. Each sentence is then scored by summing the counts of
//! its words, and the highest scoring sentences form the summary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! // Shared English stop words, three sentences
//! let summary = precis::summarize("Some long text. With many sentences.", 3)?;
//! println!("{}", summary);
//! # Ok::<(), precis::PrecisError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Sentence segmentation, tokenization and stop words
//! - [`scoring`] - Frequency table and top-k sentence selection
//! - [`summarizer`] - The [`Summarizer`] pipeline
//! - [`shell`] - Session adapter used by the interactive front end
//! - [`config`] - TOML-loadable settings
//!
//! ## Custom Stop Words
//!
//! ```rust
//! use precis::{StopWords, Summarizer};
//! use std::sync::Arc;
//!
//! let stop_words = Arc::new(StopWords::from_list(&["the", "a", "is"]));
//! let summarizer = Summarizer::new(stop_words);
//! let summary = summarizer.summarize("The cat is here. A cat, a cat!", 1)?;
//! assert_eq!(summary, "A cat, a cat!");
//! # Ok::<(), precis::PrecisError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod scoring;
pub mod shell;
pub mod summarizer;
pub mod text;

// Re-export commonly used types
pub use config::{Config, SummaryConfig, TextConfig};
pub use error::{PrecisError, Result};
pub use scoring::{FrequencyTable, ScoredSentence, SentenceSelector};
pub use shell::{Event, Outcome, Session};
pub use summarizer::{
    load_stop_words, sentence_count, summarize, summarize_default, Summarizer, Summary,
};
pub use text::{Language, Normalizer, Sentence, SentenceSegmenter, StopWords, Token, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentences in a summary when the caller does not choose.
pub const DEFAULT_SENTENCE_COUNT: usize = 3;
