//! Frequency scoring and sentence selection.

mod frequency;
mod selector;

pub use frequency::FrequencyTable;
pub use selector::{ScoredSentence, SentenceSelector};
