//! Text processing module for sentence segmentation, tokenization and stop words.

mod normalizer;
mod segmenter;
pub mod stopwords;
mod tokenizer;

pub use normalizer::Normalizer;
pub use segmenter::{Sentence, SentenceSegmenter};
pub use stopwords::{Language, StopWords};
pub use tokenizer::{Token, Tokenizer};
