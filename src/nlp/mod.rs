//! Natural language support for the summarization strategies.
//!
//! Provides offset-preserving sentence segmentation, word tokenization,
//! stopword filtering, and a light stemmer.

mod sentences;
mod stemmer;
mod stopwords;
mod tokenizer;

pub use sentences::{sentences, Sentence};
pub use stemmer::stem;
pub use stopwords::StopwordFilter;
pub use tokenizer::tokenize;
