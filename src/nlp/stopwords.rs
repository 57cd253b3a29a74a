//! Stopword filtering backed by the `stop-words` word lists.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// English stopword filter.
///
/// Only English is supported; the summarizers pre-process text in
/// language-dependent ways and this application targets English input.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    /// Build the English filter from the bundled word list.
    pub fn english() -> Self {
        let words = get(LANGUAGE::English).into_iter().collect();
        Self { words }
    }

    /// Check if a word is a stopword. Case-insensitive.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stopwords() {
        let filter = StopwordFilter::english();
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
        assert!(filter.is_stopword("The"));
    }

    #[test]
    fn test_content_words_pass() {
        let filter = StopwordFilter::english();
        assert!(!filter.is_stopword("summarization"));
        assert!(!filter.is_stopword("president"));
    }
}
