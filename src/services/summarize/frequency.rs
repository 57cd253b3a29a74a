//! Word-frequency extractive summarization.
//!
//! Scores every sentence by the normalized document-wide frequency of its
//! content words (after stopword removal and stemming) and keeps roughly the
//! top fifth of sentences, in document order.

use std::collections::HashMap;

use crate::error::{NlpError, Result};
use crate::nlp::{self, StopwordFilter};

/// Fraction of sentences kept in the summary.
const KEEP_RATIO: f64 = 0.2;

/// Summarize `document`, sentences joined by newlines in document order.
pub fn frequency_summary(document: &str) -> Result<String> {
    Ok(frequency_sentences(document)?.join("\n"))
}

/// The selected sentences, each a verbatim slice of `document`.
pub fn frequency_sentences(document: &str) -> Result<Vec<&str>> {
    let sents = nlp::sentences(document);
    if sents.len() < 2 {
        return Err(NlpError::Input(
            "text is too short to summarize; at least two sentences are required".into(),
        ));
    }

    let stopwords = StopwordFilter::english();

    // Stemmed content-word frequency over the whole document.
    let mut freq: HashMap<String, f64> = HashMap::new();
    let mut sentence_terms: Vec<Vec<String>> = Vec::with_capacity(sents.len());
    for sent in &sents {
        let terms: Vec<String> = nlp::tokenize(sent.text)
            .into_iter()
            .filter(|t| !stopwords.is_stopword(t))
            .map(|t| nlp::stem(&t))
            .collect();
        for term in &terms {
            *freq.entry(term.clone()).or_insert(0.0) += 1.0;
        }
        sentence_terms.push(terms);
    }

    let max_freq = freq.values().copied().fold(0.0_f64, f64::max);
    if max_freq == 0.0 {
        return Err(NlpError::Input(
            "text contains no content words to rank".into(),
        ));
    }

    // Mean normalized term frequency per sentence.
    let mut scored: Vec<(usize, f64)> = sentence_terms
        .iter()
        .enumerate()
        .map(|(i, terms)| {
            let score = if terms.is_empty() {
                0.0
            } else {
                terms.iter().map(|t| freq[t] / max_freq).sum::<f64>() / terms.len() as f64
            };
            (i, score)
        })
        .collect();

    let keep = ((sents.len() as f64 * KEEP_RATIO).ceil() as usize).max(1);
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut selected: Vec<usize> = scored.into_iter().take(keep).map(|(i, _)| i).collect();
    selected.sort_unstable();

    Ok(selected.into_iter().map(|i| sents[i].text).collect())
}
