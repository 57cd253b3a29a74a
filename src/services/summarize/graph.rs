//! Graph-based sentence ranking.
//!
//! Builds a sentence graph from TF-IDF cosine similarity and scores
//! sentences with power-iteration eigenvector centrality. Output order is
//! rank order, not document order; callers depend on that contract.

use std::collections::{HashMap, HashSet};

use crate::error::{NlpError, Result};
use crate::nlp::{self, StopwordFilter};

/// Cosine-similarity floor below which sentences are not linked.
const SIMILARITY_THRESHOLD: f64 = 0.1;
/// Damping factor for power iteration.
const DAMPING: f64 = 0.85;
const MAX_ITERATIONS: usize = 100;
const CONVERGENCE: f64 = 1e-6;

/// Summarize `document`: the top `limit` sentences joined by single spaces,
/// highest-ranked first.
pub fn graph_rank_summary(document: &str, limit: usize) -> Result<String> {
    Ok(graph_rank_sentences(document, limit)?.join(" "))
}

/// The top `limit` sentences in rank order, each a verbatim slice of
/// `document`. Ties rank by document position.
pub fn graph_rank_sentences(document: &str, limit: usize) -> Result<Vec<&str>> {
    let sents = nlp::sentences(document);
    if sents.len() < 2 {
        return Err(NlpError::Input(
            "text is too short to summarize; at least two sentences are required".into(),
        ));
    }

    let stopwords = StopwordFilter::english();
    let sentence_terms: Vec<Vec<String>> = sents
        .iter()
        .map(|s| {
            nlp::tokenize(s.text)
                .into_iter()
                .filter(|t| !stopwords.is_stopword(t))
                .map(|t| nlp::stem(&t))
                .collect()
        })
        .collect();

    let n = sents.len();
    let vectors = tfidf_vectors(&sentence_terms, n);

    // Binary adjacency over the similarity threshold.
    let mut adjacent = vec![vec![false; n]; n];
    let mut degree = vec![0.0_f64; n];
    for i in 0..n {
        for j in (i + 1)..n {
            if cosine(&vectors[i], &vectors[j]) >= SIMILARITY_THRESHOLD {
                adjacent[i][j] = true;
                adjacent[j][i] = true;
                degree[i] += 1.0;
                degree[j] += 1.0;
            }
        }
    }

    let scores = power_iteration(&adjacent, &degree, n);

    // Rank order: descending score, ties broken by document position.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    Ok(order
        .into_iter()
        .take(limit)
        .map(|i| sents[i].text)
        .collect())
}

/// TF-IDF term vectors, one per sentence.
fn tfidf_vectors(sentence_terms: &[Vec<String>], n: usize) -> Vec<HashMap<String, f64>> {
    let mut df: HashMap<&str, usize> = HashMap::new();
    for terms in sentence_terms {
        let unique: HashSet<&str> = terms.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    sentence_terms
        .iter()
        .map(|terms| {
            let mut tf: HashMap<String, f64> = HashMap::new();
            for term in terms {
                *tf.entry(term.clone()).or_insert(0.0) += 1.0;
            }
            for (term, weight) in tf.iter_mut() {
                let idf = (n as f64 / df[term.as_str()] as f64).ln() + 1.0;
                *weight *= idf;
            }
            tf
        })
        .collect()
}

fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let dot: f64 = a
        .iter()
        .filter_map(|(term, w)| b.get(term).map(|v| w * v))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    dot / (norm_a * norm_b)
}

/// Eigenvector centrality via damped power iteration. Sentences with no
/// links spread their mass uniformly, as dangling nodes do in PageRank.
fn power_iteration(adjacent: &[Vec<bool>], degree: &[f64], n: usize) -> Vec<f64> {
    let teleport = (1.0 - DAMPING) / n as f64;
    let mut scores = vec![1.0 / n as f64; n];
    let mut next = vec![0.0_f64; n];

    for _ in 0..MAX_ITERATIONS {
        let dangling: f64 = (0..n).filter(|&i| degree[i] == 0.0).map(|i| scores[i]).sum();
        let base = teleport + DAMPING * dangling / n as f64;
        next.fill(base);

        for i in 0..n {
            if degree[i] > 0.0 {
                let share = DAMPING * scores[i] / degree[i];
                for j in 0..n {
                    if adjacent[i][j] {
                        next[j] += share;
                    }
                }
            }
        }

        let delta: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();
        std::mem::swap(&mut scores, &mut next);
        if delta <= CONVERGENCE {
            break;
        }
    }

    scores
}
