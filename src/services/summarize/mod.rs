//! Extractive summarization.
//!
//! Two interchangeable strategies produce a condensation of a document's own
//! sentences; no text is ever generated. Failures (text too short to rank)
//! are surfaced to the caller, never masked with a partial result.

mod frequency;
mod graph;

pub use frequency::{frequency_sentences, frequency_summary};
pub use graph::{graph_rank_sentences, graph_rank_summary};

use serde::{Deserialize, Serialize};

use crate::error::{NlpError, Result};

/// Number of sentences the graph-rank strategy returns.
pub const GRAPH_RANK_SENTENCES: usize = 3;

/// Summarization strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Word-frequency sentence scoring after stopword removal and stemming;
    /// output keeps document order.
    ExtractiveFrequency,
    /// Sentence-graph eigenvector-centrality ranking; output keeps rank
    /// order, which is this strategy's external contract.
    GraphRank,
}

impl std::str::FromStr for Strategy {
    type Err = NlpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extractive-frequency" | "frequency" | "gensim" => Ok(Strategy::ExtractiveFrequency),
            "graph-rank" | "lexrank" => Ok(Strategy::GraphRank),
            other => Err(NlpError::Input(format!(
                "unknown summarizer strategy {other:?}"
            ))),
        }
    }
}

/// Summarize `document` with the selected strategy.
pub fn summarize(document: &str, strategy: Strategy) -> Result<String> {
    match strategy {
        Strategy::ExtractiveFrequency => frequency_summary(document),
        Strategy::GraphRank => graph_rank_summary(document, GRAPH_RANK_SENTENCES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "extractive-frequency".parse::<Strategy>().unwrap(),
            Strategy::ExtractiveFrequency
        );
        assert_eq!("gensim".parse::<Strategy>().unwrap(), Strategy::ExtractiveFrequency);
        assert_eq!("graph-rank".parse::<Strategy>().unwrap(), Strategy::GraphRank);
        assert_eq!("LexRank".parse::<Strategy>().unwrap(), Strategy::GraphRank);
        assert!("markov".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_short_text_errors_with_either_strategy() {
        for strategy in [Strategy::ExtractiveFrequency, Strategy::GraphRank] {
            assert!(summarize("", strategy).is_err());
            assert!(summarize("One lonely sentence.", strategy).is_err());
        }
    }
}
