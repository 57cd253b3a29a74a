//! Named-entity recognition over English text.
//!
//! `NerModel` is the process-wide NER resource: loaded once at startup from
//! embedded lexicons and patterns, then shared read-only across requests.
//! A load failure is fatal at startup. Extraction produces byte-offset spans
//! that are sorted and never overlap.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{NlpError, Result};
use crate::models::{EntityLabel, EntitySpan};

const ORGANIZATION_LEXICON: &str = include_str!("../../assets/organizations.txt");
const LOCATION_LEXICON: &str = include_str!("../../assets/locations.txt");

/// Trait for pluggable NER backends.
///
/// The built-in `LexiconNerBackend` combines gazetteer lookup with name and
/// date patterns. A heavier model-based backend can implement this trait and
/// be swapped in via `NerModel::with_backend()`.
pub trait NerBackend: Send + Sync {
    /// Human-readable backend identifier.
    fn backend_id(&self) -> &str;

    /// Extract candidate entity spans. May contain overlaps; `NerModel`
    /// resolves them.
    fn extract(&self, text: &str) -> Vec<EntitySpan>;
}

/// The process-wide NER resource with an explicit load step.
pub struct NerModel {
    backend: Box<dyn NerBackend>,
}

impl NerModel {
    /// Load the default English model from the embedded lexicons.
    ///
    /// Fails with `ModelUnavailable` if a lexicon is empty or a pattern does
    /// not compile.
    pub fn load() -> Result<Self> {
        Ok(Self {
            backend: Box::new(LexiconNerBackend::load()?),
        })
    }

    /// Wrap a custom backend.
    pub fn with_backend(backend: Box<dyn NerBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_id(&self) -> &str {
        self.backend.backend_id()
    }

    /// Extract entity spans from `text`, sorted by offset and free of
    /// overlaps. Where candidates overlap, the earliest-starting span wins;
    /// on equal starts the longest wins.
    pub fn annotate(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = self.backend.extract(text);
        resolve_overlaps(&mut spans);
        spans
    }
}

fn resolve_overlaps(spans: &mut Vec<EntitySpan>) {
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    let mut kept: Vec<EntitySpan> = Vec::with_capacity(spans.len());
    for span in spans.drain(..) {
        match kept.last() {
            Some(prev) if span.start < prev.end => {}
            _ => kept.push(span),
        }
    }
    *spans = kept;
}

// ============================================================================
// LexiconNerBackend — built-in lexicon and pattern backend
// ============================================================================

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(?:President|Vice President|Prime Minister|Chancellor|Secretary|Minister|Director|Chairman|Chairwoman|General|Admiral|Colonel|Ambassador|Senator|Representative|Governor|Mayor|Judge|Justice|Dr\.|Prof\.|Mr\.|Mrs\.|Ms\.)\s+)([A-Z][a-z]+(?:\s+[A-Z]\.?)?\s+[A-Z][a-z]+)",
    )
    .expect("title pattern should compile")
});

static CAPITALIZED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]{2,}(?:\s+[A-Z]\.?\s+|\s+)[A-Z][a-z]{2,})\b")
        .expect("capitalized name pattern should compile")
});

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?\b|\b\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)(?:\s+\d{4})?\b|\b(?:19|20)\d{2}\b",
    )
    .expect("date pattern should compile")
});

// Leading words that make a two-word capitalized match a title phrase
// rather than a name ("President John" from "President John Kennedy").
static NAME_PREFIX_TITLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "President",
        "Vice",
        "Prime",
        "Minister",
        "Chancellor",
        "Secretary",
        "Director",
        "Chairman",
        "Chairwoman",
        "General",
        "Admiral",
        "Colonel",
        "Ambassador",
        "Senator",
        "Representative",
        "Governor",
        "Mayor",
        "Judge",
        "Justice",
        "The",
    ]
    .into_iter()
    .collect()
});

/// Lexicon-and-pattern NER backend tuned for English news-style prose.
///
/// Organizations and locations come from embedded gazetteers; person names
/// from title and capitalized-name patterns; dates from month/year patterns.
/// High precision on its target domain, no external models at runtime.
pub struct LexiconNerBackend {
    org_pattern: Regex,
    location_pattern: Regex,
    // Gazetteer entries double as name stopwords: a capitalized-pair match
    // that is a known org or location is not a person.
    known_phrases: HashSet<String>,
}

impl LexiconNerBackend {
    /// Compile the embedded lexicons into matchers.
    pub fn load() -> Result<Self> {
        let organizations = lexicon_entries(ORGANIZATION_LEXICON)?;
        let locations = lexicon_entries(LOCATION_LEXICON)?;

        let org_pattern = lexicon_pattern(&organizations)?;
        let location_pattern = lexicon_pattern(&locations)?;

        let known_phrases = organizations
            .iter()
            .chain(locations.iter())
            .map(|e| e.to_string())
            .collect();

        Ok(Self {
            org_pattern,
            location_pattern,
            known_phrases,
        })
    }
}

impl NerBackend for LexiconNerBackend {
    fn backend_id(&self) -> &str {
        "lexicon-en"
    }

    fn extract(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();

        for m in self.org_pattern.find_iter(text) {
            spans.push(EntitySpan {
                start: m.start(),
                end: m.end(),
                label: EntityLabel::Organization,
            });
        }

        for m in self.location_pattern.find_iter(text) {
            spans.push(EntitySpan {
                start: m.start(),
                end: m.end(),
                label: EntityLabel::Location,
            });
        }

        for cap in TITLE_PATTERN.captures_iter(text) {
            if let Some(name) = cap.get(1) {
                if is_plausible_name(name.as_str()) {
                    spans.push(EntitySpan {
                        start: name.start(),
                        end: name.end(),
                        label: EntityLabel::Person,
                    });
                }
            }
        }

        for cap in CAPITALIZED_NAME.captures_iter(text) {
            if let Some(name) = cap.get(1) {
                let candidate = name.as_str();
                if is_plausible_name(candidate)
                    && !self.known_phrases.contains(candidate)
                    && !starts_with_title(candidate)
                {
                    spans.push(EntitySpan {
                        start: name.start(),
                        end: name.end(),
                        label: EntityLabel::Person,
                    });
                }
            }
        }

        for m in DATE_PATTERN.find_iter(text) {
            spans.push(EntitySpan {
                start: m.start(),
                end: m.end(),
                label: EntityLabel::Date,
            });
        }

        spans
    }
}

/// Non-empty, non-comment lexicon lines.
fn lexicon_entries(lexicon: &str) -> Result<Vec<String>> {
    let entries: Vec<String> = lexicon
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();
    if entries.is_empty() {
        return Err(NlpError::ModelUnavailable(
            "embedded lexicon has no entries".into(),
        ));
    }
    Ok(entries)
}

/// One alternation over all entries, longest first so the regex prefers the
/// longest phrase at a given position.
fn lexicon_pattern(entries: &[String]) -> Result<Regex> {
    let mut sorted: Vec<&str> = entries.iter().map(String::as_str).collect();
    sorted.sort_by_key(|e| std::cmp::Reverse(e.len()));
    let alternation = sorted
        .iter()
        .map(|e| regex::escape(e))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b"))
        .map_err(|e| NlpError::ModelUnavailable(format!("lexicon pattern failed to compile: {e}")))
}

fn is_plausible_name(name: &str) -> bool {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 || parts.len() > 4 {
        return false;
    }
    parts.iter().all(|p| {
        let first = p.chars().next().unwrap_or('a');
        first.is_uppercase() && p.len() >= 2
    })
}

fn starts_with_title(name: &str) -> bool {
    name.split_whitespace()
        .next()
        .map(|first| NAME_PREFIX_TITLES.contains(first))
        .unwrap_or(false)
}
