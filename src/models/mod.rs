//! Request-scoped value types.
//!
//! Everything here is transient: created for a single request, never mutated,
//! never persisted. A document is plain text, a summary is a condensation of
//! its sentences, and entity spans are byte ranges over the document.

use serde::{Deserialize, Serialize};

/// Classification of a recognized entity span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Date,
}

impl EntityLabel {
    /// Badge text shown next to a highlighted span.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Organization => "ORG",
            EntityLabel::Location => "LOC",
            EntityLabel::Date => "DATE",
        }
    }

    /// CSS class suffix for span styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            EntityLabel::Person => "person",
            EntityLabel::Organization => "organization",
            EntityLabel::Location => "location",
            EntityLabel::Date => "date",
        }
    }
}

/// A recognized entity: byte offsets into the source document plus a label.
///
/// Offsets always fall on character boundaries of the document the span was
/// extracted from. Spans returned by the annotator are sorted by `start` and
/// never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
}

impl EntitySpan {
    /// The covered slice of `document`.
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }

    /// Whether two spans cover any common byte.
    pub fn overlaps(&self, other: &EntitySpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}
