//! HTML rendering of entity annotations.

use crate::models::EntitySpan;
use crate::utils::html_escape;

/// Render `document` as an HTML fragment with entity spans highlighted.
///
/// With no spans the document comes back untouched, so annotation-free text
/// round-trips without spurious markup. With spans, all text is escaped and
/// each span becomes a `<mark>` with a label badge. Doubled blank lines are
/// collapsed to single ones for visual parity with how highlights display;
/// this normalization carries no semantic weight.
pub fn render_entities(document: &str, spans: &[EntitySpan]) -> String {
    if spans.is_empty() {
        return document.to_string();
    }

    let mut html = String::with_capacity(document.len() * 2);
    let mut cursor = 0;
    for span in spans {
        // Spans are sorted and disjoint; anything else is skipped.
        if span.start < cursor || span.end > document.len() || span.start > span.end {
            continue;
        }
        html.push_str(&html_escape(&document[cursor..span.start]));
        html.push_str(&format!(
            r#"<mark class="entity entity-{}">{}<span class="entity-label">{}</span></mark>"#,
            span.label.css_class(),
            html_escape(span.text(document)),
            span.label.as_str(),
        ));
        cursor = span.end;
    }
    html.push_str(&html_escape(&document[cursor..]));

    html.replace("\n\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityLabel;

    fn span(start: usize, end: usize, label: EntityLabel) -> EntitySpan {
        EntitySpan { start, end, label }
    }

    #[test]
    fn test_zero_spans_returns_original_unmodified() {
        let doc = "Plain text with <odd> & characters.\n\nAnd a blank line.";
        assert_eq!(render_entities(doc, &[]), doc);
    }

    #[test]
    fn test_single_span_highlighted() {
        let doc = "Barack Obama was president.";
        let html = render_entities(doc, &[span(0, 12, EntityLabel::Person)]);
        assert!(html.contains(r#"<mark class="entity entity-person">Barack Obama"#));
        assert!(html.contains(r#"<span class="entity-label">PERSON</span>"#));
        assert!(html.ends_with(" was president."));
        assert_eq!(html.matches("<mark").count(), 1);
    }

    #[test]
    fn test_surrounding_text_escaped() {
        let doc = "a<b & Paris";
        let html = render_entities(doc, &[span(6, 11, EntityLabel::Location)]);
        assert!(html.starts_with("a&lt;b &amp; "));
        assert!(html.contains(">Paris<"));
    }

    #[test]
    fn test_doubled_blank_lines_collapse() {
        let doc = "Paris\n\nrocks";
        let html = render_entities(doc, &[span(0, 5, EntityLabel::Location)]);
        assert!(!html.contains("\n\n"));
        assert!(html.contains("\nrocks"));
    }

    #[test]
    fn test_multiple_spans_in_order() {
        let doc = "Alice Smith visited Berlin.";
        let html = render_entities(
            doc,
            &[
                span(0, 11, EntityLabel::Person),
                span(20, 26, EntityLabel::Location),
            ],
        );
        let person_pos = html.find("entity-person").unwrap();
        let loc_pos = html.find("entity-location").unwrap();
        assert!(person_pos < loc_pos);
        assert!(html.contains("visited"));
    }

    #[test]
    fn test_out_of_bounds_span_skipped() {
        let doc = "short";
        let html = render_entities(doc, &[span(0, 99, EntityLabel::Person)]);
        assert_eq!(html, "short");
    }
}
