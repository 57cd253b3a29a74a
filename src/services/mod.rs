//! The functional core: summarization, fetching, annotation, rendering.
//!
//! Everything here is a pure request/response transformation over shared
//! read-only resources; there is no mutable state across requests.

pub mod fetch;
pub mod ner;
pub mod preview;
pub mod render;
pub mod summarize;

use crate::services::ner::NerModel;

/// Annotate `document` with the loaded model and render the result as an
/// HTML fragment.
pub fn annotate_entities(model: &NerModel, document: &str) -> String {
    let spans = model.annotate(document);
    render::render_entities(document, &spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_entities_end_to_end() {
        let model = NerModel::load().unwrap();
        let html = annotate_entities(&model, "Barack Obama was president.");
        assert_eq!(html.matches("<mark").count(), 1);
        assert!(html.contains("Barack Obama"));
        assert!(html.contains("PERSON"));
    }

    #[test]
    fn test_annotate_entities_plain_text_round_trips() {
        let model = NerModel::load().unwrap();
        let doc = "nothing notable here at all";
        assert_eq!(annotate_entities(&model, doc), doc);
    }
}
