//! Sentence segmentation.
//!
//! Splits text on terminal punctuation while keeping each sentence as a
//! verbatim slice of the input, so downstream consumers can quote sentences
//! exactly and map them back to source offsets.

/// A sentence with its byte range in the source text.
///
/// `text` is always exactly `&source[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

// Trailing words that end with a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Gen", "Col", "Lt", "Sgt", "Rev", "Hon",
    "vs", "etc", "e.g", "i.e", "U.S", "U.K", "U.N", "No", "Inc", "Ltd", "Co",
];

/// Split `text` into sentences.
///
/// A sentence ends at a run of `.`, `!`, or `?` (plus any closing quote or
/// parenthesis) followed by whitespace or end of input, unless the word
/// before the period is a known abbreviation or a single initial.
pub fn sentences(text: &str) -> Vec<Sentence<'_>> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !matches!(bytes[i], b'.' | b'!' | b'?') {
            i += 1;
            continue;
        }

        let terminator = bytes[i];
        let mut end = i + 1;
        while end < bytes.len() && matches!(bytes[end], b'.' | b'!' | b'?' | b'"' | b'\'' | b')') {
            end += 1;
        }

        let at_eof = end >= bytes.len();
        let followed_by_space = !at_eof && bytes[end].is_ascii_whitespace();
        let abbreviated = terminator == b'.' && is_abbreviation(&text[start..i]);

        if (at_eof || followed_by_space) && !abbreviated {
            push_trimmed(text, start, end, &mut out);
            let mut next = end;
            while next < bytes.len() && bytes[next].is_ascii_whitespace() {
                next += 1;
            }
            start = next;
            i = next;
        } else {
            i = end;
        }
    }

    if start < text.len() {
        push_trimmed(text, start, text.len(), &mut out);
    }

    out
}

/// Whether the word ending `prefix` blocks a sentence break at the next period.
fn is_abbreviation(prefix: &str) -> bool {
    // The delimiter may be multi-byte (curly quote, em-dash), so step past
    // it by its own width rather than one byte.
    let word_start = prefix
        .char_indices()
        .rev()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '.'))
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);
    let word = &prefix[word_start..];

    if word.len() == 1 && word.chars().all(|c| c.is_ascii_uppercase()) {
        // Single initial, as in "Barack H. Obama".
        return true;
    }

    ABBREVIATIONS.contains(&word)
}

fn push_trimmed<'a>(text: &'a str, start: usize, end: usize, out: &mut Vec<Sentence<'a>>) {
    let raw = &text[start..end];
    let trimmed = raw.trim_start();
    let lead = raw.len() - trimmed.len();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        return;
    }
    let start = start + lead;
    out.push(Sentence {
        text: trimmed,
        start,
        end: start + trimmed.len(),
    });
}
