//! Preview-length composition for the URL flow.
//!
//! The full fetched text's length and a user-chosen divisor give a
//! truncation index: `short_length = round(len / divisor)`. Lengths are
//! counted in characters, and the cut lands on a character boundary.

/// Bounds the UI enforces on the preview divisor.
pub const MIN_PREVIEW_DIVISOR: u32 = 50;
pub const MAX_PREVIEW_DIVISOR: u32 = 100;

/// Number of characters shown as a preview. Ties round to even.
pub fn preview_length(full_text: &str, divisor: u32) -> usize {
    let divisor = divisor.clamp(MIN_PREVIEW_DIVISOR, MAX_PREVIEW_DIVISOR) as usize;
    let chars = full_text.chars().count();
    let quotient = chars / divisor;
    match (2 * (chars % divisor)).cmp(&divisor) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient % 2),
    }
}

/// The first `preview_length` characters of `full_text`. Empty input yields
/// an empty preview.
pub fn preview(full_text: &str, divisor: u32) -> &str {
    let length = preview_length(full_text, divisor);
    match full_text.char_indices().nth(length) {
        Some((idx, _)) => &full_text[..idx],
        None => full_text,
    }
}
