//! Word tokenization.

/// Split text into lowercase word tokens.
///
/// Tokens are maximal runs of alphanumeric characters, with internal
/// apostrophes allowed ("don't" stays one token).
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}
