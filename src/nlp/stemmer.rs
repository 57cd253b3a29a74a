//! Light suffix-stripping stemmer.
//!
//! Conflates common English inflections for frequency counting. Deliberately
//! smaller than a full Porter stemmer; over-stemming hurts more than
//! under-stemming when the only consumer is sentence scoring.

/// Stem a lowercase word.
pub fn stem(word: &str) -> String {
    let mut w = word.to_string();

    if let Some(base) = w.strip_suffix("ies") {
        if base.len() >= 2 {
            return format!("{base}y");
        }
    }
    if w.ends_with("sses") {
        w.truncate(w.len() - 2);
        return w;
    }
    if w.len() > 3 && w.ends_with('s') && !w.ends_with("ss") && !w.ends_with("us") {
        w.truncate(w.len() - 1);
    }
    if w.len() > 5 && w.ends_with("ing") {
        w.truncate(w.len() - 3);
        trim_doubled_consonant(&mut w);
        return w;
    }
    if w.len() > 4 && w.ends_with("ed") {
        w.truncate(w.len() - 2);
        trim_doubled_consonant(&mut w);
        return w;
    }
    if w.len() > 5 && w.ends_with("ment") {
        w.truncate(w.len() - 4);
        return w;
    }
    if w.len() > 4 && w.ends_with("ly") {
        w.truncate(w.len() - 2);
    }

    w
}

/// "runn" -> "run", "stopp" -> "stop".
fn trim_doubled_consonant(w: &mut String) {
    let chars: Vec<char> = w.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];
        if last == prev && last.is_ascii_alphabetic() && !"aeiou".contains(last) {
            w.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plurals() {
        assert_eq!(stem("sentences"), "sentence");
        assert_eq!(stem("cities"), "city");
        assert_eq!(stem("classes"), "class");
        assert_eq!(stem("gas"), "gas");
    }

    #[test]
    fn test_ing_forms() {
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("ranking"), "rank");
    }

    #[test]
    fn test_ed_forms() {
        assert_eq!(stem("stemmed"), "stem");
        assert_eq!(stem("ranked"), "rank");
    }

    #[test]
    fn test_preserved_short_words() {
        assert_eq!(stem("red"), "red");
        assert_eq!(stem("sing"), "sing");
        assert_eq!(stem("bus"), "bus");
    }

    #[test]
    fn test_inflections_conflate() {
        assert_eq!(stem(&stem("summaries")), stem("summary"));
        assert_eq!(stem("ranks"), stem("ranked"));
    }
}
