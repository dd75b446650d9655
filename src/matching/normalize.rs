//! Title normalization.
//!
//! Event titles and client names are typed by humans, so the matcher and
//! the confirmation ledger both canonicalize text before comparing it.
//! Normalization must be identical on both sides: a confirmation saved for
//! a title has to be found again no matter how the calendar renders it.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalizes a title for matching and confirmation lookup.
///
/// Applies NFD decomposition and strips combining marks (so "Παπαδοπούλου"
/// and "Παπαδοπουλου" compare equal), lowercases, unifies dash variants to
/// a plain hyphen, and collapses runs of whitespace to single spaces.
///
/// # Example
///
/// ```
/// use payroll_engine::matching::normalize_title;
///
/// assert_eq!(normalize_title("  Maria   PAPADOPOULOU "), "maria papadopoulou");
/// assert_eq!(normalize_title("Παπαδοπούλου"), "παπαδοπουλου");
/// ```
pub fn normalize_title(title: &str) -> String {
    let stripped: String = title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(unify_dash)
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a normalized title into whitespace-delimited tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

fn unify_dash(c: char) -> char {
    match c {
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize_title("  Maria \t PAPADOPOULOU  "),
            "maria papadopoulou"
        );
    }

    #[test]
    fn test_strips_greek_diacritics() {
        assert_eq!(normalize_title("Παπαδοπούλου"), "παπαδοπουλου");
        assert_eq!(normalize_title("Γιώργος"), "γιωργος");
    }

    #[test]
    fn test_strips_latin_diacritics() {
        assert_eq!(normalize_title("José Müller"), "jose muller");
    }

    #[test]
    fn test_unifies_dash_variants() {
        assert_eq!(
            normalize_title("Papadopoulou\u{2013}Maria"),
            "papadopoulou-maria"
        );
        assert_eq!(
            normalize_title("Papadopoulou\u{2014}Maria"),
            "papadopoulou-maria"
        );
    }

    #[test]
    fn test_equal_titles_normalize_identically() {
        assert_eq!(
            normalize_title("ΠΑΠΑΔΟΠΟΎΛΟΥ Μαρία"),
            normalize_title("παπαδοπουλου μαρια")
        );
    }

    #[test]
    fn test_tokenize_splits_on_whitespace_only() {
        assert_eq!(
            tokenize("maria papadopoulou-ioannou"),
            vec!["maria", "papadopoulou-ioannou"]
        );
    }

    #[test]
    fn test_empty_title_normalizes_to_empty() {
        assert_eq!(normalize_title("   "), "");
        assert!(tokenize("").is_empty());
    }
}
