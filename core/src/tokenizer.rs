use std::collections::BTreeSet;

/// Split text into words on ASCII spaces. Empty pieces are dropped; no case folding or
/// punctuation stripping is applied, so `"Cat,"` and `"cat"` are distinct words.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// Text is indexable when it carries no ASCII control characters (bytes 0..=31).
pub fn is_valid_text(text: &str) -> bool {
    !text.bytes().any(|b| b < 32)
}

/// Collect stop words into a set; duplicates collapse and empty strings are ignored.
pub fn make_unique_non_empty<I, S>(words: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter(|w| !w.as_ref().is_empty())
        .map(|w| w.as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_spaces_only() {
        let words = split_into_words("  funny   pet,and\tnasty rat ");
        assert_eq!(words, vec!["funny", "pet,and\tnasty", "rat"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(split_into_words("").is_empty());
        assert!(split_into_words("    ").is_empty());
    }

    #[test]
    fn control_characters_are_invalid() {
        assert!(is_valid_text("plain words, punctuation! and UTF-8 ёж"));
        assert!(!is_valid_text("bad\u{1}word"));
        assert!(!is_valid_text("tab\there"));
        assert!(is_valid_text(""));
    }

    #[test]
    fn stop_words_collapse() {
        let set = make_unique_non_empty(["and", "with", "and", ""]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("and"));
    }
}
