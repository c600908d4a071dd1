use once_cell::sync::Lazy;
use regex::Regex;

// Compile once; input is already lowercased when this runs.
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+").unwrap());

/// Splits a text into lowercase words.
///
/// A word is a maximal run of ASCII letters. The whole text is case-folded
/// before runs are detected, so "Cat", "CAT" and "cat" all yield `cat`.
/// Everything else (digits, punctuation, whitespace, non-ASCII letters)
/// separates words and is dropped.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    lowered: String,
}

impl Tokenizer {
    pub fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
        }
    }

    /// Lazily yields the words in text order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        WORD_REGEX.find_iter(&self.lowered).map(|m| m.as_str())
    }
}

/// Fold a query word the same way the text is folded.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// True if `candidate` has the shape of a frequency table key.
pub(crate) fn is_word(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        Tokenizer::new(text).words().map(str::to_string).collect()
    }

    #[test]
    fn folds_case_before_splitting() {
        assert_eq!(words("Cat CAT cat"), vec!["cat", "cat", "cat"]);
    }

    #[test]
    fn digits_and_punctuation_separate_words() {
        assert_eq!(
            words("cat,dog;cat dog1dog"),
            vec!["cat", "dog", "cat", "dog", "dog"]
        );
    }

    #[test]
    fn empty_and_wordless_text_yield_nothing() {
        assert!(words("").is_empty());
        assert!(words("123 !? \t\n 42").is_empty());
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(words("café naïve"), vec!["caf", "na", "ve"]);
        assert!(words("日本語").is_empty());
    }

    #[test]
    fn kelvin_sign_folds_to_ascii() {
        // U+212A lowercases to a plain 'k'.
        assert_eq!(words("\u{212A}ing"), vec!["king"]);
    }

    #[test]
    fn every_word_is_a_table_key() {
        for word in Tokenizer::new("It's a DOG-eat-dog world, 2024!").words() {
            assert!(is_word(word), "{word:?}");
        }
        assert!(!is_word(""));
        assert!(!is_word("Cat"));
        assert!(!is_word("dog1"));
    }

    #[test]
    fn normalize_matches_tokenizer_fold() {
        assert_eq!(normalize_word("CaT"), "cat");
        assert_eq!(normalize_word("x-Y"), "x-y");
    }
}
