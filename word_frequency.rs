use std::fmt;

use serde::{Deserialize, Serialize};

/// A word together with how often it occurs in a text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordFrequency {
    word: String,
    frequency: usize,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, frequency: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn into_parts(self) -> (String, usize) {
        (self.word, self.frequency)
    }
}

impl From<(String, usize)> for WordFrequency {
    fn from((word, frequency): (String, usize)) -> Self {
        Self { word, frequency }
    }
}

impl PartialEq<(&str, usize)> for WordFrequency {
    fn eq(&self, (word, frequency): &(&str, usize)) -> bool {
        self.word == *word && self.frequency == *frequency
    }
}

impl fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_conversions() {
        let entry = WordFrequency::from(("cat".to_string(), 3));
        assert_eq!(entry.word(), "cat");
        assert_eq!(entry.frequency(), 3);
        assert_eq!(entry, ("cat", 3));
        assert_eq!(entry.to_string(), "cat: 3");
        assert_eq!(entry.into_parts(), ("cat".to_string(), 3));
    }
}
