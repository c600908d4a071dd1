use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

use crate::tokenizer::{Tokenizer, is_word};
use crate::word_frequency::WordFrequency;

/// Word -> occurrence count for one text.
///
/// Keys are non-empty lowercase ASCII words and the counts add up to the
/// number of words in the text. A table never changes once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Tokenize `text` and count every word.
    pub fn from_text(text: &str) -> Self {
        let table: Self = Tokenizer::new(text).words().collect();
        debug_assert!(table.counts.keys().all(|word| is_word(word)));
        table
    }

    /// Count for `word`, 0 when absent. The lookup is exact; callers fold case.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of words in the text, duplicates included.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    pub fn as_map(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Highest count in the table, or 0 for a table without words.
    pub fn highest(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// The `n` most frequent words, by count descending then word ascending.
    ///
    /// Returns every word when the table holds fewer than `n`.
    pub fn most_frequent(&self, n: usize) -> Vec<WordFrequency> {
        if n == 0 {
            return Vec::new();
        }
        self.counts
            .iter()
            .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
            .take(n)
            .map(|(word, &count)| WordFrequency::new(word.clone(), count))
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in words {
            // Avoid allocating a key for words already seen.
            match counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(word.to_string(), 1);
                }
            }
        }
        Self { counts }
    }
}

impl PartialEq<HashMap<String, usize>> for FrequencyTable {
    fn eq(&self, other: &HashMap<String, usize>) -> bool {
        &self.counts == other
    }
}

impl From<FrequencyTable> for HashMap<String, usize> {
    fn from(table: FrequencyTable) -> Self {
        table.counts
    }
}
