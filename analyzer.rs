use std::fmt;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::{AnalyzerError, Result};
use crate::frequency::FrequencyTable;
use crate::tokenizer::normalize_word;
use crate::word_frequency::WordFrequency;

// Debug output shows at most this many characters of the text...
const PREVIEW_CHARS: usize = 29;
// ...once the text is longer than this.
const PREVIEW_THRESHOLD: usize = 32;

/// Case-insensitive word frequency statistics for one text.
///
/// The text is only scanned the first time frequency data is needed; the
/// resulting [`FrequencyTable`] is kept for the lifetime of the analyzer and
/// shared by every query. The analyzer is `Sync`: when several threads race
/// on first access the table is still built once and published whole.
pub struct WordFrequencyAnalyzer {
    text: String,
    frequencies: OnceCell<FrequencyTable>,
}

impl WordFrequencyAnalyzer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            frequencies: OnceCell::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Frequency of every word in the text, computed on first access.
    pub fn word_frequencies(&self) -> &FrequencyTable {
        self.frequencies.get_or_init(|| {
            let table = FrequencyTable::from_text(&self.text);
            debug!(
                bytes = self.text.len(),
                words = table.total(),
                distinct = table.len(),
                "computed word frequencies"
            );
            table
        })
    }

    /// Highest frequency of any word, 0 if the text has no words.
    pub fn calculate_highest_frequency(&self) -> usize {
        self.word_frequencies().highest()
    }

    /// Frequency of `word`, ignoring case. Unknown words count 0.
    pub fn calculate_frequency_for_word(&self, word: &str) -> usize {
        self.word_frequencies().get(&normalize_word(word))
    }

    /// The `n` most frequent words, ties in ascending alphabetical order.
    ///
    /// Fewer than `n` entries are returned when the text has fewer distinct
    /// words. A negative `n` is rejected with [`AnalyzerError::InvalidArgument`].
    pub fn calculate_most_frequent_n_words(&self, n: i64) -> Result<Vec<WordFrequency>> {
        if n < 0 {
            return Err(AnalyzerError::InvalidArgument { n });
        }
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        Ok(self.word_frequencies().most_frequent(n))
    }
}

impl fmt::Debug for WordFrequencyAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = if self.text.chars().count() > PREVIEW_THRESHOLD {
            let head: String = self.text.chars().take(PREVIEW_CHARS).collect();
            format!("{head}...")
        } else {
            self.text.clone()
        };
        f.debug_struct("WordFrequencyAnalyzer")
            .field("text", &preview)
            .finish()
    }
}
