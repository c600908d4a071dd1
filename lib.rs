//! Case-insensitive word frequency analysis.
//!
//! Words are maximal runs of the ASCII letters `[a-zA-Z]`; every other
//! character separates words. Counting, lookups and rankings all operate on
//! the lowercased words.
//!
//! ```
//! use word_frequency_analyzer::WordFrequencyAnalyzer;
//!
//! let analyzer = WordFrequencyAnalyzer::new("The sun shines over the lake");
//! assert_eq!(analyzer.calculate_highest_frequency(), 2);
//! assert_eq!(analyzer.calculate_frequency_for_word("THE"), 2);
//!
//! let top = analyzer.calculate_most_frequent_n_words(3).unwrap();
//! assert_eq!(top, vec![("the", 2), ("lake", 1), ("over", 1)]);
//! ```

pub mod analyzer;
pub mod error;
pub mod frequency;
pub mod report;
pub mod tokenizer;
pub mod word_frequency;

pub use analyzer::WordFrequencyAnalyzer;
pub use error::{AnalyzerError, Result};
pub use frequency::FrequencyTable;
pub use report::{OutputFormat, Report, ReportOptions};
pub use word_frequency::WordFrequency;
