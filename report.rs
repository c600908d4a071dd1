use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::analyzer::WordFrequencyAnalyzer;
use crate::error::Result;
use crate::tokenizer::normalize_word;
use crate::word_frequency::WordFrequency;

const WORD_COLUMN_WIDTH: usize = 15; // matches the `{:<15}` word column
const MAX_BAR_WIDTH: usize = 40; // longest '#' bar in text output

/// What a report should contain besides the summary numbers.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// How many ranked words to include. Negative values are rejected.
    pub top: i64,
    /// Words to look up individually, reported in this order.
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format `{other}` (expected text or json)")),
        }
    }
}

/// Summary of one analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub source: String,
    pub total_words: usize,
    pub distinct_words: usize,
    pub highest_frequency: usize,
    pub top: Vec<WordFrequency>,
    pub queries: Vec<WordFrequency>,
}

impl Report {
    pub fn build(
        source: impl Into<String>,
        analyzer: &WordFrequencyAnalyzer,
        options: &ReportOptions,
    ) -> Result<Self> {
        let top = analyzer.calculate_most_frequent_n_words(options.top)?;
        let table = analyzer.word_frequencies();
        let queries = options
            .words
            .iter()
            .map(|word| {
                WordFrequency::new(
                    normalize_word(word),
                    analyzer.calculate_frequency_for_word(word),
                )
            })
            .collect();

        Ok(Self {
            source: source.into(),
            total_words: table.total(),
            distinct_words: table.len(),
            highest_frequency: analyzer.calculate_highest_frequency(),
            top,
            queries,
        })
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Plain text: a header, the summary and a '#' histogram of the top words.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", self.source)?;
        writeln!(
            f,
            "{} words, {} distinct, highest frequency {}",
            self.total_words, self.distinct_words, self.highest_frequency
        )?;

        if !self.top.is_empty() {
            writeln!(f, "Top {} words:", self.top.len())?;
            for entry in &self.top {
                writeln!(
                    f,
                    "{:<width$} {:>6} {}",
                    entry.word(),
                    entry.frequency(),
                    bar(entry.frequency(), self.highest_frequency),
                    width = WORD_COLUMN_WIDTH
                )?;
            }
        }

        if !self.queries.is_empty() {
            writeln!(f, "Queried words:")?;
            for entry in &self.queries {
                writeln!(f, "{entry}")?;
            }
        }
        Ok(())
    }
}

/// '#' bar for `count`, scaled down when the highest count would not fit.
fn bar(count: usize, highest: usize) -> String {
    let width = if highest <= MAX_BAR_WIDTH {
        count
    } else {
        // Keep at least one '#' for every word that occurs.
        (count * MAX_BAR_WIDTH / highest).max(1)
    };
    "#".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzerError;

    fn options(top: i64, words: &[&str]) -> ReportOptions {
        ReportOptions {
            top,
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn builds_summary_and_queries() {
        let analyzer = WordFrequencyAnalyzer::new("b b a a c");
        let report = Report::build("inline", &analyzer, &options(2, &["A", "zebra"])).unwrap();

        assert_eq!(report.source, "inline");
        assert_eq!(report.total_words, 5);
        assert_eq!(report.distinct_words, 3);
        assert_eq!(report.highest_frequency, 2);
        assert_eq!(report.top, vec![("a", 2), ("b", 2)]);
        assert_eq!(report.queries, vec![("a", 2), ("zebra", 0)]);
    }

    #[test]
    fn negative_top_is_an_error() {
        let analyzer = WordFrequencyAnalyzer::new("a");
        assert_eq!(
            Report::build("inline", &analyzer, &options(-3, &[])),
            Err(AnalyzerError::InvalidArgument { n: -3 })
        );
    }

    #[test]
    fn text_rendering() {
        let analyzer = WordFrequencyAnalyzer::new("dog cat dog");
        let report = Report::build("pets.txt", &analyzer, &options(5, &["DOG"])).unwrap();
        let expected = "\
--- pets.txt ---
3 words, 2 distinct, highest frequency 2
Top 2 words:
dog                  2 ##
cat                  1 #
Queried words:
dog: 2
";
        assert_eq!(report.render_text(), expected);
        assert_eq!(format!("{report}"), expected);
    }

    #[test]
    fn display_omits_empty_sections() {
        let analyzer = WordFrequencyAnalyzer::new("42!");
        let report = Report::build("empty", &analyzer, &options(0, &[])).unwrap();
        assert_eq!(
            report.to_string(),
            "--- empty ---\n0 words, 0 distinct, highest frequency 0\n"
        );
    }

    #[test]
    fn json_rendering() {
        let analyzer = WordFrequencyAnalyzer::new("dog");
        let report = Report::build("stdin", &analyzer, &options(1, &[])).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "stdin",
                "total_words": 1,
                "distinct_words": 1,
                "highest_frequency": 1,
                "top": [{ "word": "dog", "frequency": 1 }],
                "queries": [],
            })
        );
    }

    #[test]
    fn bars_scale_past_max_width() {
        assert_eq!(bar(3, 3), "###");
        assert_eq!(bar(400, 400).len(), MAX_BAR_WIDTH);
        assert_eq!(bar(200, 400).len(), MAX_BAR_WIDTH / 2);
        assert_eq!(bar(1, 400), "#");
    }

    #[test]
    fn parses_output_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
