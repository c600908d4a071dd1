use std::path::PathBuf;

use clap::{ArgAction, Parser};
use word_frequency_analyzer::OutputFormat;

pub const DEFAULT_TOP: i64 = 10;

/// Count case-insensitive word frequencies in text
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version, about, long_about = None)]
pub struct Args {
    /// Files to analyze, each reported separately (reads stdin if none and no --text)
    pub files: Vec<PathBuf>,

    /// Analyze this text instead of files or stdin
    #[arg(long, conflicts_with = "files")]
    pub text: Option<String>,

    /// Show the top N words
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP, allow_negative_numbers = true)]
    pub top: i64,

    /// Report the frequency of this word (repeatable)
    #[arg(short = 'w', long = "word")]
    pub words: Vec<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Input encoding label (default: detect BOM, else UTF-8)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
