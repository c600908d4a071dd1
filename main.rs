use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use encoding_rs::Encoding;
use rayon::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use word_frequency_analyzer::{OutputFormat, Report, ReportOptions, WordFrequencyAnalyzer};

mod cli;
mod input;

use cli::Args;

/// Where a text comes from; also the label printed in its report.
enum Source {
    Inline(String),
    Stdin,
    File(PathBuf),
}

impl Source {
    fn label(&self) -> String {
        match self {
            Source::Inline(_) => "text".to_string(),
            Source::Stdin => "stdin".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn read(&self, encoding: Option<&'static Encoding>) -> Result<String> {
        match self {
            Source::Inline(text) => Ok(text.clone()),
            Source::Stdin => input::read_stdin(encoding),
            Source::File(path) => input::read_file(path, encoding),
        }
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read, analyze and render one source.
fn process_source(
    source: &Source,
    encoding: Option<&'static Encoding>,
    options: &ReportOptions,
    format: OutputFormat,
) -> Result<String> {
    let label = source.label();
    let text = source.read(encoding)?;
    let analyzer = WordFrequencyAnalyzer::new(text);
    let report = Report::build(label.as_str(), &analyzer, options)
        .with_context(|| format!("failed to analyze {label}"))?;
    info!(
        source = %label,
        words = report.total_words,
        distinct = report.distinct_words,
        "analyzed"
    );
    report
        .render(format)
        .with_context(|| format!("failed to render report for {label}"))
}

/// Analyze every source and write the reports to `out` in argument order.
///
/// Returns `Ok(false)` when at least one source failed; the rest are still
/// reported.
fn run(args: Args, out: &mut impl Write) -> Result<bool> {
    let encoding = args
        .encoding
        .as_deref()
        .map(input::encoding_for_label)
        .transpose()?;

    let sources: Vec<Source> = if let Some(text) = args.text {
        vec![Source::Inline(text)]
    } else if args.files.is_empty() {
        vec![Source::Stdin]
    } else {
        args.files.into_iter().map(Source::File).collect()
    };

    let options = ReportOptions {
        top: args.top,
        words: args.words,
    };

    // Analyze files in parallel, print in argument order
    let results: Vec<Result<String>> = sources
        .par_iter()
        .map(|source| process_source(source, encoding, &options, args.format))
        .collect();

    let mut all_ok = true;
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(rendered) => {
                out.write_all(rendered.as_bytes())?;
                if !rendered.ends_with('\n') {
                    writeln!(out)?;
                }
            }
            Err(e) => {
                error!("Error processing {}: {:#}", source.label(), e);
                all_ok = false;
            }
        }
    }
    out.flush()?;
    Ok(all_ok)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(args, &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
