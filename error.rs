use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// A ranking query asked for a negative number of words.
    #[error("requested word count `n` cannot be negative (got {n})")]
    InvalidArgument { n: i64 },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
