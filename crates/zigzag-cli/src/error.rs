//! CLI error types for handling file I/O, parsing, and analysis errors.
//!
//! Error messages are meant to be actionable: they say what went wrong and,
//! where possible, how to fix it.

use std::fmt;
use std::io;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug)]
pub enum CliError {
    /// An I/O error occurred while reading or writing files.
    IoError {
        /// The underlying I/O error.
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },
    /// An error occurred while parsing CSV data.
    CsvParseError {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<usize>,
    },
    /// Pivot detection or one of the analytics rejected its input.
    AnalysisError {
        /// The underlying zigzag error.
        source: zigzag::Error,
    },
    /// An invalid argument was provided.
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError { source, path } => {
                if let Some(p) = path {
                    write!(f, "I/O error with file '{p}': {source}. ")?;
                    write!(f, "Check that the file exists and you have read permissions.")
                } else {
                    write!(f, "I/O error: {source}")
                }
            }
            Self::CsvParseError { message, line } => {
                if let Some(l) = line {
                    write!(f, "CSV parse error on line {l}: {message}. ")?;
                } else {
                    write!(f, "CSV parse error: {message}. ")?;
                }
                write!(f, "Ensure your CSV has valid format with numeric price columns.")
            }
            Self::AnalysisError { source } => {
                write!(f, "Analysis error: {source}")
            }
            Self::InvalidArgument {
                argument,
                reason,
                suggestion,
            } => {
                write!(f, "Invalid argument '{argument}': {reason}")?;
                if let Some(s) = suggestion {
                    write!(f, ". {s}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::AnalysisError { source } => Some(source),
            Self::CsvParseError { .. } | Self::InvalidArgument { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::IoError {
            source: err,
            path: None,
        }
    }
}

impl From<zigzag::Error> for CliError {
    fn from(err: zigzag::Error) -> Self {
        Self::AnalysisError { source: err }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .and_then(|p| usize::try_from(p.line()).ok());
        Self::CsvParseError {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
