//! Error types for the input reader.

use thiserror::Error;

/// Errors produced while reading a weighted-graph input file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DimacsError {
    /// The file could not be read.
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// A line has the wrong number of whitespace-separated tokens.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// Expected token count.
        expected: usize,
        /// Actual token count.
        found: usize,
    },

    /// A field that should be an integer failed to parse.
    #[error("Line {line}: invalid integer field '{token}'")]
    IntField {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Result type for reader operations.
pub type DimacsResult<T> = Result<T, DimacsError>;
