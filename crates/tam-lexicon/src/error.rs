//! Error types for frequency lists and acceptance sets.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading or writing frequency lists.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Failed to read a frequency list.
    #[error("failed to read frequency list {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write a frequency list.
    #[error("failed to write frequency list {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line is not `count<TAB>term`.
    #[error("{path}:{line}: malformed frequency line: {reason}")]
    MalformedLine {
        /// Path to the offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}
