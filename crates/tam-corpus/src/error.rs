//! Error types for corpus reading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading corpora or input manifests.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failed to open or read a file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A line of a UTF-8 corpus is not valid UTF-8.
    #[error("{path}:{line}: invalid UTF-8")]
    InvalidUtf8 {
        /// Path to the corpus file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
    },

    /// A token line is missing columns or has a non-integer numeric column.
    #[error("{path}:{line}: malformed token line: {reason}")]
    MalformedToken {
        /// Path to the corpus file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A manifest line does not have the `source<TAB>file_id<TAB>path` shape.
    #[error("{path}:{line}: malformed manifest line: {reason}")]
    MalformedManifest {
        /// Path to the manifest file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A source tag names no known corpus dialect.
    #[error("unknown corpus dialect: {name}")]
    UnknownDialect {
        /// The unrecognized source tag.
        name: String,
    },
}
