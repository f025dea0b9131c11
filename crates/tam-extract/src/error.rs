//! Error types for extraction runs.

use std::{io, path::PathBuf};

use tam_corpus::CorpusError;
use thiserror::Error;

/// Errors that abort an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Reading the corpus failed.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An output file could not be created or reopened.
    #[error("failed to open output file {path}: {source}")]
    CreateSink {
        /// Output file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing or flushing an output file failed.
    #[error("failed to write output file {path}: {source}")]
    WriteSink {
        /// Output file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
