//! Helpers shared by command implementations.

use std::{fmt::Display, path::Path, process::ExitCode};

use tam_corpus::{CorpusFile, read_manifest};
use tam_lexicon::AcceptanceSet;
use tracing::info;

/// Prints `error: <what>: <err>` and maps the error to a failure exit code.
pub fn fail<E: Display>(what: &str) -> impl FnOnce(E) -> ExitCode + '_ {
    move |e| {
        eprintln!("error: {what}: {e}");
        ExitCode::FAILURE
    }
}

/// Reads a corpus manifest, exiting with an error on failure.
pub fn manifest_or_failure(path: &Path) -> Result<Vec<CorpusFile>, ExitCode> {
    read_manifest(path).map_err(fail("failed to read input file list"))
}

/// Loads an acceptance set, exiting with an error on failure.
pub fn accepted_or_failure(
    list: &str,
    path: &Path,
    threshold: u64,
) -> Result<AcceptanceSet, ExitCode> {
    let set = AcceptanceSet::load(path, threshold).map_err(|e| {
        eprintln!("error: failed to load accepted {list}: {e}");
        ExitCode::FAILURE
    })?;
    info!(
        list,
        path = %path.display(),
        threshold,
        accepted = set.len(),
        "loaded acceptance set"
    );
    Ok(set)
}
