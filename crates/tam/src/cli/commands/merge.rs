//! Implementation of `tam merge`.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use globset::{GlobBuilder, GlobMatcher};
use tam_lexicon::merge_frequency_files;

use super::shared::fail;
use crate::cli::{args::MergeCommand, context::CommandContext};

/// Sums the frequency lists of a folder whose names match the pattern.
pub fn run(ctx: &CommandContext, cmd: &MergeCommand) -> ExitCode {
    match merge(ctx, cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

/// Collects the matching lists and writes their sum.
fn merge(ctx: &CommandContext, cmd: &MergeCommand) -> Result<(), ExitCode> {
    let paths = &ctx.config.paths;
    let input = ctx.path_or(cmd.input_folder.as_deref(), &paths.frequencies_dir);
    let default_output = paths
        .accepted_nouns
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let output_dir = ctx.path_or(cmd.output_folder.as_deref(), &default_output);

    let matcher = pattern_matcher(&cmd.pattern)?;
    let files = matching_files(&input, &matcher)?;
    if files.is_empty() {
        eprintln!(
            "error: no files matching *{}* in {}",
            cmd.pattern,
            input.display()
        );
        return Err(ExitCode::FAILURE);
    }

    fs::create_dir_all(&output_dir).map_err(fail("failed to create output folder"))?;
    let target = output_dir.join(&cmd.output_filename);
    let table = merge_frequency_files(&files, &target).map_err(fail("merge failed"))?;
    println!(
        "Merged {} files into {} ({} terms)",
        files.len(),
        target.display(),
        table.len()
    );
    Ok(())
}

/// Compiles `*<pattern>*`, matched case-insensitively against file names.
fn pattern_matcher(pattern: &str) -> Result<GlobMatcher, ExitCode> {
    let glob = GlobBuilder::new(&format!("*{pattern}*"))
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .map_err(fail("invalid pattern"))?;
    Ok(glob.compile_matcher())
}

/// Regular files directly inside `dir` whose name matches, sorted by name.
fn matching_files(dir: &Path, matcher: &GlobMatcher) -> Result<Vec<PathBuf>, ExitCode> {
    let entries = fs::read_dir(dir).map_err(|e| {
        eprintln!("error: failed to read {}: {e}", dir.display());
        ExitCode::FAILURE
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.file_name().is_some_and(|name| matcher.is_match(name)))
        .collect();
    files.sort();
    Ok(files)
}
