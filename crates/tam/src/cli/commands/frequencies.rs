//! Implementation of `tam frequencies`.

use std::{fs, path::Path, process::ExitCode};

use tam_corpus::CorpusFile;
use tam_lexicon::FrequencyTable;
use tracing::info;

use super::shared::{fail, manifest_or_failure};
use crate::cli::{args::FrequenciesCommand, context::CommandContext};

/// Writes one noun frequency list per corpus file of the manifest.
pub fn run(ctx: &CommandContext, cmd: &FrequenciesCommand) -> ExitCode {
    let paths = &ctx.config.paths;
    let input_files = ctx.path_or(cmd.input_files_list.as_deref(), &paths.input_files);
    let output = ctx.path_or(cmd.output_folder.as_deref(), &paths.frequencies_dir);

    let files = match manifest_or_failure(&input_files) {
        Ok(files) => files,
        Err(code) => return code,
    };
    if let Err(e) = fs::create_dir_all(&output) {
        eprintln!("error: failed to create {}: {e}", output.display());
        return ExitCode::FAILURE;
    }

    for file in &files {
        if let Err(code) = count_file(file, &output) {
            return code;
        }
    }
    ExitCode::SUCCESS
}

/// Name of the frequency list derived from `file`.
pub fn list_name(file: &CorpusFile) -> String {
    format!("{}_{}.nouns.tsv", file.dialect.name(), file.file_id)
}

/// Counts the nouns of one corpus file and writes them by descending count.
fn count_file(file: &CorpusFile, output: &Path) -> Result<(), ExitCode> {
    info!(path = %file.path.display(), dialect = file.dialect.name(), "counting nouns");
    let mut table = FrequencyTable::new();
    let reader = file.open().map_err(fail("failed to open corpus file"))?;
    for sentence in reader {
        let sentence = sentence.map_err(fail("failed to read corpus file"))?;
        table.add_nouns(&sentence);
    }

    let target = output.join(list_name(file));
    table
        .write_by_count(&target)
        .map_err(fail("failed to write frequency list"))?;
    println!("Wrote {} ({} nouns)", target.display(), table.len());
    Ok(())
}
