//! Implementation of `tam check`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use tam_config::{ConfigWarning, discover_config_files};
use tam_corpus::{CorpusFile, read_manifest};
use tracing::warn;

use crate::cli::context::CommandContext;

/// Shows configuration files, validation warnings and the manifest's corpus files.
///
/// Exits with failure when there is a warning or a listed corpus file is missing.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    println!("Config files:");
    if config_files.is_empty() {
        println!("   (none, using defaults)");
    } else {
        for path in &config_files {
            println!("   {}", path.display());
        }
    }
    println!();

    let mut problems = 0;
    let input_files = ctx.cwd.join(&ctx.config.paths.input_files);
    if input_files.is_file() {
        match read_manifest(&input_files) {
            Ok(files) => {
                println!("Corpus files ({}):", files.len());
                println!("{}", manifest_table(&files));
                println!();
                problems += files.iter().filter(|f| !f.path.is_file()).count();
            }
            Err(e) => {
                eprintln!("error: {e}");
                problems += 1;
            }
        }
    }

    let warnings = ctx.config.validate();
    if warnings.is_empty() && problems == 0 {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    if !warnings.is_empty() {
        println!("Warnings ({}):", warnings.len());
        for w in &warnings {
            warn!("{w}");
            println!("   {w}");
        }
        println!();
        print_hints(&warnings);
    }
    ExitCode::FAILURE
}

/// Renders manifest entries with their existence status.
fn manifest_table(files: &[CorpusFile]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Source", "File id", "Path", "Status"]);
    for file in files {
        let status = if file.path.is_file() { "ok" } else { "missing" };
        table.add_row(vec![
            Cell::new(file.dialect.name()),
            Cell::new(&file.file_id),
            Cell::new(file.path.display()),
            Cell::new(status),
        ]);
    }
    table
}

/// Prints hints for resolving common warnings, once per kind.
fn print_hints(warnings: &[ConfigWarning]) {
    if warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::InputListMissing { .. }))
    {
        println!("Hint: set [paths] input_files in .tam.toml or pass -i");
    }
    if warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::AcceptedListMissing { .. }))
    {
        println!("Hint: build frequency lists with `tam frequencies` and `tam merge`");
    }
}
