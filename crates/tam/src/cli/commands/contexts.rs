//! Implementation of `tam contexts`.

use std::process::ExitCode;

use tam_extract::{
    CompoundExtractor, Extractor, NgramExtractor, RunSummary, SinkRouter, run_batch,
};

use super::shared::{accepted_or_failure, fail, manifest_or_failure};
use crate::cli::{
    args::{ContextsCommand, ExtractionType},
    context::CommandContext,
};

/// Extracts contexts for every corpus file of the manifest.
pub fn run(ctx: &CommandContext, cmd: &ContextsCommand) -> ExitCode {
    match extract(ctx, cmd) {
        Ok(summary) => {
            println!(
                "Wrote {} contexts for {} keys from {} sentences in {} files",
                summary.records, summary.keys, summary.sentences, summary.files
            );
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}

/// Builds the extractor and router from flags and configuration, then runs the batch.
fn extract(ctx: &CommandContext, cmd: &ContextsCommand) -> Result<RunSummary, ExitCode> {
    let config = &ctx.config;
    let paths = &config.paths;
    let thresholds = &config.thresholds;
    let width = cmd
        .context_width
        .map_or(config.extract.context_width, |w| w.get());
    let max_open = cmd.max_open_sinks.unwrap_or(config.extract.max_open_sinks);

    let input_files = ctx.path_or(cmd.input_files.as_deref(), &paths.input_files);
    let files = manifest_or_failure(&input_files)?;

    let nouns = accepted_or_failure(
        "nouns",
        &ctx.path_or(cmd.accepted_nouns.as_deref(), &paths.accepted_nouns),
        cmd.nouns_threshold.unwrap_or(thresholds.nouns),
    )?;
    let extractor: Box<dyn Extractor> = match cmd.kind {
        ExtractionType::Compound => {
            let prefixes = accepted_or_failure(
                "prefixes",
                &ctx.path_or(cmd.accepted_prefs.as_deref(), &paths.accepted_prefixes),
                cmd.prefs_threshold.unwrap_or(thresholds.prefixes),
            )?;
            Box::new(CompoundExtractor::new(prefixes, nouns, width))
        }
        ExtractionType::Ngram => {
            let adverbs = accepted_or_failure(
                "adverbs",
                &ctx.path_or(cmd.accepted_adverbs.as_deref(), &paths.accepted_adverbs),
                cmd.adverbs_threshold.unwrap_or(thresholds.adverbs),
            )?;
            Box::new(NgramExtractor::new(adverbs, nouns, width))
        }
    };

    let output = ctx.path_or(cmd.output_folder.as_deref(), &paths.output_dir);
    let router = SinkRouter::create(&output)
        .map_err(fail("failed to prepare output"))?
        .with_max_open(max_open);

    run_batch(&files, extractor.as_ref(), router).map_err(fail("extraction failed"))
}
