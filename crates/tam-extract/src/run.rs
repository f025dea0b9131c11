//! Batch runs over corpus files.

use tam_corpus::{CorpusError, CorpusFile, Sentence};
use tracing::info;

use crate::{ExtractError, Extractor, SinkRouter};

/// Totals of one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Corpus files processed.
    pub files: usize,
    /// Sentences read.
    pub sentences: usize,
    /// Records written.
    pub records: usize,
    /// Distinct output keys.
    pub keys: usize,
}

/// Feeds `sentences` through `extractor` into `router`.
///
/// Returns the number of sentences and records handled. Stops at the first
/// read or write error.
pub fn extract_sentences<I>(
    sentences: I,
    extractor: &dyn Extractor,
    router: &mut SinkRouter,
) -> Result<(usize, usize), ExtractError>
where
    I: IntoIterator<Item = Result<Sentence, CorpusError>>,
{
    let mut read = 0;
    let mut written = 0;
    for sentence in sentences {
        let sentence = sentence?;
        read += 1;
        for record in extractor.extract(&sentence) {
            router.write_record(&record)?;
            written += 1;
        }
    }
    Ok((read, written))
}

/// Runs `extractor` over every file, in order, writing through `router`.
///
/// The router is always finished, so output written before a failure is
/// flushed to disk; the first error is returned.
pub fn run_batch(
    files: &[CorpusFile],
    extractor: &dyn Extractor,
    mut router: SinkRouter,
) -> Result<RunSummary, ExtractError> {
    let mut summary = RunSummary::default();
    let outcome = run_files(files, extractor, &mut router, &mut summary);
    let finished = router.finish();
    outcome?;
    summary.keys = finished?.keys;
    info!(
        extractor = extractor.name(),
        files = summary.files,
        sentences = summary.sentences,
        records = summary.records,
        keys = summary.keys,
        "extraction finished"
    );
    Ok(summary)
}

/// Processes each file, accumulating into `summary`.
fn run_files(
    files: &[CorpusFile],
    extractor: &dyn Extractor,
    router: &mut SinkRouter,
    summary: &mut RunSummary,
) -> Result<(), ExtractError> {
    for file in files {
        info!(
            path = %file.path.display(),
            dialect = file.dialect.name(),
            file_id = %file.file_id,
            "extracting"
        );
        let (sentences, records) = extract_sentences(file.open()?, extractor, router)?;
        info!(sentences, records, "file done");
        summary.files += 1;
        summary.sentences += sentences;
        summary.records += records;
    }
    Ok(())
}
