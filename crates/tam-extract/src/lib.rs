//! Context extraction for tam.
//!
//! Two extractors scan parsed sentences for constructions built around
//! accepted words: [`CompoundExtractor`] finds hyphenated prefix-noun
//! compounds, [`NgramExtractor`] finds determiner-anchored adverb-noun
//! ngrams. Each match becomes a [`ContextRecord`] carrying its left and right
//! context, and a [`SinkRouter`] files records into one output file per
//! prefix or adverb.

#![warn(missing_docs)]

mod compound;
mod error;
mod ngram;
mod record;
mod router;
mod run;
mod window;

pub use compound::CompoundExtractor;
pub use error::ExtractError;
pub use ngram::NgramExtractor;
pub use record::{CompoundRecord, ContextRecord, NgramPattern, NgramRecord};
pub use router::{RouterSummary, SINK_SUFFIX, SinkRouter, sink_file_name};
pub use run::{RunSummary, extract_sentences, run_batch};
use tam_corpus::Sentence;
pub use window::{Context, clip, join_forms};

/// A per-sentence matcher.
///
/// Extractors are pure: they return the records of one sentence in match
/// order and leave writing to the caller.
pub trait Extractor {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns every record found in `sentence`.
    fn extract(&self, sentence: &Sentence) -> Vec<ContextRecord>;
}
