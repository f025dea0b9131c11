//! Prefix-noun compound extraction.

use tam_corpus::{PartOfSpeech, Sentence};
use tam_lexicon::AcceptanceSet;

use crate::{CompoundRecord, Context, ContextRecord, Extractor};

/// Finds hyphenated nouns such as `ex-ministro` whose prefix and head noun
/// are both accepted.
#[derive(Debug)]
pub struct CompoundExtractor {
    /// Accepted prefixes.
    prefixes: AcceptanceSet,
    /// Accepted nouns.
    nouns: AcceptanceSet,
    /// Context width on each side.
    width: usize,
}

impl CompoundExtractor {
    /// Creates an extractor with `width` context tokens on each side.
    pub fn new(prefixes: AcceptanceSet, nouns: AcceptanceSet, width: usize) -> Self {
        Self {
            prefixes,
            nouns,
            width,
        }
    }
}

impl Extractor for CompoundExtractor {
    fn name(&self) -> &'static str {
        "compound"
    }

    fn extract(&self, sentence: &Sentence) -> Vec<ContextRecord> {
        let tokens = sentence.tokens();
        let mut records = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            if !token.is(&PartOfSpeech::Noun) {
                continue;
            }
            // Split at the last hyphen: `anti-ex-ministro` has prefix `anti-ex`.
            let Some((prefix, noun)) = token.form.rsplit_once('-') else {
                continue;
            };
            if !self.nouns.contains(noun) || !self.prefixes.contains(prefix) {
                continue;
            }
            records.push(ContextRecord::Compound(CompoundRecord {
                source: sentence.source().to_string(),
                prefix: prefix.to_string(),
                noun: noun.to_string(),
                context: Context::around(tokens, i..i + 1, self.width),
            }));
        }
        records
    }
}
