//! Extracted context records.

use std::fmt;

use crate::Context;

/// The four ngram surface patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NgramPattern {
    /// DET ADV NOUN.
    DetAdvNoun,
    /// DET ADV ADV NOUN; the two adverbs form the anchor.
    DetAdvAdvNoun,
    /// DET ADV ADJ NOUN.
    DetAdvAdjNoun,
    /// DET ADJ ADV NOUN.
    DetAdjAdvNoun,
}

impl NgramPattern {
    /// Label written to the output.
    ///
    /// The two-adverb pattern is reported as `DET ADV NOUN`: downstream
    /// analyses treat the merged adverb as a single adverb.
    pub fn label(self) -> &'static str {
        match self {
            Self::DetAdvNoun | Self::DetAdvAdvNoun => "DET ADV NOUN",
            Self::DetAdvAdjNoun => "DET ADV ADJ NOUN",
            Self::DetAdjAdvNoun => "DET ADJ ADV NOUN",
        }
    }
}

impl fmt::Display for NgramPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hyphenated prefix-noun compound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRecord {
    /// Source tag of the sentence.
    pub source: String,
    /// Part before the last hyphen.
    pub prefix: String,
    /// Part after the last hyphen.
    pub noun: String,
    /// Surrounding text.
    pub context: Context,
}

/// An adverb-noun ngram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramRecord {
    /// Source tag of the sentence.
    pub source: String,
    /// Anchor adverb, two space-separated words for [`NgramPattern::DetAdvAdvNoun`].
    pub adverb: String,
    /// The noun closing the pattern.
    pub noun: String,
    /// Which pattern matched.
    pub pattern: NgramPattern,
    /// Surrounding text.
    pub context: Context,
}

/// One match, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextRecord {
    /// Compound match.
    Compound(CompoundRecord),
    /// Ngram match.
    Ngram(NgramRecord),
}

impl ContextRecord {
    /// Routing key: the prefix or the (possibly merged) adverb.
    pub fn key(&self) -> &str {
        match self {
            Self::Compound(r) => &r.prefix,
            Self::Ngram(r) => &r.adverb,
        }
    }

    /// The surrounding text.
    pub fn context(&self) -> &Context {
        match self {
            Self::Compound(r) => &r.context,
            Self::Ngram(r) => &r.context,
        }
    }
}

/// Tab-separated output line, without a trailing newline.
impl fmt::Display for ContextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(r) => write!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}",
                r.source, r.prefix, r.noun, r.context.left, r.context.matched, r.context.right
            ),
            Self::Ngram(r) => write!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                r.source,
                r.adverb,
                r.noun,
                r.pattern,
                r.context.left,
                r.context.matched,
                r.context.right
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        Context {
            left: "ieri".to_string(),
            matched: "un vero successo".to_string(),
            right: "per tutti".to_string(),
        }
    }

    #[test]
    fn ngram_line_has_seven_fields() {
        let record = ContextRecord::Ngram(NgramRecord {
            source: "REPUBBLICA".to_string(),
            adverb: "davvero".to_string(),
            noun: "successo".to_string(),
            pattern: NgramPattern::DetAdvNoun,
            context: context(),
        });

        assert_eq!(record.key(), "davvero");
        assert_eq!(
            record.to_string(),
            "REPUBBLICA\tdavvero\tsuccesso\tDET ADV NOUN\tieri\tun vero successo\tper tutti"
        );
    }

    #[test]
    fn compound_line_has_six_fields() {
        let record = ContextRecord::Compound(CompoundRecord {
            source: "ITWAC".to_string(),
            prefix: "ex".to_string(),
            noun: "ministro".to_string(),
            context: context(),
        });

        assert_eq!(record.key(), "ex");
        assert_eq!(record.to_string().split('\t').count(), 6);
    }

    #[test]
    fn two_adverb_pattern_reuses_three_word_label() {
        assert_eq!(NgramPattern::DetAdvAdvNoun.label(), "DET ADV NOUN");
        assert_eq!(NgramPattern::DetAdjAdvNoun.to_string(), "DET ADJ ADV NOUN");
    }
}
