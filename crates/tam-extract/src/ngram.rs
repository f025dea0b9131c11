//! Determiner-anchored adverb-noun ngram extraction.
//!
//! Every accepted adverb at position `c` (with at least three tokens before
//! it and two after it) is tested against two groups of patterns:
//!
//! * a determiner right before it: `DET ADV NOUN`, `DET ADV ADV NOUN` and
//!   `DET ADV ADJ NOUN`, tried in that order, first match wins;
//! * a determiner two tokens before it: `DET ADJ ADV NOUN`.
//!
//! The groups are evaluated independently, and each may emit one record.
//! Records of the first group carry one extra token of right context.
//! Dependency links are only checked loosely: a pattern passes when one of
//! its candidate links is confirmed or unknown.

use std::{borrow::Cow, ops::Range};

use tam_corpus::{PartOfSpeech, Sentence, Token, confirmed_or_unknown as linked};
use tam_lexicon::AcceptanceSet;

use crate::{Context, ContextRecord, Extractor, NgramPattern, NgramRecord};

/// A pattern match anchored on one adverb.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NgramMatch {
    /// Which pattern matched.
    pattern: NgramPattern,
    /// Position of the noun closing the pattern.
    noun: usize,
    /// Positions covered by the pattern.
    span: Range<usize>,
}

/// Extracts adverb-noun ngrams for accepted adverbs and nouns.
#[derive(Debug)]
pub struct NgramExtractor {
    /// Accepted adverbs.
    adverbs: AcceptanceSet,
    /// Accepted nouns.
    nouns: AcceptanceSet,
    /// Context width, widened by one on the right for the first group.
    width: usize,
}

impl NgramExtractor {
    /// Creates an extractor with a context of `width` tokens.
    pub fn new(adverbs: AcceptanceSet, nouns: AcceptanceSet, width: usize) -> Self {
        Self {
            adverbs,
            nouns,
            width,
        }
    }

    /// True for a NOUN token whose form is accepted.
    fn accepted_noun(&self, token: &Token) -> bool {
        token.is(&PartOfSpeech::Noun) && self.nouns.contains(&token.form)
    }

    /// Positions of accepted adverbs with three tokens before and two after.
    fn candidates<'a>(&'a self, tokens: &'a [Token]) -> impl Iterator<Item = usize> + 'a {
        (3..tokens.len().saturating_sub(2)).filter(move |&c| {
            let token = &tokens[c];
            token.is(&PartOfSpeech::Adv) && self.adverbs.contains(&token.form)
        })
    }

    /// Patterns with the determiner at `c - 1`.
    fn after_determiner(&self, tokens: &[Token], c: usize) -> Option<NgramMatch> {
        let (det, adverb) = (&tokens[c - 1], &tokens[c]);
        let (next, after) = (&tokens[c + 1], &tokens[c + 2]);
        if !det.is(&PartOfSpeech::Det) {
            return None;
        }

        if self.accepted_noun(next) && (linked(det, adverb) || linked(adverb, next)) {
            return Some(NgramMatch {
                pattern: NgramPattern::DetAdvNoun,
                noun: c + 1,
                span: c - 1..c + 2,
            });
        }

        if next.is(&PartOfSpeech::Adv)
            && self.accepted_noun(after)
            && (linked(det, adverb) || linked(adverb, after) || linked(next, after))
        {
            return Some(NgramMatch {
                pattern: NgramPattern::DetAdvAdvNoun,
                noun: c + 2,
                span: c - 1..c + 3,
            });
        }

        if next.is(&PartOfSpeech::Adj)
            && self.accepted_noun(after)
            && (linked(det, after) || linked(adverb, after))
        {
            return Some(NgramMatch {
                pattern: NgramPattern::DetAdvAdjNoun,
                noun: c + 2,
                span: c - 1..c + 3,
            });
        }

        None
    }

    /// The pattern with the determiner at `c - 2`.
    fn before_adjective(&self, tokens: &[Token], c: usize) -> Option<NgramMatch> {
        let (det, adj) = (&tokens[c - 2], &tokens[c - 1]);
        let (adverb, next) = (&tokens[c], &tokens[c + 1]);
        let matched = det.is(&PartOfSpeech::Det)
            && adj.is(&PartOfSpeech::Adj)
            && self.accepted_noun(next)
            && (linked(det, next) || linked(adverb, next));
        matched.then(|| NgramMatch {
            pattern: NgramPattern::DetAdjAdvNoun,
            noun: c + 1,
            span: c - 2..c + 2,
        })
    }

    /// Builds the output record of `found`.
    fn record(&self, sentence: &Sentence, adverb: &str, found: NgramMatch) -> ContextRecord {
        let tokens = sentence.tokens();
        let right = match found.pattern {
            NgramPattern::DetAdjAdvNoun => self.width,
            _ => self.width.saturating_add(1),
        };
        ContextRecord::Ngram(NgramRecord {
            source: sentence.source().to_string(),
            adverb: adverb.to_string(),
            noun: tokens[found.noun].form.clone(),
            pattern: found.pattern,
            context: Context::between(tokens, found.span, self.width, right),
        })
    }
}

impl Extractor for NgramExtractor {
    fn name(&self) -> &'static str {
        "ngram"
    }

    fn extract(&self, sentence: &Sentence) -> Vec<ContextRecord> {
        let tokens = sentence.tokens();
        let mut records = Vec::new();
        for c in self.candidates(tokens) {
            let mut adverb = Cow::Borrowed(tokens[c].form.as_str());

            if let Some(found) = self.after_determiner(tokens, c) {
                if found.pattern == NgramPattern::DetAdvAdvNoun {
                    adverb = Cow::Owned(format!("{} {}", tokens[c].form, tokens[c + 1].form));
                }
                records.push(self.record(sentence, &adverb, found));
            }

            // Keyed on the adverb as left by the first group, merged or not.
            if let Some(found) = self.before_adjective(tokens, c) {
                records.push(self.record(sentence, &adverb, found));
            }
        }
        records
    }
}
