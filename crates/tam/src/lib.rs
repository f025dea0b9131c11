//! tam: adverb-noun and prefix-noun contexts from parsed corpora.
//!
//! tam reads tagged, optionally dependency-parsed corpora in several dialects
//! and collects every occurrence of two constructions: hyphenated prefix-noun
//! compounds and determiner-anchored adverb-noun ngrams. Occurrences are
//! written with their surrounding text to one file per prefix or adverb, for
//! later linguistic analysis. The frequency lists that decide which words are
//! worth extracting are built by tam as well.

#![warn(missing_docs)]

pub mod cli;
