//! Parsed-corpus model for tam.
//!
//! Corpora arrive as sentence-segmented, tagged and (sometimes) dependency
//! parsed text in one of three line-oriented dialects. This crate turns them
//! into a uniform stream of [`Sentence`]s whose tokens carry a normalized
//! [`PartOfSpeech`], so the extractors never see dialect differences.

#![warn(missing_docs)]

mod dialect;
mod error;
mod format;
mod manifest;
mod reader;
mod sentence;
mod token;

pub use dialect::{Dialect, TextEncoding};
pub use error::CorpusError;
pub use format::{ItwacFormat, Line, LineFormat, RepubblicaFormat, WikiConllFormat, format_for};
pub use manifest::{CorpusFile, parse_manifest, read_manifest};
pub use reader::{CorpusReader, SentenceReader, open_corpus};
pub use sentence::Sentence;
pub use token::{PartOfSpeech, Token, confirmed_or_unknown};
