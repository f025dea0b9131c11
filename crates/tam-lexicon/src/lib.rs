//! Frequency lists and acceptance sets for tam.
//!
//! Every list handled here uses the same two-column text format,
//! `count<TAB>term`, one entry per line. Noun frequencies are counted from
//! parsed corpora, merged across files, and finally thresholded into the
//! [`AcceptanceSet`]s that gate extraction.

#![warn(missing_docs)]

mod acceptance;
mod entry;
mod error;
mod frequency;

pub use acceptance::AcceptanceSet;
pub use entry::parse_entry;
pub use error::LexiconError;
pub use frequency::{FrequencyTable, merge_frequency_files};
