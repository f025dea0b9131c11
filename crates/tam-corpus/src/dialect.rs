//! Corpus dialects and their tag normalization tables.
//!
//! Each corpus family ships its own tagset. The tables below collapse them onto
//! the handful of normalized tags the extractors inspect; anything unmapped is
//! passed through unchanged.

use std::{fmt, str::FromStr};

use crate::{CorpusError, PartOfSpeech};

/// Text encoding of a dialect's files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8; invalid sequences are an error.
    Utf8,
    /// ISO-8859-1; every byte is one character.
    Latin1,
}

/// The supported corpus dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// itWaC vertical format: `form tag lemma`, no dependencies, Latin-1.
    Itwac,
    /// La Repubblica CoNLL-like format with dependencies.
    Repubblica,
    /// Wikipedia CoNLL format, dependencies optional.
    WikiConll,
}

impl Dialect {
    /// All dialects, in a stable order.
    pub const ALL: [Self; 3] = [Self::Itwac, Self::Repubblica, Self::WikiConll];

    /// Canonical name, used as the source tag of every sentence.
    pub fn name(self) -> &'static str {
        match self {
            Self::Itwac => "ITWAC",
            Self::Repubblica => "REPUBBLICA",
            Self::WikiConll => "WIKICONLL",
        }
    }

    /// Encoding of files in this dialect.
    pub fn encoding(self) -> TextEncoding {
        match self {
            Self::Itwac => TextEncoding::Latin1,
            Self::Repubblica | Self::WikiConll => TextEncoding::Utf8,
        }
    }

    /// Normalizes a raw tag.
    ///
    /// ITWAC drops everything from the first `:` before the lookup, and an
    /// unmapped tag is kept in that coarse form. The CoNLL dialects try the
    /// exact tag, then its first character, and keep an unmapped tag verbatim.
    pub fn normalize_tag(self, raw: &str) -> PartOfSpeech {
        match self {
            Self::Itwac => {
                let coarse = raw.split_once(':').map_or(raw, |(coarse, _)| coarse);
                itwac_tag(coarse).unwrap_or_else(|| PartOfSpeech::Other(coarse.to_string()))
            }
            Self::Repubblica => lookup_with_initial(raw, repubblica_tag)
                .unwrap_or_else(|| PartOfSpeech::Other(raw.to_string())),
            Self::WikiConll => lookup_with_initial(raw, wikiconll_tag)
                .unwrap_or_else(|| PartOfSpeech::Other(raw.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CorpusError::UnknownDialect {
                name: s.to_string(),
            })
    }
}

/// Tries `table` on the whole tag, then on its first character.
fn lookup_with_initial(raw: &str, table: fn(&str) -> Option<PartOfSpeech>) -> Option<PartOfSpeech> {
    table(raw).or_else(|| {
        let first = raw.chars().next()?;
        table(&raw[..first.len_utf8()])
    })
}

/// ITWAC tagset.
fn itwac_tag(tag: &str) -> Option<PartOfSpeech> {
    let pos = match tag {
        "ADJ" => PartOfSpeech::Adj,
        "ADV" | "NEG" => PartOfSpeech::Adv,
        "ART" | "ARTPRE" => PartOfSpeech::Det,
        "NOUN" => PartOfSpeech::Noun,
        // Bare DET is neutralized in this tagset.
        "DET" => PartOfSpeech::X,
        _ => return None,
    };
    Some(pos)
}

/// REPUBBLICA tagset.
fn repubblica_tag(tag: &str) -> Option<PartOfSpeech> {
    let pos = match tag {
        "A" => PartOfSpeech::Adj,
        "EA" | "DD" | "DI" | "DE" | "DQ" | "DR" | "R" => PartOfSpeech::Det,
        "B" => PartOfSpeech::Adv,
        "S" => PartOfSpeech::Noun,
        _ => return None,
    };
    Some(pos)
}

/// WIKICONLL tagset.
fn wikiconll_tag(tag: &str) -> Option<PartOfSpeech> {
    let pos = match tag {
        "S" => PartOfSpeech::Noun,
        "R" | "EA" | "D" => PartOfSpeech::Det,
        "A" => PartOfSpeech::Adj,
        "B" => PartOfSpeech::Adv,
        _ => return None,
    };
    Some(pos)
}
