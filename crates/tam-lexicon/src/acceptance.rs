//! Acceptance sets: surface forms allowed to anchor or complete a match.

use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{LexiconError, entry::parse_entry};

/// A read-only membership filter over surface strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptanceSet {
    /// Accepted terms.
    terms: HashSet<String>,
}

impl AcceptanceSet {
    /// Loads the terms of a `count<TAB>term` file whose count is at least `threshold`.
    pub fn load(path: &Path, threshold: u64) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path, threshold)
    }

    /// Like [`AcceptanceSet::load`], reading from any buffered source.
    pub fn from_reader(
        reader: impl BufRead,
        path: &Path,
        threshold: u64,
    ) -> Result<Self, LexiconError> {
        let mut terms = HashSet::new();
        for (n, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LexiconError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
            if let Some((count, term)) = parse_entry(&line, path, n + 1)?
                && count >= threshold
            {
                terms.insert(term.to_string());
            }
        }
        Ok(Self { terms })
    }

    /// Returns true if `term` is accepted.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Number of accepted terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if nothing is accepted.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the accepted terms in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AcceptanceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}
