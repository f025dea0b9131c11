//! Frequency tables over surface forms.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tam_corpus::{PartOfSpeech, Sentence};
use tracing::debug;

use crate::{LexiconError, entry::parse_entry};

/// Term -> count, kept in term order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// Accumulated counts.
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` occurrences of `term`.
    pub fn add(&mut self, term: &str, count: u64) {
        *self.counts.entry(term.to_string()).or_insert(0) += count;
    }

    /// Counts the surface form of every NOUN token in `sentence`.
    pub fn add_nouns(&mut self, sentence: &Sentence) {
        for token in sentence.tokens() {
            if token.is(&PartOfSpeech::Noun) {
                self.add(&token.form, 1);
            }
        }
    }

    /// Adds the counts of a `count<TAB>term` file.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), LexiconError> {
        let contents = fs::read_to_string(path).map_err(|source| LexiconError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        for (n, line) in contents.lines().enumerate() {
            if let Some((count, term)) = parse_entry(line, path, n + 1)? {
                self.add(term, count);
            }
        }
        debug!(path = %path.display(), terms = self.len(), "merged frequency list");
        Ok(())
    }

    /// Count recorded for `term`, zero if absent.
    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no term has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries ordered by term.
    pub fn sorted(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Entries ordered by descending count, ties by term.
    pub fn by_count(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.sorted().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Writes `count<TAB>term` lines ordered by term.
    pub fn write_sorted(&self, path: &Path) -> Result<(), LexiconError> {
        write_entries(path, self.sorted())
    }

    /// Writes `count<TAB>term` lines ordered by descending count.
    pub fn write_by_count(&self, path: &Path) -> Result<(), LexiconError> {
        write_entries(path, self.by_count())
    }
}

/// Sums several frequency lists and writes the result ordered by term.
pub fn merge_frequency_files(
    files: &[PathBuf],
    output: &Path,
) -> Result<FrequencyTable, LexiconError> {
    let mut table = FrequencyTable::new();
    for file in files {
        table.merge_file(file)?;
    }
    table.write_sorted(output)?;
    Ok(table)
}

/// Writes entries as `count<TAB>term` lines.
fn write_entries<'a>(
    path: &Path,
    entries: impl IntoIterator<Item = (&'a str, u64)>,
) -> Result<(), LexiconError> {
    let write = || -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for (term, count) in entries {
            writeln!(out, "{count}\t{term}")?;
        }
        out.flush()
    };
    write().map_err(|source| LexiconError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use tam_corpus::Token;

    use super::*;

    #[test]
    fn counts_only_nouns() {
        let sentence = Sentence::from_tokens(
            "ITWAC",
            [
                Token::new(1, "la", "il", PartOfSpeech::Det),
                Token::new(2, "casa", "casa", PartOfSpeech::Noun),
                Token::new(3, "casa", "casa", PartOfSpeech::Noun),
                Token::new(4, "bella", "bello", PartOfSpeech::Adj),
            ],
        );
        let mut table = FrequencyTable::new();
        table.add_nouns(&sentence);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("casa"), 2);
        assert_eq!(table.get("bella"), 0);
    }

    #[test]
    fn by_count_orders_descending_then_by_term() {
        let mut table = FrequencyTable::new();
        table.add("b", 2);
        table.add("a", 2);
        table.add("c", 5);

        assert_eq!(table.by_count(), vec![("c", 5), ("a", 2), ("b", 2)]);
    }

    #[test]
    fn merge_sums_counts_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.NOUNS.tsv");
        let second = dir.path().join("b.NOUNS.tsv");
        fs::write(&first, "3\tcasa\n1\tauto\n").unwrap();
        fs::write(&second, "2\tcasa\n").unwrap();
        let output = dir.path().join("accepted.tsv");

        let table = merge_frequency_files(&[first, second], &output).unwrap();

        assert_eq!(table.get("casa"), 5);
        assert_eq!(fs::read_to_string(&output).unwrap(), "1\tauto\n5\tcasa\n");
    }

    #[test]
    fn merge_rejects_malformed_lists() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.tsv");
        fs::write(&bad, "3\tcasa\nthree\tauto\n").unwrap();

        let mut table = FrequencyTable::new();
        let err = table.merge_file(&bad).unwrap_err();
        assert!(matches!(err, LexiconError::MalformedLine { line: 2, .. }));
    }
}
