//! Input manifests.
//!
//! A manifest lists the corpus files of one batch run, one per line:
//! `source<TAB>file_id<TAB>path`. Relative paths are resolved against the
//! manifest's own directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{CorpusError, CorpusReader, Dialect, open_corpus};

/// One corpus file of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    /// Dialect the file is written in.
    pub dialect: Dialect,
    /// Free-form identifier, used in derived output names.
    pub file_id: String,
    /// Location of the file.
    pub path: PathBuf,
}

impl CorpusFile {
    /// Opens the file as a lazy sentence stream.
    pub fn open(&self) -> Result<CorpusReader, CorpusError> {
        open_corpus(&self.path, self.dialect)
    }
}

/// Reads a manifest file.
pub fn read_manifest(path: &Path) -> Result<Vec<CorpusFile>, CorpusError> {
    let contents = fs::read_to_string(path).map_err(|source| CorpusError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    parse_manifest(&contents, path, base)
}

/// Parses manifest text. `path` is used for errors, `base` to resolve relative entries.
pub fn parse_manifest(
    contents: &str,
    path: &Path,
    base: &Path,
) -> Result<Vec<CorpusFile>, CorpusError> {
    let malformed = |line: usize, reason: String| CorpusError::MalformedManifest {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut files = Vec::new();
    for (n, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let &[source, file_id, file_path] = fields.as_slice() else {
            return Err(malformed(n + 1, format!("expected 3 columns, found {}", fields.len())));
        };
        let dialect = source
            .parse::<Dialect>()
            .map_err(|e| malformed(n + 1, e.to_string()))?;

        files.push(CorpusFile {
            dialect,
            file_id: file_id.to_string(),
            path: base.join(file_path),
        });
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_and_resolves_relative_paths() {
        let text = "REPUBBLICA\t01\tcorpora/rep.1m\n\nITWAC\t02\t/abs/itwac.txt\n";
        let files = parse_manifest(text, Path::new("list.tsv"), Path::new("/data")).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].dialect, Dialect::Repubblica);
        assert_eq!(files[0].file_id, "01");
        assert_eq!(files[0].path, PathBuf::from("/data/corpora/rep.1m"));
        assert_eq!(files[1].path, PathBuf::from("/abs/itwac.txt"));
    }

    #[test]
    fn wrong_column_count_reports_line() {
        let text = "ITWAC\t01\ta.txt\nITWAC\t02\n";
        let err = parse_manifest(text, Path::new("list.tsv"), Path::new("")).unwrap_err();
        assert!(matches!(err, CorpusError::MalformedManifest { line: 2, .. }));
    }

    #[test]
    fn unknown_dialect_is_malformed() {
        let text = "BNC\t01\ta.txt\n";
        let err = parse_manifest(text, Path::new("list.tsv"), Path::new("")).unwrap_err();
        assert!(err.to_string().contains("unknown corpus dialect"));
    }
}
