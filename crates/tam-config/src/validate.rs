//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::Path};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The input manifest does not exist.
    InputListMissing {
        /// Configured manifest path.
        path: String,
    },
    /// An acceptance list does not exist.
    AcceptedListMissing {
        /// Which list (`nouns`, `prefixes` or `adverbs`).
        list: &'static str,
        /// Configured path.
        path: String,
    },
    /// The output location exists but is not a directory.
    OutputNotDirectory {
        /// Configured output path.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputListMissing { path } => {
                write!(f, "input file list does not exist: {path}")
            }
            Self::AcceptedListMissing { list, path } => {
                write!(f, "accepted {list} list does not exist: {path}")
            }
            Self::OutputNotDirectory { path } => {
                write!(f, "output path is not a directory: {path}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let paths = &config.paths;

    if !paths.input_files.is_file() {
        warnings.push(ConfigWarning::InputListMissing {
            path: display(&paths.input_files),
        });
    }

    let lists = [
        ("nouns", &paths.accepted_nouns),
        ("prefixes", &paths.accepted_prefixes),
        ("adverbs", &paths.accepted_adverbs),
    ];
    for (list, path) in lists {
        if !path.is_file() {
            warnings.push(ConfigWarning::AcceptedListMissing {
                list,
                path: display(path),
            });
        }
    }

    if paths.output_dir.exists() && !paths.output_dir.is_dir() {
        warnings.push(ConfigWarning::OutputNotDirectory {
            path: display(&paths.output_dir),
        });
    }

    warnings
}

/// Formats a path for a warning message.
fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Paths, test_support::TestDir};

    #[test]
    fn complete_setup_has_no_warnings() {
        let dir = TestDir::new();
        let config = Config {
            paths: Paths {
                input_files: dir.create_file("files.tsv", "ITWAC\t01\ta.txt\n"),
                output_dir: dir.create_dir("out"),
                accepted_nouns: dir.create_file("nouns.tsv", ""),
                accepted_prefixes: dir.create_file("prefs.tsv", ""),
                accepted_adverbs: dir.create_file("advs.tsv", ""),
                frequencies_dir: dir.path().join("freqs"),
            },
            ..Config::default()
        };

        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn reports_missing_lists_and_file_as_output() {
        let dir = TestDir::new();
        let config = Config {
            paths: Paths {
                input_files: dir.path().join("missing.tsv"),
                output_dir: dir.create_file("out", "not a dir"),
                accepted_nouns: dir.create_file("nouns.tsv", ""),
                accepted_prefixes: dir.path().join("prefs.tsv"),
                accepted_adverbs: dir.create_file("advs.tsv", ""),
                frequencies_dir: dir.path().join("freqs"),
            },
            ..Config::default()
        };

        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 3);
        assert!(matches!(warnings[0], ConfigWarning::InputListMissing { .. }));
        assert!(matches!(
            warnings[1],
            ConfigWarning::AcceptedListMissing { list: "prefixes", .. }
        ));
        assert!(matches!(warnings[2], ConfigWarning::OutputNotDirectory { .. }));
    }
}
