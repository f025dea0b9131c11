//! Configuration system for tam.
//!
//! tam uses TOML configuration files named `.tam.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.tam.toml` files found,
//! then loading `~/.tam.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawExtractSettings, RawPaths, RawThresholds, parse_config_file, parse_config_str,
};
pub use resolve::resolve_path;
use serde::Serialize;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for tam.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    /// Extraction settings.
    pub extract: ExtractSettings,
    /// Minimum counts for the acceptance sets.
    pub thresholds: Thresholds,
    /// Input and output locations.
    pub paths: Paths,
    /// Directory containing the most specific config file.
    #[serde(skip)]
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.tam.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// Checks that the input manifest and acceptance lists exist and that the
    /// output location, if present, is a directory.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        // Every field is a number or a path; only non-UTF-8 paths can fail.
        toml::to_string_pretty(self).unwrap_or_else(|e| format!("# unrepresentable: {e}\n"))
    }
}

/// The `[extract]` section.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractSettings {
    /// Tokens of context on each side of a match.
    pub context_width: usize,
    /// Maximum simultaneously open output files; 0 means unbounded.
    pub max_open_sinks: usize,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            context_width: 20,
            max_open_sinks: 0,
        }
    }
}

/// The `[thresholds]` section.
#[derive(Debug, Clone, Serialize)]
pub struct Thresholds {
    /// Minimum count for accepted nouns.
    pub nouns: u64,
    /// Minimum count for accepted prefixes.
    pub prefixes: u64,
    /// Minimum count for accepted adverbs.
    pub adverbs: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            nouns: 20,
            prefixes: 20,
            adverbs: 20,
        }
    }
}

/// The `[paths]` section, with every path resolved.
#[derive(Debug, Clone, Serialize)]
pub struct Paths {
    /// Manifest of corpus files.
    pub input_files: PathBuf,
    /// Directory receiving `<key>.contexts.tsv` files.
    pub output_dir: PathBuf,
    /// Frequency list of candidate nouns.
    pub accepted_nouns: PathBuf,
    /// Frequency list of candidate prefixes.
    pub accepted_prefixes: PathBuf,
    /// Frequency list of candidate adverbs.
    pub accepted_adverbs: PathBuf,
    /// Directory for per-file noun frequency lists.
    pub frequencies_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            input_files: PathBuf::from("data_sample/files_input.tsv"),
            output_dir: PathBuf::from("data_sample/output_contexts"),
            accepted_nouns: PathBuf::from("data_sample/final_lists/nouns.txt"),
            accepted_prefixes: PathBuf::from("data_sample/final_lists/prefixes.txt"),
            accepted_adverbs: PathBuf::from("data_sample/final_lists/adverbs.txt"),
            frequencies_dir: PathBuf::from("data_sample/output_frequencies"),
        }
    }
}
