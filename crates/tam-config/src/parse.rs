//! Configuration file parsing.
//!
//! Parses individual `.tam.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Extraction settings section.
    pub extract: Option<RawExtractSettings>,
    /// Frequency thresholds section.
    pub thresholds: Option<RawThresholds>,
    /// Input and output locations.
    pub paths: Option<RawPaths>,
}

/// Raw `[extract]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExtractSettings {
    /// Tokens of context on each side of a match.
    pub context_width: Option<usize>,
    /// Maximum simultaneously open output files (0 = unbounded).
    pub max_open_sinks: Option<usize>,
}

/// Raw `[thresholds]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawThresholds {
    /// Minimum count for accepted nouns.
    pub nouns: Option<u64>,
    /// Minimum count for accepted prefixes.
    pub prefixes: Option<u64>,
    /// Minimum count for accepted adverbs.
    pub adverbs: Option<u64>,
}

/// Raw `[paths]` section. Values are unresolved path strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPaths {
    /// Manifest of corpus files.
    pub input_files: Option<String>,
    /// Directory receiving `<key>.contexts.tsv` files.
    pub output_dir: Option<String>,
    /// Frequency list of candidate nouns.
    pub accepted_nouns: Option<String>,
    /// Frequency list of candidate prefixes.
    pub accepted_prefixes: Option<String>,
    /// Frequency list of candidate adverbs.
    pub accepted_adverbs: Option<String>,
    /// Directory for per-file noun frequency lists.
    pub frequencies_dir: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root.unwrap_or(false)
}
