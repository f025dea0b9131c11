//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, ExtractSettings, Paths, Thresholds,
    parse::{RawConfig, RawExtractSettings, RawPaths, RawThresholds},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). For every field the first defined value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut extract = ExtractSettings::default();
    let mut thresholds = Thresholds::default();
    let mut paths = Paths::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.extract {
            apply_raw_extract(&mut extract, raw, &parsed.path)?;
        }
        if let Some(ref raw) = parsed.config.thresholds {
            apply_raw_thresholds(&mut thresholds, raw);
        }
        if let Some(ref raw) = parsed.config.paths {
            apply_raw_paths(&mut paths, raw, parsed.dir())?;
        }
    }

    Ok(Config {
        extract,
        thresholds,
        paths,
        config_root: configs.first().map(|c| c.dir().to_path_buf()),
    })
}

/// Applies raw extract settings, rejecting a zero context width.
fn apply_raw_extract(
    result: &mut ExtractSettings,
    raw: &RawExtractSettings,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(v) = raw.context_width {
        if v == 0 {
            return Err(ConfigError::InvalidContextWidth {
                path: path.to_path_buf(),
            });
        }
        result.context_width = v;
    }
    if let Some(v) = raw.max_open_sinks {
        result.max_open_sinks = v;
    }
    Ok(())
}

/// Applies raw thresholds.
fn apply_raw_thresholds(result: &mut Thresholds, raw: &RawThresholds) {
    if let Some(v) = raw.nouns {
        result.nouns = v;
    }
    if let Some(v) = raw.prefixes {
        result.prefixes = v;
    }
    if let Some(v) = raw.adverbs {
        result.adverbs = v;
    }
}

/// Applies raw paths, resolving each against `config_dir`.
fn apply_raw_paths(
    result: &mut Paths,
    raw: &RawPaths,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    let targets: [(&Option<String>, &mut PathBuf); 6] = [
        (&raw.input_files, &mut result.input_files),
        (&raw.output_dir, &mut result.output_dir),
        (&raw.accepted_nouns, &mut result.accepted_nouns),
        (&raw.accepted_prefixes, &mut result.accepted_prefixes),
        (&raw.accepted_adverbs, &mut result.accepted_adverbs),
        (&raw.frequencies_dir, &mut result.frequencies_dir),
    ];
    for (value, slot) in targets {
        if let Some(path) = value {
            *slot = resolve_path(path, config_dir)?;
        }
    }
    Ok(())
}
