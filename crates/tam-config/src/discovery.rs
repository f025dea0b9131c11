//! Configuration file discovery.
//!
//! Discovers `.tam.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.tam.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".tam.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.tam.toml`) last.
/// Walking stops at a file with `root = true`, in which case the global file is skipped.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.tam.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    #[test]
    fn test_discover_no_configs() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);

        // Should only contain global config if it exists
        for config in &configs {
            assert!(is_global_config(config), "unexpected config: {config:?}");
        }
    }

    #[test]
    fn test_discover_closest_first() {
        let test_dir = TestDir::new();
        let outer = test_dir.create_config("corpora");
        let inner = test_dir.create_config("corpora/repubblica");

        let configs = discover_config_files(&test_dir.path().join("corpora/repubblica"));

        assert_eq!(configs[0], inner);
        assert_eq!(configs[1], outer);
    }

    #[test]
    fn test_discover_stops_at_root() {
        let test_dir = TestDir::new();
        test_dir.create_config_at_root();
        let root = test_dir.create_root_config("project");
        let subdir = test_dir.create_dir("project/data");

        let configs = discover_config_files(&subdir);

        assert_eq!(configs, vec![root]);
    }
}
