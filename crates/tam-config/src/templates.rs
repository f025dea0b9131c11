//! Configuration templates for `tam init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out
//! example configurations.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Comments out every setting of `template`, keeping its own comments and
/// blank lines, so the written file documents the defaults without setting them.
fn comment_template(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, parse::parse_config};

    #[test]
    fn local_template_parses_as_valid_toml() {
        let result = parse_config(LOCAL_TEMPLATE);
        assert!(result.is_ok(), "local template failed to parse: {result:?}");
    }

    #[test]
    fn global_template_parses_as_valid_toml() {
        let result = parse_config(GLOBAL_TEMPLATE);
        assert!(
            result.is_ok(),
            "global template failed to parse: {result:?}"
        );
    }

    #[test]
    fn commented_template_parses_as_empty() {
        let config = parse_config(&local_template()).unwrap();
        assert!(config.extract.is_none());
        assert!(config.paths.is_none());
    }

    #[test]
    fn uncommented_template_matches_defaults() {
        let raw = parse_config(LOCAL_TEMPLATE).unwrap();
        let defaults = Config::default();
        let extract = raw.extract.unwrap();
        assert_eq!(extract.context_width, Some(defaults.extract.context_width));
        assert_eq!(extract.max_open_sinks, Some(defaults.extract.max_open_sinks));
        let thresholds = raw.thresholds.unwrap();
        assert_eq!(thresholds.nouns, Some(defaults.thresholds.nouns));
        assert_eq!(
            raw.paths.unwrap().input_files.as_deref(),
            defaults.paths.input_files.to_str()
        );
    }

    #[test]
    fn settings_and_headers_are_commented_out() {
        let result = comment_template("# keep\n\n[paths]\noutput_dir = \"out\"\n");
        assert_eq!(result, "# keep\n\n# [paths]\n# output_dir = \"out\"\n");
    }
}
