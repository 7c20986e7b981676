//! Configuration merging logic
//!
//! Priority: CLI args > inidoc.toml > defaults

use super::toml_schema::FmtSection;

/// Effective settings for `inidoc fmt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FmtConfig {
    /// Extensions (without dot) matched case-insensitively when walking
    pub extensions: Vec<String>,
    pub hidden: bool,
}

impl Default for FmtConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["ini".to_string(), "cfg".to_string()],
            hidden: false,
        }
    }
}

impl FmtConfig {
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// CLI options that can override config file settings.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
#[derive(Debug, Default)]
pub struct CliFmtOptions {
    pub extensions: Option<Vec<String>>,
    pub hidden: Option<bool>,
}

/// Merge configurations from CLI, TOML, and defaults.
pub fn merge_fmt_config(cli: &CliFmtOptions, toml: Option<&FmtSection>) -> FmtConfig {
    let defaults = FmtConfig::default();

    let extensions = cli
        .extensions
        .clone()
        .or_else(|| toml.and_then(|t| t.extensions.clone()))
        .unwrap_or(defaults.extensions);

    FmtConfig {
        extensions: extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect(),
        hidden: cli
            .hidden
            .or_else(|| toml.and_then(|t| t.hidden))
            .unwrap_or(defaults.hidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_defaults_only() {
        let config = merge_fmt_config(&CliFmtOptions::default(), None);
        assert_eq!(config, FmtConfig::default());
    }

    #[test]
    fn test_merge_toml_overrides_defaults() {
        let toml = FmtSection {
            extensions: Some(vec!["conf".to_string()]),
            hidden: None,
        };

        let config = merge_fmt_config(&CliFmtOptions::default(), Some(&toml));

        assert_eq!(config.extensions, vec!["conf"]);
        assert!(!config.hidden); // default
    }

    #[test]
    fn test_merge_cli_overrides_toml() {
        let cli = CliFmtOptions {
            extensions: Some(vec![".INI".to_string()]),
            hidden: Some(true),
        };
        let toml = FmtSection {
            extensions: Some(vec!["conf".to_string()]),
            hidden: Some(false),
        };

        let config = merge_fmt_config(&cli, Some(&toml));

        assert_eq!(config.extensions, vec!["INI"]);
        assert!(config.hidden);
        assert!(config.matches_extension("ini"));
        assert!(!config.matches_extension("conf"));
    }
}
