//! Configuration file support for duet
//!
//! Config file location: `~/.config/duet/config.toml` (XDG_CONFIG_HOME)
//!
//! Example config:
//! ```toml
//! [ui]
//! line_numbers = true
//! marker = "▶"
//!
//! [transform]
//! apply = ["collapse-whitespace"]
//! ```

use duet_core::Transform;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub transform: TransformConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show line number gutters in the viewer and plain output
    pub line_numbers: bool,
    /// Gutter marker for the current diff
    pub marker: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            marker: "▶".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Transform names applied to both inputs before every comparison
    pub apply: Vec<String>,
}

impl Config {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("duet").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or does not parse.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&raw).unwrap_or_default()
    }

    /// Transforms named under `[transform] apply`; unknown names are
    /// skipped rather than failing startup.
    pub fn default_transforms(&self) -> Vec<Transform> {
        self.transform
            .apply
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.ui.line_numbers);
        assert_eq!(config.ui.marker, "▶");
        assert!(config.default_transforms().is_empty());
    }

    #[test]
    fn parses_example_config() {
        let raw = r#"
            [ui]
            line_numbers = false
            marker = ">"

            [transform]
            apply = ["lowercase", "sort-lines"]
        "#;
        let config: Config = toml::from_str(raw).expect("valid config");
        assert!(!config.ui.line_numbers);
        assert_eq!(config.ui.marker, ">");
        assert_eq!(
            config.default_transforms(),
            vec![Transform::Lowercase, Transform::SortLines]
        );
    }

    #[test]
    fn unknown_transform_names_are_skipped() {
        let raw = r#"
            [transform]
            apply = ["lowercase", "no-such-thing"]
        "#;
        let config: Config = toml::from_str(raw).expect("valid config");
        assert_eq!(config.default_transforms(), vec![Transform::Lowercase]);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let raw = r#"
            [ui]
            marker = "*"
        "#;
        let config: Config = toml::from_str(raw).expect("valid config");
        assert!(config.ui.line_numbers);
        assert_eq!(config.ui.marker, "*");
    }
}
