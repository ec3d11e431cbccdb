//! Seed configuration file (tokens.yaml).
//!
//! Every field is optional; anything left out falls back to the defaults in
//! [`Seeds`](super::Seeds). Command-line flags are layered on top with
//! [`Config::merge`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::types::ShadeStrategy;

use super::Seeds;

/// Default config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "tokens.yaml";

/// Seed values loaded from tokens.yaml and/or command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Base font size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_size: Option<u32>,

    /// Ratio between neighbouring type sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_ratio: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_base: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_base: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_levels: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ShadeStrategy>,

    /// Seed for the random primary colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Output directory for the exported JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| TokenError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax and that sizes are numbers", CONFIG_FILENAME)),
        })
    }

    /// Find the config to use.
    ///
    /// An explicit path must exist. Otherwise tokens.yaml in `dir` is used
    /// when present, and defaults when not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| TokenError::Export {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Layer `overrides` on top of this config; set fields in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            primary: overrides.primary.or(self.primary),
            secondary: overrides.secondary.or(self.secondary),
            accent: overrides.accent.or(self.accent),
            font_family: overrides.font_family.or(self.font_family),
            base_size: overrides.base_size.or(self.base_size),
            scale_ratio: overrides.scale_ratio.or(self.scale_ratio),
            spacing_base: overrides.spacing_base.or(self.spacing_base),
            radius_base: overrides.radius_base.or(self.radius_base),
            shadow_levels: overrides.shadow_levels.or(self.shadow_levels),
            strategy: overrides.strategy.or(self.strategy),
            seed: overrides.seed.or(self.seed),
            output: overrides.output.or(self.output),
        }
    }

    /// Resolve to seeds, filling gaps with defaults.
    pub fn to_seeds(&self) -> Seeds {
        let defaults = Seeds::default();
        Seeds {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            accent: self.accent.clone(),
            font_family: self.font_family.clone().unwrap_or(defaults.font_family),
            base_size: self.base_size.unwrap_or(defaults.base_size),
            scale_ratio: self.scale_ratio.unwrap_or(defaults.scale_ratio),
            spacing_base: self.spacing_base.unwrap_or(defaults.spacing_base),
            radius_base: self.radius_base.unwrap_or(defaults.radius_base),
            shadow_levels: self.shadow_levels.unwrap_or(defaults.shadow_levels),
            strategy: self.strategy.unwrap_or(defaults.strategy),
        }
    }

    /// Output directory, defaulting to `dist`.
    pub fn effective_output(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from("dist"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("primary: \"#3b82f6\"").unwrap();
        assert_eq!(config.primary.as_deref(), Some("#3b82f6"));
        assert!(config.base_size.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
primary: "#3b82f6"
secondary: "#8b5cf6"
accent: "#f59e0b"
font-family: "IBM Plex Sans"
base-size: 18
scale-ratio: 1.333
spacing-base: 8
radius-base: 6
shadow-levels: 3
strategy: brightness
seed: 99
output: build/tokens
"##;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.secondary.as_deref(), Some("#8b5cf6"));
        assert_eq!(config.font_family.as_deref(), Some("IBM Plex Sans"));
        assert_eq!(config.base_size, Some(18));
        assert_eq!(config.scale_ratio, Some(1.333));
        assert_eq!(config.spacing_base, Some(8));
        assert_eq!(config.radius_base, Some(6));
        assert_eq!(config.shadow_levels, Some(3));
        assert_eq!(config.strategy, Some(ShadeStrategy::Brightness));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.effective_output(), PathBuf::from("build/tokens"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.effective_output(), PathBuf::from("dist"));
    }

    #[test]
    fn test_non_numeric_size_is_rejected() {
        let err = Config::parse("base-size: large").unwrap_err();
        assert!(matches!(err, TokenError::Parse { .. }));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Config::parse("strategy: oklch").is_err());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = Config {
            primary: Some("#111111".to_string()),
            base_size: Some(14),
            ..Default::default()
        };
        let flags = Config {
            base_size: Some(20),
            accent: Some("#222222".to_string()),
            ..Default::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.primary.as_deref(), Some("#111111"));
        assert_eq!(merged.base_size, Some(20));
        assert_eq!(merged.accent.as_deref(), Some("#222222"));
    }

    #[test]
    fn test_to_seeds_defaults() {
        let seeds = Config::default().to_seeds();
        assert_eq!(seeds, Seeds::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            primary: Some("#3b82f6".to_string()),
            scale_ratio: Some(1.5),
            strategy: Some(ShadeStrategy::Hsl),
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("scale-ratio: 1.5"));
        assert!(!yaml.contains("accent"));
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());

        std::fs::write(dir.path().join(CONFIG_FILENAME), "base-size: 12").unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.base_size, Some(12));

        let missing = dir.path().join("other.yaml");
        assert!(Config::discover(Some(&missing), dir.path()).is_err());
    }
}
