//! Configuration management
//!
//! Settings are stored as JSON in `<config dir>/dashtable/config.json`.
//! Every field has a default, so partial files are fine.

use crate::style::{StyleConfig, Theme};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    /// Base style every table falls back to for options it leaves unset
    pub table: StyleConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
    pub mouse_enabled: bool,
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    pub detail_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            mouse_enabled: true,
            tick_rate_ms: 250,
            detail_title: "Row Details".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
    /// Log file; defaults to `<data dir>/dashtable/dashtable.log`
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dashtable"))
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load from `path`, or from the default location
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Config::default()),
            },
        };

        if !path.exists() {
            if explicit {
                bail!("Config file not found: {}", path.display());
            }
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(10..=1000).contains(&self.ui.tick_rate_ms) {
            bail!(
                "ui.tick_rate_ms must be between 10 and 1000, got {}",
                self.ui.tick_rate_ms
            );
        }
        if self.ui.detail_title.trim().is_empty() {
            bail!("ui.detail_title must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.theme, Theme::Light);
        assert!(config.ui.mouse_enabled);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(!config.logging.enabled);
        assert_eq!(config.table, StyleConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_json(
            r##"{
                "ui": { "theme": "dark" },
                "table": { "striped": true, "zebraColor": "#333333" }
            }"##,
        )
        .unwrap();

        assert_eq!(config.ui.theme, Theme::Dark);
        assert!(config.ui.mouse_enabled);
        assert!(config.table.striped);
        assert_eq!(config.table.zebra_color.as_deref(), Some("#333333"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.ui.detail_title, "Row Details");
    }

    #[test]
    fn test_validation_rejects_bad_tick_rate() {
        let err = Config::from_json(r#"{ "ui": { "tick_rate_ms": 5 } }"#).unwrap_err();
        assert!(err.to_string().contains("tick_rate_ms"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        assert!(Config::load(Some(Path::new("/no/such/dashtable.json"))).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("dashtable-config-{}", std::process::id()));
        let path = dir.join("config.json");

        let mut config = Config::default();
        config.ui.theme = Theme::Dark;
        config.logging.enabled = true;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.ui.theme, Theme::Dark);
        assert!(loaded.logging.enabled);

        let _ = fs::remove_dir_all(&dir);
    }
}
