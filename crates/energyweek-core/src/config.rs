//! TOML-based application configuration.
//!
//! Stores display preferences for the CLI session. Grid state itself is
//! never persisted; only presentation settings live on disk, at
//! `~/.config/energyweek/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show energy levels with their emoji prefix.
    #[serde(default = "default_true")]
    pub emoji_labels: bool,
    /// Print recommendation lines after each recompute.
    #[serde(default = "default_true")]
    pub show_recommendations: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/energyweek/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            emoji_labels: true,
            show_recommendations: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("energyweek").join("config.toml"))
    }

    /// Load from the default location, or return defaults when the file
    /// does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, or return defaults when missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| {
                ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into()
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "display.emoji_labels" => Some(self.display.emoji_labels.to_string()),
            "display.show_recommendations" => Some(self.display.show_recommendations.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-separated key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "display.emoji_labels" => self.display.emoji_labels = parse_bool(key, value)?,
            "display.show_recommendations" => {
                self.display.show_recommendations = parse_bool(key, value)?
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse().map_err(|_| {
        ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected true or false, got '{value}'"),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.display.emoji_labels);
        assert!(config.display.show_recommendations);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.display.emoji_labels);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("energyweek").join("config.toml");

        let mut config = Config::default();
        config.set("display.emoji_labels", "false").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.display.emoji_labels);
        assert!(loaded.display.show_recommendations);
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = Config::default();
        assert_eq!(
            config.get("display.show_recommendations").as_deref(),
            Some("true")
        );
        config.set("display.show_recommendations", "false").unwrap();
        assert_eq!(
            config.get("display.show_recommendations").as_deref(),
            Some("false")
        );
        assert_eq!(config.get("display.theme"), None);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("display.theme", "dark").is_err());
        assert!(config.set("display.emoji_labels", "maybe").is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "display = \"not a table\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
