//! Application configuration management
//!
//! Handles loading and saving viewer settings:
//! - Event loop tick rate
//! - Tree indentation width
//! - Tier glyphs and check marks

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{RoadmapError, Result};

/// Settable configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    TickRate,
    IndentWidth,
    ShowIcons,
}

impl ConfigKey {
    /// Get the key name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::TickRate => "tick-rate",
            ConfigKey::IndentWidth => "indent-width",
            ConfigKey::ShowIcons => "show-icons",
        }
    }

    /// Parse from string
    pub fn from_name(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == s)
    }

    /// Get all keys
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::TickRate,
            ConfigKey::IndentWidth,
            ConfigKey::ShowIcons,
        ]
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Cells of indentation per tree depth level
    #[serde(default = "default_indent_width")]
    pub indent_width: u16,

    /// Whether tier glyphs and check marks are drawn
    #[serde(default = "default_show_icons")]
    pub show_icons: bool,
}

/// Largest accepted `indent_width`
pub const MAX_INDENT_WIDTH: u16 = 8;

fn default_tick_rate() -> u64 {
    250
}

fn default_indent_width() -> u16 {
    2
}

fn default_show_icons() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            indent_width: default_indent_width(),
            show_icons: default_show_icons(),
        }
    }
}

impl Config {
    /// Load configuration from the given path or the default location.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = Self::resolve_path(path)?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate().map_err(|e| {
                RoadmapError::Config(format!("{} (in {})", e, config_path.display()))
            })?;
            tracing::debug!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to the given path or the default location
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = Self::resolve_path(path)?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Use the override when given, the platform config file otherwise
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(p.to_path_buf()),
            None => Self::config_path(),
        }
    }

    /// Get the default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "kelaasor", "roadmap-rs")
            .ok_or_else(|| RoadmapError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Read a value as a display string
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::TickRate => self.tick_rate_ms.to_string(),
            ConfigKey::IndentWidth => self.indent_width.to_string(),
            ConfigKey::ShowIcons => self.show_icons.to_string(),
        }
    }

    /// Check value ranges. Applied to loaded files and to every `set`.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(RoadmapError::InvalidInput(
                "Tick rate must be at least 1 ms".into(),
            ));
        }
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(RoadmapError::InvalidInput(format!(
                "Indent width must be between 0 and {}",
                MAX_INDENT_WIDTH
            )));
        }
        Ok(())
    }

    /// Parse and set a value. On error the config is left unchanged.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let invalid = || {
            RoadmapError::InvalidInput(format!(
                "Invalid value '{}' for '{}'",
                value,
                key.name()
            ))
        };

        let mut updated = self.clone();
        match key {
            ConfigKey::TickRate => {
                updated.tick_rate_ms = value.parse().map_err(|_| invalid())?;
            }
            ConfigKey::IndentWidth => {
                updated.indent_width = value.parse().map_err(|_| invalid())?;
            }
            ConfigKey::ShowIcons => {
                updated.show_icons = value.parse().map_err(|_| invalid())?;
            }
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.indent_width, 2);
        assert!(config.show_icons);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("indent_width = 4").unwrap();
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.show_icons);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set(ConfigKey::ShowIcons, "false").unwrap();
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert!(!loaded.show_icons);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(RoadmapError::Toml(_))
        ));
    }

    #[test]
    fn test_zero_tick_rate_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_rate_ms = 0").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, RoadmapError::Config(_)));
        assert!(err.to_string().contains("Tick rate"));
    }

    #[test]
    fn test_oversized_indent_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "indent_width = 30000").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, RoadmapError::Config(_)));
        assert!(err.to_string().contains("Indent width"));
    }

    #[test]
    fn test_boundary_values_are_accepted() {
        let config: Config = toml::from_str("tick_rate_ms = 1\nindent_width = 8").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set(ConfigKey::TickRate, "0").is_err());
        assert!(config.set(ConfigKey::TickRate, "abc").is_err());
        assert!(config.set(ConfigKey::IndentWidth, "20").is_err());
        assert!(config.set(ConfigKey::ShowIcons, "maybe").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_key_from_name() {
        assert_eq!(ConfigKey::from_name("tick-rate"), Some(ConfigKey::TickRate));
        assert_eq!(ConfigKey::from_name("show-icons"), Some(ConfigKey::ShowIcons));
        assert_eq!(ConfigKey::from_name("color"), None);
    }
}
