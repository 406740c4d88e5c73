//! Configuration management for fsmaster
//!
//! The only user state that survives a restart is the theme preference.
//! The remaining fields are timing knobs with sensible defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::{Theme, ThemeMode};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selected theme ("dark" or "light")
    pub theme: ThemeMode,

    /// Seconds between playground example rotations (0 disables rotation)
    pub example_rotation_secs: u64,

    /// How long notifications stay on screen, in milliseconds
    pub notification_ms: u64,

    /// Vim mode enabled
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { theme: ThemeMode::Dark, example_rotation_secs: 10, notification_ms: 3000, vim_mode: true }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            let config = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse {:?}", path))?;
            tracing::debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "fsmaster").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "fsmaster").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("fsmaster.log"))
    }

    /// Flip between dark and light; returns the new mode
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggle();
        tracing::info!("Theme switched to {}", self.theme);
        self.theme
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        Theme::for_mode(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_dark() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.active_theme().name, "Tokyo Night");
    }

    #[test]
    fn default_timings() {
        let config = Config::default();
        assert_eq!(config.example_rotation_secs, 10);
        assert_eq!(config.notification_ms, 3000);
    }

    #[test]
    fn theme_serializes_as_plain_string() {
        let config = Config { theme: ThemeMode::Light, ..Default::default() };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""theme":"light""#));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(config.vim_mode);
        assert_eq!(config.example_rotation_secs, 10);
    }

    #[test]
    fn toggle_theme_flips() {
        let mut config = Config::default();
        assert_eq!(config.toggle_theme(), ThemeMode::Light);
        assert_eq!(config.toggle_theme(), ThemeMode::Dark);
    }

    #[test]
    fn load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_keeps_theme() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.toggle_theme();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, ThemeMode::Light);
    }

    #[test]
    fn invalid_theme_value_fails_to_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"theme":"sepia"}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
