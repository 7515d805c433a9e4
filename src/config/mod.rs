//! Configuration module for the merge sort studio
//!
//! This module handles persistent studio configuration:
//! - Input policy (array size, accepted value bounds, random value bounds)
//! - Playback settings (speed slider bounds, initial speed)
//! - Display language
//!
//! # App Data Location
//!
//! Configuration is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.mergesort-studio/`
//! - **macOS**: `~/Library/Application Support/dev.mergesort-studio/`
//! - **Windows**: `%APPDATA%\dev.mergesort-studio\`
//!
//! # Files
//!
//! - `config.json` - The default configuration file
//! - Any `.toml` or `.json` file passed explicitly via [`StudioConfig::load_from`]
//!
//! # Example
//!
//! ```ignore
//! use mergesort_studio::config::StudioConfig;
//!
//! let mut config = StudioConfig::load_or_default();
//! config.playback.initial_speed = 900;
//! config.save()?;
//! ```

pub mod settings;

pub use settings::*;

use crate::error::{Result, StudioError};
use crate::i18n::Language;
use crate::input::InputPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.mergesort-studio";

/// Config filename
pub const CONFIG_FILE: &str = "config.json";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        StudioError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            StudioError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the default config file
pub fn config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(CONFIG_FILE))
}

// ==================== Studio Config ====================

/// Persistent studio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Version for future migration support
    #[serde(default = "default_config_version")]
    pub version: u32,

    /// Language of step descriptions and labels
    #[serde(default)]
    pub language: Language,

    /// Validation bounds for user input
    #[serde(default)]
    pub input: InputPolicy,

    /// Playback speed preferences
    #[serde(default)]
    pub playback: PlaybackSettings,
}

fn default_config_version() -> u32 {
    1
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            version: 1,
            language: Language::default(),
            input: InputPolicy::default(),
            playback: PlaybackSettings::default(),
        }
    }
}

impl StudioConfig {
    /// Load config from the default location
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = config_path().ok_or_else(|| {
            StudioError::Config("Could not determine config path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Load a config file; `.toml` files are parsed as TOML, anything else as JSON
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StudioError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config: Self = if is_toml {
            toml::from_str(&content).map_err(|e| {
                StudioError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                StudioError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        };

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save config to the default location as JSON
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(CONFIG_FILE))
    }

    /// Save config to `path`; `.toml` paths are written as TOML, anything else as JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StudioError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let content = if is_toml {
            toml::to_string_pretty(self)
                .map_err(|e| StudioError::Config(format!("Failed to serialize config: {}", e)))?
        } else {
            serde_json::to_string_pretty(self)
                .map_err(|e| StudioError::Config(format!("Failed to serialize config: {}", e)))?
        };

        std::fs::write(path, content).map_err(|e| {
            StudioError::Config(format!("Failed to write config file {:?}: {}", path, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudioConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.language, Language::English);
        assert_eq!(config.input.size, 12);
        assert_eq!(config.playback.initial_speed, DEFAULT_SPEED);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StudioConfig = serde_json::from_str(r#"{"language":"Japanese"}"#).unwrap();
        assert_eq!(config.language, Language::Japanese);
        assert_eq!(config.input, InputPolicy::default());
        assert_eq!(config.playback.speed_range, SpeedRange::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.toml");

        let mut config = StudioConfig::default();
        config.input.size = 10;
        config.playback.initial_speed = 500;
        config.save_to(&path).unwrap();

        let loaded = StudioConfig::load_from(&path).unwrap();
        assert_eq!(loaded.input.size, 10);
        assert_eq!(loaded.playback.initial_speed, 500);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = StudioConfig::default();
        config.language = Language::Japanese;
        config.save_to(&path).unwrap();

        let loaded = StudioConfig::load_from(&path).unwrap();
        assert_eq!(loaded.language, Language::Japanese);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = StudioConfig::load_from("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, StudioError::Config(_)));
    }

    #[test]
    fn test_load_garbage_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();
        assert!(StudioConfig::load_from(&path).is_err());
    }
}
