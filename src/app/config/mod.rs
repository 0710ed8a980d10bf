// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast durations per severity and screen corner
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_TOASTS_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::{Durations, Position};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Seconds a success toast stays visible.
    #[serde(default = "default_success_secs", skip_serializing_if = "Option::is_none")]
    pub success_secs: Option<u32>,

    /// Seconds an info toast stays visible.
    #[serde(default = "default_info_secs", skip_serializing_if = "Option::is_none")]
    pub info_secs: Option<u32>,

    /// Seconds a warning toast stays visible.
    #[serde(default = "default_warning_secs", skip_serializing_if = "Option::is_none")]
    pub warning_secs: Option<u32>,

    /// Seconds an error toast stays visible; absent means until dismissed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_secs: Option<u32>,

    /// Screen corner of the toast stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_secs: default_success_secs(),
            info_secs: default_info_secs(),
            warning_secs: default_warning_secs(),
            error_secs: None,
            position: Some(Position::default()),
        }
    }
}

impl NotificationConfig {
    /// Builds the manager's duration table, clamping every value to the
    /// supported range.
    #[must_use]
    pub fn durations(&self) -> Durations {
        let secs = |value: Option<u32>| {
            value.map(|s| Duration::from_secs(s.clamp(MIN_TOAST_SECS, MAX_TOAST_SECS).into()))
        };
        Durations {
            success: secs(self.success_secs),
            info: secs(self.info_secs),
            warning: secs(self.warning_secs),
            error: secs(self.error_secs),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast notification settings.
    #[serde(default)]
    pub notifications: NotificationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_success_secs() -> Option<u32> {
    Some(DEFAULT_SUCCESS_TOAST_SECS)
}

fn default_info_secs() -> Option<u32> {
    Some(DEFAULT_INFO_TOAST_SECS)
}

fn default_warning_secs() -> Option<u32> {
    Some(DEFAULT_WARNING_TOAST_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "config saved");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationConfig {
                success_secs: Some(2),
                info_secs: Some(4),
                warning_secs: Some(8),
                error_secs: Some(30),
                position: Some(Position::TopLeft),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_use_defaults() {
        let config: Config = toml::from_str("[notifications]\nposition = \"top-right\"\n")
            .expect("partial config should parse");

        assert_eq!(config.notifications.position, Some(Position::TopRight));
        assert_eq!(
            config.notifications.warning_secs,
            Some(DEFAULT_WARNING_TOAST_SECS)
        );
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn durations_are_clamped_and_errors_persist_by_default() {
        let notifications = NotificationConfig {
            success_secs: Some(0),
            warning_secs: Some(600),
            ..NotificationConfig::default()
        };
        let durations = notifications.durations();

        assert_eq!(
            durations.success,
            Some(Duration::from_secs(MIN_TOAST_SECS.into()))
        );
        assert_eq!(
            durations.warning,
            Some(Duration::from_secs(MAX_TOAST_SECS.into()))
        );
        assert_eq!(durations.error, None);
    }

    #[test]
    fn default_durations_match_manager_defaults() {
        assert_eq!(NotificationConfig::default().durations(), Durations::default());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
