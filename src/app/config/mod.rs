// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Default toast lifetimes
//! - `[logging]` - Log filter used when `RUST_LOG` is unset
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` or the `ISSUE2MD_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use issue2md_console::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("zh-CN".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::DefaultDurations;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key shown when an existing config file cannot be read.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast lifetimes applied when a producer does not choose one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    #[serde(default = "default_error_duration_ms")]
    pub error_duration_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            error_duration_ms: DEFAULT_ERROR_DURATION_MS,
        }
    }
}

impl NotificationsConfig {
    /// Converts the section into the manager's default durations, clamped
    /// to the range the settings sliders offer.
    #[must_use]
    pub fn durations(&self) -> DefaultDurations {
        let clamp = |ms: u64| {
            Duration::from_millis(
                ms.clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS),
            )
        };
        DefaultDurations {
            standard: clamp(self.duration_ms),
            error: clamp(self.error_duration_ms),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    /// Filter directive such as `debug` or `issue2md_console=trace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> u64 {
    DEFAULT_NOTIFICATION_DURATION_MS
}

fn default_error_duration_ms() -> u64 {
    DEFAULT_ERROR_DURATION_MS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// Returns a tuple of (config, optional_warning_key). A missing file yields the
/// defaults silently; an unreadable one yields the defaults and a warning key.
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
                    tracing::warn!(path = %path.display(), error = %err, "config load failed, using defaults");
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
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
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".into())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), "config saved");
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
                language: Some("zh-CN".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                duration_ms: 4500,
                error_duration_ms: 8000,
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
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
        fs::write(&config_path, "[general\nlanguage = ").expect("failed to write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.notifications.duration_ms, 3000);
        assert_eq!(config.notifications.error_duration_ms, 5000);
        assert_eq!(config.logging.level, None);
    }

    #[test]
    fn durations_convert_to_manager_defaults() {
        let section = NotificationsConfig {
            duration_ms: 2000,
            error_duration_ms: 7000,
        };
        let durations = section.durations();
        assert_eq!(durations.standard, Duration::from_millis(2000));
        assert_eq!(durations.error, Duration::from_millis(7000));
    }

    #[test]
    fn out_of_range_durations_are_clamped() {
        let section = NotificationsConfig {
            duration_ms: 0,
            error_duration_ms: 99_999,
        };
        let durations = section.durations();
        assert_eq!(
            durations.standard,
            Duration::from_millis(MIN_NOTIFICATION_DURATION_MS)
        );
        assert_eq!(
            durations.error,
            Duration::from_millis(MAX_NOTIFICATION_DURATION_MS)
        );
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\ntheme_mode = \"Dark\"\n\n[notifications]\nduration_ms = 1500\n",
        )
        .expect("failed to write file");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.notifications.duration_ms, 1500);
        assert_eq!(config.notifications.error_duration_ms, 5000);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.notifications.duration_ms = 6000;

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.notifications.duration_ms, 6000);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "this is [not valid toml")
            .expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("failed to save");
        let content = fs::read_to_string(&config_path).expect("failed to read");

        assert!(content.contains("[general]"));
        assert!(content.contains("[notifications]"));
        assert!(content.contains("theme_mode = \"system\""));
    }
}
