// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[toast]` - Toast width, hold duration, slide easing and resting position
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass an override directory (the `--config-dir` CLI flag)
//! 3. Set `ICED_NOTIFY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_notify::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load_with_override(None);
//!
//! // Modify a setting
//! config.toast.width = Some(360);
//!
//! // Save the modified configuration
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::{Easing, ToastSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedNotify";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_NOTIFY_CONFIG_DIR";

/// Warning key returned by [`load_with_override`] when the settings file is unreadable.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast appearance and timing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Toast width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,

    /// Time the toast rests on screen before sliding out, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u64>,

    /// Easing curve for both slide legs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,

    /// Explicit resting x. When absent the toast is right-aligned in the viewport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,

    /// Explicit resting y.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

impl Config {
    /// Resolves the `[toast]` section into widget settings, clamping values
    /// that fall outside the supported ranges.
    #[must_use]
    pub fn toast_settings(&self) -> ToastSettings {
        let width = self
            .toast
            .width
            .unwrap_or(DEFAULT_TOAST_WIDTH)
            .clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH);
        let hold_ms = self
            .toast
            .hold_ms
            .unwrap_or(DEFAULT_HOLD_MS)
            .min(MAX_HOLD_MS);

        ToastSettings {
            width,
            hold: Duration::from_millis(hold_ms),
            easing: self.toast.easing.unwrap_or_default(),
            x: self.toast.x,
            y: self.toast.y,
        }
    }
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Returns the config directory, honoring the override, then the
/// `ICED_NOTIFY_CONFIG_DIR` environment variable, then the platform default.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from a custom directory, or the default location
/// when `base_dir` is `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str::<Config>(&content)?;
    Ok(config)
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
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            toast: ToastConfig {
                width: Some(420),
                hold_ms: Some(2500),
                easing: Some(Easing::EaseOut),
                x: Some(10),
                y: Some(20),
            },
        }
    }

    #[test]
    fn save_and_load_preserves_sections() {
        let config = sample_config();
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
    fn load_with_override_reports_warning_for_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toast\nwidth = ")
            .expect("failed to write corrupt config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_then_load_with_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        save_with_override(&sample_config(), Some(base_dir.clone())).expect("save failed");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.toast.width, Some(420));
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn partial_file_uses_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toast]\nhold_ms = 200\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert!(loaded.general.language.is_none());
        assert_eq!(loaded.toast.hold_ms, Some(200));
        assert!(loaded.toast.width.is_none());
    }

    #[test]
    fn easing_is_written_in_kebab_case() {
        let content = toml::to_string_pretty(&sample_config()).expect("serialize failed");
        assert!(content.contains("easing = \"ease-out\""));
    }

    #[test]
    fn toast_settings_default_values() {
        let settings = Config::default().toast_settings();
        assert_eq!(settings.width, DEFAULT_TOAST_WIDTH);
        assert_eq!(settings.hold, Duration::from_millis(DEFAULT_HOLD_MS));
        assert_eq!(settings.easing, Easing::Linear);
        assert!(settings.x.is_none());
        assert!(settings.y.is_none());
    }

    #[test]
    fn toast_settings_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.toast.width = Some(5);
        config.toast.hold_ms = Some(u64::MAX);

        let settings = config.toast_settings();
        assert_eq!(settings.width, MIN_TOAST_WIDTH);
        assert_eq!(settings.hold, Duration::from_millis(MAX_HOLD_MS));
    }

    #[test]
    fn explicit_override_wins_over_environment() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = config_dir_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(dir.as_deref(), Some(temp_dir.path()));
    }
}
