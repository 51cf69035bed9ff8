// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[motion]` - Entrance reveal behavior and stagger timing
//! - `[window]` - Initial window geometry
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_VITRINE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_vitrine::config::{self, Config};
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

use crate::error::{Error, Result};
use crate::paths;
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Entrance reveal settings.
///
/// `reveal_enabled = false` is the reduce-motion mode: sections render fully
/// visible immediately and no entrance fades run. Visibility latches still
/// fire either way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Whether entrance reveal animations run at all.
    #[serde(
        default = "default_reveal_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_enabled: Option<bool>,

    /// Lead-in delay before the first staggered list item (milliseconds).
    #[serde(
        default = "default_base_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_delay_ms: Option<u64>,

    /// Additional delay per staggered list item (milliseconds).
    #[serde(
        default = "default_step_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub step_delay_ms: Option<u64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_enabled: default_reveal_enabled(),
            base_delay_ms: default_base_delay_ms(),
            step_delay_ms: default_step_delay_ms(),
        }
    }
}

impl MotionConfig {
    /// Returns the effective lead-in delay, clamped to the allowed range.
    #[must_use]
    pub fn effective_base_delay_ms(&self) -> u64 {
        self.base_delay_ms
            .unwrap_or(DEFAULT_REVEAL_BASE_DELAY_MS)
            .clamp(MIN_REVEAL_BASE_DELAY_MS, MAX_REVEAL_BASE_DELAY_MS)
    }

    /// Returns the effective per-item delay, clamped to the allowed range.
    #[must_use]
    pub fn effective_step_delay_ms(&self) -> u64 {
        self.step_delay_ms
            .unwrap_or(DEFAULT_REVEAL_STEP_DELAY_MS)
            .clamp(MIN_REVEAL_STEP_DELAY_MS, MAX_REVEAL_STEP_DELAY_MS)
    }

    /// Returns whether entrance reveals are enabled.
    #[must_use]
    pub fn is_reveal_enabled(&self) -> bool {
        self.reveal_enabled.unwrap_or(true)
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Window height in logical pixels.
    #[serde(
        default = "default_window_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl WindowConfig {
    /// Returns the effective window size, rejecting values below the minimums.
    #[must_use]
    pub fn effective_size(&self) -> (f32, f32) {
        let width = self
            .width
            .filter(|w| *w >= MIN_WINDOW_WIDTH)
            .unwrap_or(DEFAULT_WINDOW_WIDTH);
        let height = self
            .height
            .filter(|h| *h >= MIN_WINDOW_HEIGHT)
            .unwrap_or(DEFAULT_WINDOW_HEIGHT);
        (width, height)
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

    /// Entrance reveal settings.
    #[serde(default)]
    pub motion: MotionConfig,

    /// Initial window geometry.
    #[serde(default)]
    pub window: WindowConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_reveal_enabled() -> Option<bool> {
    Some(true)
}

fn default_base_delay_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_BASE_DELAY_MS)
}

fn default_step_delay_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_STEP_DELAY_MS)
}

fn default_window_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
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
            motion: MotionConfig {
                reveal_enabled: Some(false),
                base_delay_ms: Some(250),
                step_delay_ms: Some(80),
            },
            window: WindowConfig {
                width: Some(1024.0),
                height: Some(768.0),
            },
        };

        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(CONFIG_FILE);

        save_to_path(&config, &path).expect("save config");
        let loaded = load_from_path(&path).expect("load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_yields_default_without_warning() {
        let dir = tempdir().expect("create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_file_yields_default_with_warning() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "this is { not toml").expect("write file");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(
            warning,
            Some("notification-config-load-error".to_string())
        );
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write file");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.motion, MotionConfig::default());
        assert_eq!(loaded.window, WindowConfig::default());
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"Dark\"\n").expect("write file");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"neon\"\n").expect("write file");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().expect("create temp dir");
        let nested = dir.path().join("deeply").join("nested");
        let path = nested.join(CONFIG_FILE);

        save_to_path(&Config::default(), &path).expect("save config");
        assert!(path.exists());
    }

    #[test]
    fn motion_delays_clamp_to_bounds() {
        let motion = MotionConfig {
            reveal_enabled: Some(true),
            base_delay_ms: Some(999_999),
            step_delay_ms: Some(999_999),
        };
        assert_eq!(motion.effective_base_delay_ms(), MAX_REVEAL_BASE_DELAY_MS);
        assert_eq!(motion.effective_step_delay_ms(), MAX_REVEAL_STEP_DELAY_MS);
    }

    #[test]
    fn window_size_rejects_values_below_minimum() {
        let window = WindowConfig {
            width: Some(10.0),
            height: Some(10.0),
        };
        assert_eq!(
            window.effective_size(),
            (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        );
    }

    #[test]
    fn default_motion_is_enabled() {
        assert!(MotionConfig::default().is_reveal_enabled());
    }
}
