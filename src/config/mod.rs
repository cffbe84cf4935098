// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file. The application never writes the file;
//! `save_to_path()` exists for generating one.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[slider]` - Container height, auto-demo switch, page lead-in
//! - `[auto_demo]` - Sweep step, tick interval, pause, visibility threshold
//!
//! Every field is optional. Accessors clamp stored values into their valid
//! range, so a hand-edited file can never produce a broken widget.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path, or
//!    `load_with_override()` with an explicit directory
//! 2. Pass `--config-dir` or set `ICED_COMPARE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_compare::config;
//!
//! let (config, _warning) = config::load();
//! let height = config.slider_height();
//! let timing = config.demo_timing();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{DemoTiming, VisibilityThreshold};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "de").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Comparison widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Container height in logical pixels.
    #[serde(default = "default_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Play the reveal animation on first viewport entry.
    #[serde(default = "default_auto_demo", skip_serializing_if = "Option::is_none")]
    pub auto_demo: Option<bool>,

    /// Empty space above the widget in the showcase page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_in: Option<f32>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            auto_demo: default_auto_demo(),
            lead_in: None,
        }
    }
}

/// Reveal animation tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoDemoConfig {
    /// Percentage points moved per tick.
    #[serde(default = "default_step_percent", skip_serializing_if = "Option::is_none")]
    pub step_percent: Option<f32>,

    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_ms", skip_serializing_if = "Option::is_none")]
    pub tick_ms: Option<u64>,

    /// Hold time at the right edge in milliseconds.
    #[serde(default = "default_pause_ms", skip_serializing_if = "Option::is_none")]
    pub pause_ms: Option<u64>,

    /// Visible fraction that triggers the animation (0.0–1.0).
    #[serde(
        default = "default_visibility_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility_threshold: Option<f32>,
}

impl Default for AutoDemoConfig {
    fn default() -> Self {
        Self {
            step_percent: default_step_percent(),
            tick_ms: default_tick_ms(),
            pause_ms: default_pause_ms(),
            visibility_threshold: default_visibility_threshold(),
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

    /// Comparison widget settings.
    #[serde(default)]
    pub slider: SliderConfig,

    /// Reveal animation tuning.
    #[serde(default)]
    pub auto_demo: AutoDemoConfig,
}

impl Config {
    /// Container height, clamped to the supported range.
    #[must_use]
    pub fn slider_height(&self) -> f32 {
        clamp_height(self.slider.height.unwrap_or(DEFAULT_SLIDER_HEIGHT))
    }

    /// Whether the reveal animation is enabled.
    #[must_use]
    pub fn auto_demo_enabled(&self) -> bool {
        self.slider.auto_demo.unwrap_or(DEFAULT_AUTO_DEMO)
    }

    /// Lead-in space above the widget, clamped to the supported range.
    #[must_use]
    pub fn lead_in(&self) -> f32 {
        clamp_lead_in(self.slider.lead_in.unwrap_or(DEFAULT_LEAD_IN))
    }

    /// Animation timing built from the `[auto_demo]` section.
    #[must_use]
    pub fn demo_timing(&self) -> DemoTiming {
        DemoTiming::new(
            self.auto_demo
                .step_percent
                .unwrap_or(DEFAULT_DEMO_STEP_PERCENT),
            self.auto_demo.tick_ms.unwrap_or(DEFAULT_DEMO_TICK_MS),
            self.auto_demo.pause_ms.unwrap_or(DEFAULT_DEMO_PAUSE_MS),
        )
    }

    /// Visibility threshold that triggers the animation.
    #[must_use]
    pub fn visibility_threshold(&self) -> VisibilityThreshold {
        VisibilityThreshold::new(
            self.auto_demo
                .visibility_threshold
                .unwrap_or(DEFAULT_VISIBILITY_THRESHOLD),
        )
    }
}

/// Keeps container heights inside the supported range.
#[must_use]
pub fn clamp_height(value: f32) -> f32 {
    if value.is_nan() {
        return DEFAULT_SLIDER_HEIGHT;
    }
    value.clamp(MIN_SLIDER_HEIGHT, MAX_SLIDER_HEIGHT)
}

/// Keeps lead-in space inside the supported range.
#[must_use]
pub fn clamp_lead_in(value: f32) -> f32 {
    if value.is_nan() {
        return DEFAULT_LEAD_IN;
    }
    value.clamp(0.0, MAX_LEAD_IN)
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_height() -> Option<f32> {
    Some(DEFAULT_SLIDER_HEIGHT)
}

fn default_auto_demo() -> Option<bool> {
    Some(DEFAULT_AUTO_DEMO)
}

fn default_step_percent() -> Option<f32> {
    Some(DEFAULT_DEMO_STEP_PERCENT)
}

fn default_tick_ms() -> Option<u64> {
    Some(DEFAULT_DEMO_TICK_MS)
}

fn default_pause_ms() -> Option<u64> {
    Some(DEFAULT_DEMO_PAUSE_MS)
}

fn default_visibility_threshold() -> Option<f32> {
    Some(DEFAULT_VISIBILITY_THRESHOLD)
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
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
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
