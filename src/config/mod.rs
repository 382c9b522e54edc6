// SPDX-License-Identifier: MPL-2.0
//! This module handles the preview configuration, loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[preview]` - Viewport fraction and backdrop dimming
//! - `[probe]` - Timeout and size limit for dimension probes
//! - `[thumbnail]` - Inline image size and named size classes
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_PREVIEW_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_preview::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let scale = config.preview_scale();
//! let limits = config.probe_settings();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::preview::{Backdrop, Dimensions, PreviewScale, ProbeSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Preview overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreviewConfig {
    /// Fraction of the viewport used by the preview (0.05 to 1.0).
    #[serde(default = "default_scale", skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,

    /// Alpha of the black backdrop (0.0 to 1.0).
    #[serde(
        default = "default_backdrop_opacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub backdrop_opacity: Option<f32>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            backdrop_opacity: default_backdrop_opacity(),
        }
    }
}

/// Dimension probe limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProbeConfig {
    #[serde(
        default = "default_probe_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,

    /// Largest image body downloaded or read from disk.
    #[serde(
        default = "default_probe_max_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_bytes: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_probe_timeout_secs(),
            max_bytes: default_probe_max_bytes(),
        }
    }
}

/// Size overrides selected by a thumbnail's `class_name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailClass {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Corner radius of the thumbnail frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
}

/// Inline image settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailConfig {
    #[serde(
        default = "default_thumbnail_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<f32>,

    #[serde(
        default = "default_thumbnail_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f32>,

    /// Named classes, e.g. `[thumbnail.classes.avatar]`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub classes: BTreeMap<String, ThumbnailClass>,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: default_thumbnail_width(),
            height: default_thumbnail_height(),
            classes: BTreeMap::new(),
        }
    }
}

/// Initial window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(
        default = "default_window_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<f32>,

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

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub probe: ProbeConfig,

    #[serde(default)]
    pub thumbnail: ThumbnailConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Validated preview scale.
    #[must_use]
    pub fn preview_scale(&self) -> PreviewScale {
        self.preview
            .scale
            .map(PreviewScale::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn backdrop(&self) -> Backdrop {
        self.preview
            .backdrop_opacity
            .map(Backdrop::new)
            .unwrap_or_default()
    }

    /// Probe limits, with the timeout clamped to `1..=MAX_PROBE_TIMEOUT_SECS`.
    #[must_use]
    pub fn probe_settings(&self) -> ProbeSettings {
        let timeout_secs = self
            .probe
            .timeout_secs
            .unwrap_or(DEFAULT_PROBE_TIMEOUT_SECS)
            .clamp(1, MAX_PROBE_TIMEOUT_SECS);
        let max_bytes = self
            .probe
            .max_bytes
            .filter(|&bytes| bytes > 0)
            .unwrap_or(DEFAULT_PROBE_MAX_BYTES);
        ProbeSettings {
            timeout: Duration::from_secs(timeout_secs),
            max_bytes,
        }
    }

    /// Viewport assumed before the window reports its real size.
    #[must_use]
    pub fn initial_viewport(&self) -> Dimensions {
        let width = self.window.width.unwrap_or(DEFAULT_WINDOW_WIDTH);
        let height = self.window.height.unwrap_or(DEFAULT_WINDOW_HEIGHT);
        Dimensions::new(width, height).unwrap_or(Dimensions::DEFAULT_VIEWPORT)
    }

    /// Thumbnail size and corner radius for an optional class name.
    ///
    /// Unknown classes and missing fields fall back to the `[thumbnail]` defaults.
    #[must_use]
    pub fn thumbnail_style(&self, class_name: Option<&str>) -> ThumbnailStyle {
        let base = ThumbnailStyle {
            width: self.thumbnail.width.unwrap_or(DEFAULT_THUMBNAIL_WIDTH),
            height: self.thumbnail.height.unwrap_or(DEFAULT_THUMBNAIL_HEIGHT),
            radius: 0.0,
        };

        match class_name.and_then(|name| self.thumbnail.classes.get(name)) {
            Some(class) => ThumbnailStyle {
                width: class.width.unwrap_or(base.width),
                height: class.height.unwrap_or(base.height),
                radius: class.radius.unwrap_or(base.radius),
            },
            None => base,
        }
    }
}

/// Resolved sizing for one inline image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailStyle {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_scale() -> Option<f32> {
    Some(DEFAULT_PREVIEW_SCALE)
}

fn default_backdrop_opacity() -> Option<f32> {
    Some(DEFAULT_BACKDROP_OPACITY)
}

fn default_probe_timeout_secs() -> Option<u64> {
    Some(DEFAULT_PROBE_TIMEOUT_SECS)
}

fn default_probe_max_bytes() -> Option<u64> {
    Some(DEFAULT_PROBE_MAX_BYTES)
}

fn default_thumbnail_width() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_WIDTH)
}

fn default_thumbnail_height() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_HEIGHT)
}

fn default_window_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
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
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
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
