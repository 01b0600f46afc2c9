//! Config Module
//!
//! Persisted freecam tunables. The on-disk format is a pretty-printed JSON
//! document with the five fields below; missing fields fall back to their
//! defaults, and a missing or unreadable file falls back to a full default
//! config that is immediately written back so the user has something to edit.
//!
//! Every field is clamped to its documented range by [`FreecamConfig::validate`]
//! before the core uses it.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default flight speed in meters per tick.
const DEFAULT_MOVE_SPEED: f32 = 0.2;
/// Default sprint speed multiplier.
const DEFAULT_SPRINT_MULTIPLIER: f32 = 2.5;
/// Default host mouse sensitivity.
const DEFAULT_MOUSE_SENSITIVITY: f32 = 1.0;
/// Default camera tether radius in meters.
const DEFAULT_MAX_DISTANCE: i32 = 12;
/// Whether the status overlay text is produced by default.
const DEFAULT_SHOW_OVERLAY: bool = true;

fn default_move_speed() -> f32 {
    DEFAULT_MOVE_SPEED
}

fn default_sprint_multiplier() -> f32 {
    DEFAULT_SPRINT_MULTIPLIER
}

fn default_mouse_sensitivity() -> f32 {
    DEFAULT_MOUSE_SENSITIVITY
}

fn default_max_distance() -> i32 {
    DEFAULT_MAX_DISTANCE
}

fn default_show_overlay() -> bool {
    DEFAULT_SHOW_OVERLAY
}

/// Freecam tunables, read-only to the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreecamConfig {
    /// Flight speed in meters per tick. Valid range `[0.01, 5.0]`.
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    /// Speed multiplier while the sprint key is held. Valid range `[1.0, 10.0]`.
    #[serde(default = "default_sprint_multiplier")]
    pub sprint_multiplier: f32,
    /// Host mouse sensitivity feeding the look-direction curve. Valid range `[0.1, 3.0]`.
    #[serde(default = "default_mouse_sensitivity")]
    pub mouse_sensitivity: f32,
    /// Maximum distance between camera and avatar in meters. Valid range `[1, 64]`.
    #[serde(default = "default_max_distance")]
    pub max_distance: i32,
    /// Whether the status overlay text is produced.
    #[serde(default = "default_show_overlay")]
    pub show_overlay: bool,
}

impl Default for FreecamConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            sprint_multiplier: DEFAULT_SPRINT_MULTIPLIER,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            max_distance: DEFAULT_MAX_DISTANCE,
            show_overlay: DEFAULT_SHOW_OVERLAY,
        }
    }
}

impl FreecamConfig {
    /// Clamps every field to its documented valid range.
    pub fn validate(&mut self) {
        self.move_speed = self.move_speed.clamp(0.01, 5.0);
        self.sprint_multiplier = self.sprint_multiplier.clamp(1.0, 10.0);
        self.mouse_sensitivity = self.mouse_sensitivity.clamp(0.1, 3.0);
        self.max_distance = self.max_distance.clamp(1, 64);
    }

    /// Reads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Writes this config to a JSON file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads and validates the config, substituting defaults on failure.
    ///
    /// A load that had to fall back to defaults writes the default document
    /// back to `path`. Values read from disk are clamped into range.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(mut config) => {
                config.validate();
                log::info!("configuration loaded from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!(
                    "failed to load configuration from {} ({err}), using defaults",
                    path.display()
                );
                let config = Self::default();
                match config.save(path) {
                    Ok(()) => log::info!("default configuration written to {}", path.display()),
                    Err(err) => log::error!("failed to write default configuration: {err}"),
                }
                config
            }
        }
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur during config load/save.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
