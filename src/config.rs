//! User configuration
//!
//! Read from `~/.config/wage-timer/config.yaml`. The file is optional and
//! never written by the application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::theme::DEFAULT_THEME_ID;

/// Font size in logical pixels when none is configured
pub const DEFAULT_FONT_SIZE: f32 = 30.0;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Theme id ("decorated", "plain", or a user theme)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Font file, relative paths resolve against the working directory
    #[serde(default = "default_font_path")]
    pub font_path: PathBuf,

    /// Font size in logical pixels
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_theme() -> String {
    DEFAULT_THEME_ID.to_string()
}

fn default_font_path() -> PathBuf {
    PathBuf::from("pixel.ttf")
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_path: default_font_path(),
            font_size: default_font_size(),
        }
    }
}

impl AppConfig {
    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config YAML. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))
    }
}
