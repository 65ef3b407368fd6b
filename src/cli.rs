//! Command-line argument parsing
//!
//! Flags override the values from the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{AppConfig, DEFAULT_FONT_SIZE};

/// Counts up what you have earned since you started the timer
#[derive(Parser, Debug, Default)]
#[command(name = "wage-timer", version, about = "A desktop wage counter")]
pub struct CliArgs {
    /// Visual theme: "decorated", "plain", or a user theme id
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Font file to render text with
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Also write daily-rotated log files into DIR
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Settings the application starts with
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub theme_id: String,
    pub font_path: PathBuf,
    /// Logical pixels, always positive
    pub font_size: f32,
}

impl CliArgs {
    /// Merge parsed CLI args over the loaded config file
    pub fn into_config(self, config: AppConfig) -> StartupConfig {
        let font_size = if config.font_size.is_finite() && config.font_size > 0.0 {
            config.font_size
        } else {
            tracing::warn!(
                "Ignoring invalid font_size {}, using {}",
                config.font_size,
                DEFAULT_FONT_SIZE
            );
            DEFAULT_FONT_SIZE
        };

        StartupConfig {
            theme_id: self.theme.unwrap_or(config.theme),
            font_path: self.font.unwrap_or(config.font_path),
            font_size,
        }
    }
}
