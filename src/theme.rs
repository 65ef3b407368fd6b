//! Theme system
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/wage-timer/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DECORATED_YAML: &str = include_str!("../themes/decorated.yaml");
pub const PLAIN_YAML: &str = include_str!("../themes/plain.yaml");

/// Theme used when nothing else is configured
pub const DEFAULT_THEME_ID: &str = "decorated";

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "decorated", "plain")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "decorated",
        yaml: DECORATED_YAML,
    },
    BuiltinTheme {
        id: "plain",
        yaml: PLAIN_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Which window corner a motif row grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotifAnchor {
    /// Squares run rightwards from `(offset_x, offset_y)`
    TopLeft,
    /// Squares run leftwards from `(width - offset_x, height - offset_y)`
    BottomRight,
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub motifs: Vec<MotifData>,
}

/// A row of decorative squares (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct MotifData {
    pub anchor: MotifAnchor,
    pub color: String,
    pub count: u32,
    pub size: u32,
    pub spacing: u32,
    #[serde(default)]
    pub offset_x: u32,
    #[serde(default)]
    pub offset_y: u32,
}

/// A row of decorative squares, in logical pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    pub anchor: MotifAnchor,
    pub color: Color,
    pub count: u32,
    pub size: u32,
    pub spacing: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    /// Prompt, counter, and clock text
    pub foreground: Color,
    /// Wage validation message
    pub error: Color,
    pub motifs: Vec<Motif>,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let motifs = data
            .motifs
            .iter()
            .map(|m| {
                Ok(Motif {
                    anchor: m.anchor,
                    color: Color::from_hex(&m.color)?,
                    count: m.count,
                    size: m.size,
                    spacing: m.spacing,
                    offset_x: m.offset_x,
                    offset_y: m.offset_y,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Theme {
            name: data.name,
            background: Color::from_hex(&data.background)?,
            foreground: Color::from_hex(&data.foreground)?,
            error: data
                .error
                .as_ref()
                .map(|s| Color::from_hex(s))
                .transpose()?
                .unwrap_or(Color::rgb(0xB0, 0x00, 0x20)),
            motifs,
        })
    }

    /// Decorated theme (YAML-backed with Rust fallback)
    pub fn decorated() -> Self {
        match Theme::from_yaml(DECORATED_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Decorated".to_string(),
                background: Color::rgb(0xFF, 0xC0, 0xCB),
                foreground: Color::rgb(0xFF, 0xFF, 0xFF),
                error: Color::rgb(0xB0, 0x00, 0x20),
                motifs: vec![
                    Motif {
                        anchor: MotifAnchor::TopLeft,
                        color: Color::rgb(0xFF, 0x69, 0xB4),
                        count: 5,
                        size: 6,
                        spacing: 25,
                        offset_x: 10,
                        offset_y: 10,
                    },
                    Motif {
                        anchor: MotifAnchor::BottomRight,
                        color: Color::rgb(0xFF, 0xFF, 0x00),
                        count: 5,
                        size: 5,
                        spacing: 25,
                        offset_x: 10,
                        offset_y: 20,
                    },
                ],
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::decorated()
    }
}
