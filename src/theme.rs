//! Popup color themes
//!
//! Provides YAML-based theming with compile-time embedded themes and
//! user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/notes-suggest/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<PopupTheme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    PopupTheme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<PopupTheme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    PopupTheme::from_builtin(id)
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

    /// Convert to ARGB u32 for the framebuffer
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

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub popup: PopupThemeData,
}

/// Popup colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct PopupThemeData {
    pub background: String,
    pub border: String,
    pub foreground: String,
    #[serde(default)]
    pub muted: Option<String>,
    #[serde(default)]
    pub selection_background: Option<String>,
}

/// Resolved popup theme with parsed colors
///
/// `paint_popup` fills background, border and selection. `foreground` and
/// `muted` are text colors for the host's glyph pass, which draws row
/// content into [`PopupGeometry::row_bounds`](crate::view::PopupGeometry::row_bounds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupTheme {
    pub name: String,
    pub background: Color,
    pub border: Color,
    /// Row titles
    pub foreground: Color,
    /// Empty-state text and note previews
    pub muted: Color,
    /// Background of the selected row
    pub selection_background: Color,
}

impl PopupTheme {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        Self::from_data(data)
    }

    pub fn from_builtin(id: &str) -> Result<Self, String> {
        BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))
            .and_then(|t| Self::from_yaml(t.yaml))
    }

    fn from_data(data: ThemeData) -> Result<Self, String> {
        let popup = data.popup;
        let foreground = Color::from_hex(&popup.foreground)?;
        let background = Color::from_hex(&popup.background)?;
        let muted = match popup.muted {
            Some(hex) => Color::from_hex(&hex)?,
            None => foreground,
        };
        let selection_background = match popup.selection_background {
            Some(hex) => Color::from_hex(&hex)?,
            None => Color::rgb(0x2E, 0x43, 0x6E),
        };

        Ok(Self {
            name: data.name,
            background,
            border: Color::from_hex(&popup.border)?,
            foreground,
            muted,
            selection_background,
        })
    }
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self::from_yaml(DEFAULT_DARK_YAML).unwrap_or(Self {
            name: "Fallback".to_string(),
            background: Color::rgb(0x1E, 0x1F, 0x22),
            border: Color::rgb(0x39, 0x3B, 0x40),
            foreground: Color::rgb(0xDF, 0xE1, 0xE5),
            muted: Color::rgb(0x86, 0x8A, 0x91),
            selection_background: Color::rgb(0x2E, 0x43, 0x6E),
        })
    }
}
