//! Popup configuration
//!
//! Stores user preferences in `~/.config/notes-suggest/config.yaml`.
//! Every field has a default so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::overlay::PopupWidth;

/// Layout and appearance settings shared by every suggestion popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Theme id (e.g. "default-dark", or a file stem under `themes/`)
    pub theme: String,
    /// Rows shown before the list starts scrolling
    pub max_visible_rows: usize,
    /// Height of a single row in pixels
    pub row_height: usize,
    /// Inner padding between the popup border and its rows, in pixels
    pub padding: usize,
    /// Width of narrow popups (slash commands)
    pub narrow_width: usize,
    /// Width of wide popups (note references)
    pub wide_width: usize,
    /// Placeholder shown when a popup has no candidates and no adapter override
    pub empty_text: String,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            theme: "default-dark".to_string(),
            max_visible_rows: 8,
            row_height: 36,
            padding: 6,
            narrow_width: 256,
            wide_width: 288,
            empty_text: "No results".to_string(),
        }
    }
}

impl SuggestConfig {
    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
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

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str::<Self>(yaml)
            .map(Self::sanitized)
            .map_err(|e| e.to_string())
    }

    /// Clamp values a popup cannot lay out with (zero rows, zero-height rows)
    pub fn sanitized(mut self) -> Self {
        if self.max_visible_rows == 0 || self.row_height == 0 {
            tracing::warn!(
                max_visible_rows = self.max_visible_rows,
                row_height = self.row_height,
                "Popup config needs at least one visible row of non-zero height"
            );
        }
        self.max_visible_rows = self.max_visible_rows.max(1);
        self.row_height = self.row_height.max(1);
        self
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Resolve a width class to pixels
    pub fn width_px(&self, width: PopupWidth) -> usize {
        match width {
            PopupWidth::Narrow => self.narrow_width,
            PopupWidth::Wide => self.wide_width,
        }
    }
}
