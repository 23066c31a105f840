//! Configuration system tests
//!
//! Tests for config paths, popup config files and theme loading.

use notes_suggest::config::SuggestConfig;
use notes_suggest::config_paths;
use notes_suggest::overlay::PopupWidth;
use notes_suggest::theme::{self, PopupTheme, BUILTIN_THEMES};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("notes-suggest"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_themes_and_logs_are_subdirs_of_config() {
    if let (Some(config), Some(themes), Some(logs)) = (
        config_paths::config_dir(),
        config_paths::themes_dir(),
        config_paths::logs_dir(),
    ) {
        assert!(themes.starts_with(&config));
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Popup Config Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = SuggestConfig::default();
    assert_eq!(config.theme, "default-dark");
    assert_eq!(config.max_visible_rows, 8);
    assert_eq!(config.empty_text, "No results");
    assert_eq!(config.width_px(PopupWidth::Narrow), 256);
    assert_eq!(config.width_px(PopupWidth::Wide), 288);
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = SuggestConfig {
        theme: "default-light".to_string(),
        max_visible_rows: 5,
        empty_text: "Nothing here".to_string(),
        ..SuggestConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(SuggestConfig::load_from(&path), config);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "row_height: 28\n").unwrap();

    let config = SuggestConfig::load_from(&path);
    assert_eq!(config.row_height, 28);
    assert_eq!(config.padding, SuggestConfig::default().padding);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "max_visible_rows: [not, a, number]\n").unwrap();

    assert_eq!(SuggestConfig::load_from(&path), SuggestConfig::default());
}

#[test]
fn test_zero_rows_in_file_are_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "max_visible_rows: 0\nrow_height: 0\n").unwrap();

    let config = SuggestConfig::load_from(&path);
    assert_eq!(config.max_visible_rows, 1);
    assert_eq!(config.row_height, 1);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert_eq!(SuggestConfig::load_from(&path), SuggestConfig::default());
}

// ========================================================================
// Theme Tests
// ========================================================================

#[test]
fn test_every_builtin_theme_loads() {
    for builtin in BUILTIN_THEMES {
        assert!(
            PopupTheme::from_builtin(builtin.id).is_ok(),
            "{} failed to load",
            builtin.id
        );
    }
}

#[test]
fn test_builtin_text_colors_are_distinct() {
    for builtin in BUILTIN_THEMES {
        let theme = PopupTheme::from_builtin(builtin.id).unwrap();
        assert_ne!(theme.foreground, theme.muted, "{}", builtin.id);
        assert_ne!(theme.foreground, theme.background, "{}", builtin.id);
    }
}

#[test]
fn test_unknown_builtin_is_an_error() {
    assert!(PopupTheme::from_builtin("no-such-theme").is_err());
}

#[test]
fn test_theme_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solar.yaml");
    std::fs::write(
        &path,
        r##"version: 1
name: "Solar"
popup:
  background: "#002B36"
  border: "#073642"
  foreground: "#839496"
"##,
    )
    .unwrap();

    let loaded = theme::from_file(&path).unwrap();
    assert_eq!(loaded.name, "Solar");
    // Optional colors fall back
    assert_eq!(loaded.muted, loaded.foreground);
}
