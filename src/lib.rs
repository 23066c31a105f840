//! Suggestion popups for a note-taking editor
//!
//! A generic, keyboard-driven selectable list that the editor's trigger
//! contexts (slash commands after `/`, wikilinks after `[[`) mount while the
//! trigger is active. The editor forwards keydowns through a
//! [`SuggestionHandle`] and learns whether the popup consumed them.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod handle;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod overlay;
pub mod popup;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use adapters::{CommandItem, CommandPopup, NoteMetadata, NotePopup};
pub use config::SuggestConfig;
pub use handle::{PopupSlot, SuggestionHandle};
pub use keymap::{KeyCode, Keystroke};
pub use messages::{EventResult, PopupMsg};
pub use model::SuggestionList;
pub use popup::SuggestionPopup;
pub use theme::PopupTheme;
pub use view::{ListRenderer, PopupFrame, Row, RowState};
