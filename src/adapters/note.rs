//! Wikilink adapter
//!
//! Binds the generic popup to [`NoteMetadata`]: keyed by note id, rendered as
//! title plus an optional preview line, wide width.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::config::SuggestConfig;
use crate::handle::SuggestionHandle;
use crate::keymap::Keystroke;
use crate::model::SuggestionList;
use crate::overlay::PopupWidth;
use crate::popup::SuggestionPopup;
use crate::view::{ListRenderer, PopupFrame};

pub const NOTE_EMPTY_TEXT: &str = "No matching notes";

/// A note offered as a `[[wikilink]]` target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMetadata {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// Last modification time (unix seconds)
    #[serde(default)]
    pub modified: i64,
}

/// Display content of a note row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub title: String,
    pub preview: Option<String>,
}

/// Case-insensitive title filter over `notes`, most recently modified first
///
/// Notes with equal timestamps keep their input order.
pub fn matching_notes(notes: &[NoteMetadata], query: &str) -> Vec<NoteMetadata> {
    let query = query.to_lowercase();
    let mut matches: Vec<NoteMetadata> = notes
        .iter()
        .filter(|note| note.title.to_lowercase().contains(&query))
        .cloned()
        .collect();
    matches.sort_by_key(|note| Reverse(note.modified));
    matches
}

/// Text inserted into the note when a suggestion is committed
pub fn wikilink_text(note: &NoteMetadata) -> String {
    format!("[[{}]]", note.title)
}

/// Wikilink suggestion popup
#[derive(Debug)]
pub struct NotePopup {
    popup: SuggestionPopup<NoteMetadata, NoteRow>,
}

impl NotePopup {
    pub fn new<F>(items: Vec<NoteMetadata>, commit: F, config: &SuggestConfig) -> Self
    where
        F: FnMut(&NoteMetadata) -> anyhow::Result<()> + 'static,
    {
        let list = SuggestionList::new(items, commit);
        let renderer = ListRenderer::new(
            |note: &NoteMetadata| note.id.clone(),
            |note: &NoteMetadata, _selected| NoteRow {
                title: note.title.clone(),
                preview: note.preview.clone().filter(|p| !p.is_empty()),
            },
            config.max_visible_rows,
        )
        .with_empty_text(NOTE_EMPTY_TEXT);

        Self {
            popup: SuggestionPopup::new(list, renderer, PopupWidth::Wide),
        }
    }

    pub fn set_items(&mut self, items: Vec<NoteMetadata>) {
        self.popup.set_candidates(items);
    }

    pub fn render(&mut self) -> PopupFrame<NoteRow> {
        self.popup.render()
    }

    pub fn popup(&self) -> &SuggestionPopup<NoteMetadata, NoteRow> {
        &self.popup
    }

    pub fn popup_mut(&mut self) -> &mut SuggestionPopup<NoteMetadata, NoteRow> {
        &mut self.popup
    }
}

impl SuggestionHandle for NotePopup {
    fn on_key_down(&mut self, key: &Keystroke) -> bool {
        self.popup.on_key_down(key)
    }
}
