//! Trigger adapters - concrete popups for the editor's trigger contexts
//!
//! Both expose the same [`SuggestionHandle`](crate::handle::SuggestionHandle)
//! so the editor's trigger code does not care which one is mounted.

pub mod command;
pub mod note;

pub use command::{default_commands, matching_commands, CommandItem, CommandPopup, CommandRow};
pub use note::{
    matching_notes, wikilink_text, NoteMetadata, NotePopup, NoteRow, NOTE_EMPTY_TEXT,
};
