//! Slash-command adapter
//!
//! Binds the generic popup to [`CommandItem`]s: keyed by title, rendered as
//! icon + title, narrow width.

use serde::{Deserialize, Serialize};

use crate::config::SuggestConfig;
use crate::handle::SuggestionHandle;
use crate::keymap::Keystroke;
use crate::model::SuggestionList;
use crate::overlay::PopupWidth;
use crate::popup::SuggestionPopup;
use crate::view::{ListRenderer, PopupFrame};

/// An entry in the slash-command menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandItem {
    pub title: String,
    /// Icon name; the host's icon renderer resolves it
    pub icon: String,
}

impl CommandItem {
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
        }
    }
}

/// Display content of a command row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRow {
    pub icon: String,
    pub title: String,
}

/// Built-in block commands offered after `/`
pub fn default_commands() -> Vec<CommandItem> {
    [
        ("Heading 1", "heading-1"),
        ("Heading 2", "heading-2"),
        ("Heading 3", "heading-3"),
        ("Bullet List", "list"),
        ("Numbered List", "list-ordered"),
        ("Task List", "list-checks"),
        ("Quote", "quote"),
        ("Code Block", "code"),
        ("Divider", "minus"),
    ]
    .into_iter()
    .map(|(title, icon)| CommandItem::new(title, icon))
    .collect()
}

/// Case-insensitive title filter over `commands`, preserving order
pub fn matching_commands(commands: &[CommandItem], query: &str) -> Vec<CommandItem> {
    let query = query.to_lowercase();
    commands
        .iter()
        .filter(|cmd| cmd.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Slash-command popup
#[derive(Debug)]
pub struct CommandPopup {
    popup: SuggestionPopup<CommandItem, CommandRow>,
}

impl CommandPopup {
    pub fn new<F>(items: Vec<CommandItem>, commit: F, config: &SuggestConfig) -> Self
    where
        F: FnMut(&CommandItem) -> anyhow::Result<()> + 'static,
    {
        let list = SuggestionList::new(items, commit);
        let renderer = ListRenderer::new(
            |item: &CommandItem| item.title.clone(),
            |item: &CommandItem, _selected| CommandRow {
                icon: item.icon.clone(),
                title: item.title.clone(),
            },
            config.max_visible_rows,
        )
        .with_empty_text(config.empty_text.clone());

        Self {
            popup: SuggestionPopup::new(list, renderer, PopupWidth::Narrow),
        }
    }

    pub fn set_items(&mut self, items: Vec<CommandItem>) {
        self.popup.set_candidates(items);
    }

    pub fn render(&mut self) -> PopupFrame<CommandRow> {
        self.popup.render()
    }

    pub fn popup(&self) -> &SuggestionPopup<CommandItem, CommandRow> {
        &self.popup
    }

    pub fn popup_mut(&mut self) -> &mut SuggestionPopup<CommandItem, CommandRow> {
        &mut self.popup
    }
}

impl SuggestionHandle for CommandPopup {
    fn on_key_down(&mut self, key: &Keystroke) -> bool {
        self.popup.on_key_down(key)
    }
}
