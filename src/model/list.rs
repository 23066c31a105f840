//! Selectable list engine - the state machine behind every suggestion popup
//!
//! Holds the candidate set, the selected index and the commit sink, and
//! interprets the three navigation keys. Everything else (rows, scrolling,
//! painting) is derived from this state by the renderer.

use std::fmt;

use crate::keymap::{KeyCode, Keystroke};

/// Sink invoked with exactly one item per accept (Enter or pointer activation)
pub type CommitFn<T> = Box<dyn FnMut(&T) -> anyhow::Result<()>>;

/// What a keystroke means to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    /// Move selection up, wrapping from the first row to the last
    Previous,
    /// Move selection down, wrapping from the last row to the first
    Next,
    /// Commit the selected item
    Accept,
}

impl ListKey {
    /// Classify a keystroke. Modifiers are ignored; only the key identity matters.
    pub fn from_keystroke(stroke: &Keystroke) -> Option<Self> {
        match stroke.key {
            KeyCode::Up => Some(ListKey::Previous),
            KeyCode::Down => Some(ListKey::Next),
            KeyCode::Enter | KeyCode::NumpadEnter => Some(ListKey::Accept),
            _ => None,
        }
    }
}

/// Generic selectable list over candidates of type `T`
///
/// Invariants:
/// - while `candidates` is non-empty, `selected_index < candidates.len()`
/// - every candidate replacement bumps `generation` and resets the selection to 0
pub struct SuggestionList<T> {
    candidates: Vec<T>,
    selected_index: usize,
    generation: u64,
    commit: CommitFn<T>,
}

impl<T> SuggestionList<T> {
    /// Create a list with an initial candidate set and a commit sink
    pub fn new<F>(candidates: Vec<T>, commit: F) -> Self
    where
        F: FnMut(&T) -> anyhow::Result<()> + 'static,
    {
        Self {
            candidates,
            selected_index: 0,
            generation: 0,
            commit: Box::new(commit),
        }
    }

    /// Replace the candidate set with fresh query results
    ///
    /// Each call is a new list identity: the selection goes back to the first
    /// row even when the new list happens to equal the old one.
    pub fn set_candidates(&mut self, candidates: Vec<T>) {
        self.candidates = candidates;
        self.selected_index = 0;
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(
            generation = self.generation,
            len = self.candidates.len(),
            "suggestion candidates replaced"
        );
    }

    pub fn candidates(&self) -> &[T] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of candidate replacements since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Selected index, or None while the list is empty
    pub fn selected_index(&self) -> Option<usize> {
        if self.candidates.is_empty() {
            None
        } else {
            Some(self.selected_index)
        }
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected_index()
            .and_then(|index| self.candidates.get(index))
    }

    pub fn select_previous(&mut self) {
        let len = self.candidates.len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index > 0 {
            self.selected_index - 1
        } else {
            len - 1
        };
    }

    pub fn select_next(&mut self) {
        let len = self.candidates.len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index + 1 < len {
            self.selected_index + 1
        } else {
            0
        };
    }

    /// Force the selection to `index`, wrapping out-of-range and negative
    /// values the same way navigation does. Ignored while empty.
    pub fn select(&mut self, index: isize) {
        let len = self.candidates.len();
        if len == 0 {
            return;
        }
        self.selected_index = index.rem_euclid(len as isize) as usize;
    }

    /// Commit the selected item. Returns whether an item was handed to the sink.
    pub fn commit_selected(&mut self) -> bool {
        match self.selected_index() {
            Some(index) => self.commit_at(index),
            None => false,
        }
    }

    /// Commit the item at `index` directly (pointer activation)
    ///
    /// Out-of-range indices commit nothing. Sink failures are logged and
    /// swallowed; the host owns user-visible error reporting.
    pub fn commit_at(&mut self, index: usize) -> bool {
        let Some(item) = self.candidates.get(index) else {
            return false;
        };
        tracing::debug!(index, generation = self.generation, "committing suggestion");
        if let Err(e) = (self.commit)(item) {
            tracing::warn!("Suggestion commit failed: {:#}", e);
        }
        true
    }

    /// Interpret a keydown. Returns true when the key was consumed.
    ///
    /// Up/Down/Enter are always consumed, even on an empty list; any other
    /// key is declined and leaves the state untouched.
    pub fn handle_key(&mut self, stroke: &Keystroke) -> bool {
        let Some(action) = ListKey::from_keystroke(stroke) else {
            return false;
        };

        match action {
            ListKey::Previous => self.select_previous(),
            ListKey::Next => self.select_next(),
            ListKey::Accept => {
                self.commit_selected();
            }
        }
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for SuggestionList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionList")
            .field("candidates", &self.candidates)
            .field("selected_index", &self.selected_index())
            .field("generation", &self.generation)
            .field("commit", &"<commit fn>")
            .finish()
    }
}
