//! Key handoff between the host editor and a mounted popup
//!
//! The popup is a transient overlay mounted and unmounted by editor state,
//! while keydown events are captured at the editor root. The editor holds a
//! [`PopupSlot`] and forwards keys through it; the popup never pulls events.

use std::fmt;

use crate::keymap::Keystroke;
use crate::model::SuggestionList;
use crate::popup::SuggestionPopup;

/// The one operation an external owner may call on an active popup
pub trait SuggestionHandle {
    /// Handle a keydown. Returns true when consumed; false tells the editor
    /// to apply its default text-editing behavior.
    fn on_key_down(&mut self, key: &Keystroke) -> bool;
}

impl<T> SuggestionHandle for SuggestionList<T> {
    fn on_key_down(&mut self, key: &Keystroke) -> bool {
        self.handle_key(key)
    }
}

impl<T, C> SuggestionHandle for SuggestionPopup<T, C> {
    fn on_key_down(&mut self, key: &Keystroke) -> bool {
        SuggestionPopup::on_key_down(self, key)
    }
}

/// Host-side holder for at most one mounted popup
#[derive(Default)]
pub struct PopupSlot {
    active: Option<Box<dyn SuggestionHandle>>,
}

impl PopupSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a popup, dropping any previously mounted one
    pub fn mount(&mut self, popup: Box<dyn SuggestionHandle>) {
        if self.active.is_some() {
            tracing::debug!("Replacing mounted suggestion popup");
        }
        self.active = Some(popup);
    }

    /// Unmount the active popup (commit, escape, or trigger no longer matching)
    pub fn unmount(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.active.is_some()
    }

    /// Forward a keydown; declined when nothing is mounted
    pub fn on_key_down(&mut self, key: &Keystroke) -> bool {
        match self.active.as_mut() {
            Some(popup) => popup.on_key_down(key),
            None => false,
        }
    }
}

impl fmt::Debug for PopupSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupSlot")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeyCode;

    #[test]
    fn test_empty_slot_declines() {
        let mut slot = PopupSlot::new();
        assert!(!slot.on_key_down(&Keystroke::key(KeyCode::Down)));
        assert!(!slot.unmount());
    }

    #[test]
    fn test_mounted_list_consumes_navigation() {
        let mut slot = PopupSlot::new();
        slot.mount(Box::new(SuggestionList::new(vec![1, 2], |_: &i32| Ok(()))));
        assert!(slot.on_key_down(&Keystroke::key(KeyCode::Down)));
        assert!(!slot.on_key_down(&Keystroke::char('x')));
        assert!(slot.unmount());
        assert!(!slot.on_key_down(&Keystroke::key(KeyCode::Down)));
    }
}
