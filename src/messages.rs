//! Message types for driving a popup Elm-style
//!
//! Hosts that route all input through a single update loop wrap popup input
//! in these messages instead of calling popup methods directly.

use crate::keymap::Keystroke;

/// Input delivered to a mounted popup
#[derive(Debug, Clone, PartialEq)]
pub enum PopupMsg<T> {
    /// Fresh query results from the trigger extension
    SetCandidates(Vec<T>),
    /// A forwarded keydown
    Key(Keystroke),
    /// Pointer activation of a row by candidate index
    ClickRow(usize),
    /// Pointer activation at a pixel position
    ClickAt { x: usize, y: usize },
    /// Mouse wheel (positive = down)
    Scroll { lines: i32 },
    /// Externally forced selection; wraps like navigation
    Select(isize),
}

/// Result of handling a message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResult {
    /// The popup handled the input; the editor must not also apply it
    pub consumed: bool,
    /// The popup's visual state may have changed
    pub needs_redraw: bool,
}

impl EventResult {
    pub fn consumed_redraw() -> Self {
        Self {
            consumed: true,
            needs_redraw: true,
        }
    }

    pub fn ignored() -> Self {
        Self::default()
    }

    /// Redraw without claiming the input
    pub fn redraw() -> Self {
        Self {
            consumed: false,
            needs_redraw: true,
        }
    }
}
