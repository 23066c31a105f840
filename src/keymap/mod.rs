//! Key identity for popup navigation
//!
//! The host editor captures keydown events and converts them into
//! [`Keystroke`]s before forwarding them to a mounted popup:
//!
//! ```text
//! winit::KeyEvent → keystroke_from_winit() → Keystroke → SuggestionHandle::on_key_down()
//! ```
//!
//! Key strings ("down", "shift+enter") parse into the same type, which is how
//! the driver binary and the tests replay input.

mod parse;
mod types;
mod winit_adapter;

pub use parse::{parse_key_sequence, parse_key_string, KeymapError};
pub use types::{KeyCode, Keystroke, Modifiers};
pub use winit_adapter::keystroke_from_winit;
