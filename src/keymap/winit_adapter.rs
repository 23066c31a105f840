//! Adapter to convert winit key events to our Keystroke type
//!
//! The host editor captures raw keydown events at its root window and
//! forwards them here before handing them to a mounted popup.

use winit::keyboard::{Key, KeyCode as WinitKeyCode, NamedKey, PhysicalKey};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert winit key event data to our Keystroke type
///
/// Returns None if the key cannot be mapped (e.g., unknown keys)
pub fn keystroke_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    ctrl: bool,
    shift: bool,
    alt: bool,
    logo: bool, // logo = meta = cmd on macOS
) -> Option<Keystroke> {
    let mods = Modifiers::new(ctrl, shift, alt, logo);

    // Keypad Enter shares the logical key with Enter; keep it distinguishable
    if physical_key == PhysicalKey::Code(WinitKeyCode::NumpadEnter) {
        return Some(Keystroke::new(KeyCode::NumpadEnter, mods));
    }

    let key_code = match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => Some(KeyCode::Enter),
            NamedKey::Escape => Some(KeyCode::Escape),
            NamedKey::Tab => Some(KeyCode::Tab),
            NamedKey::Backspace => Some(KeyCode::Backspace),
            NamedKey::Delete => Some(KeyCode::Delete),
            NamedKey::Space => Some(KeyCode::Space),

            NamedKey::ArrowUp => Some(KeyCode::Up),
            NamedKey::ArrowDown => Some(KeyCode::Down),
            NamedKey::ArrowLeft => Some(KeyCode::Left),
            NamedKey::ArrowRight => Some(KeyCode::Right),

            NamedKey::Home => Some(KeyCode::Home),
            NamedKey::End => Some(KeyCode::End),
            NamedKey::PageUp => Some(KeyCode::PageUp),
            NamedKey::PageDown => Some(KeyCode::PageDown),

            _ => None,
        },

        // Character keys - normalize to lowercase
        Key::Character(s) => {
            let c = s.chars().next()?;
            Some(KeyCode::Char(c.to_ascii_lowercase()))
        }

        _ => None,
    };

    key_code.map(|key| Keystroke::new(key, mods))
}
