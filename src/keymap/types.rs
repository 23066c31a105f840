//! Core key types: Keystroke, Modifiers, KeyCode

use std::fmt;

/// Modifier state that accompanied a keydown
///
/// The popup classifies keys by identity alone, so modifiers only travel
/// along for logging and for keys the popup hands back to the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

const CTRL_BIT: u8 = 1;
const SHIFT_BIT: u8 = 1 << 1;
const ALT_BIT: u8 = 1 << 2;
const META_BIT: u8 = 1 << 3;

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(CTRL_BIT);
    pub const SHIFT: Modifiers = Modifiers(SHIFT_BIT);
    pub const ALT: Modifiers = Modifiers(ALT_BIT);
    /// Logo key (Cmd, Win, Super)
    pub const META: Modifiers = Modifiers(META_BIT);

    /// From the four flags winit reports in `ModifiersState`
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Modifiers(
            (ctrl as u8) * CTRL_BIT
                | (shift as u8) * SHIFT_BIT
                | (alt as u8) * ALT_BIT
                | (meta as u8) * META_BIT,
        )
    }

    const fn has(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    pub const fn ctrl(self) -> bool {
        self.has(CTRL_BIT)
    }

    pub const fn shift(self) -> bool {
        self.has(SHIFT_BIT)
    }

    pub const fn alt(self) -> bool {
        self.has(ALT_BIT)
    }

    pub const fn meta(self) -> bool {
        self.has(META_BIT)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

/// Renders as key-string syntax ("ctrl+shift"), the same names
/// `parse_key_string` accepts
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.ctrl(), "ctrl"),
            (self.shift(), "shift"),
            (self.alt(), "alt"),
            (self.meta(), "meta"),
        ];
        let mut first = true;
        for (_, name) in names.iter().filter(|(held, _)| *held) {
            if !first {
                f.write_str("+")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// A key as reported by the host editor's keydown event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    Up,
    Down,
    Left,
    Right,

    Home,
    End,
    PageUp,
    PageDown,

    /// Keypad Enter; reports the same logical key as `Enter`
    NumpadEnter,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyCode::Char(c) => return write!(f, "{}", c),
            KeyCode::Enter => "enter",
            KeyCode::Escape => "escape",
            KeyCode::Tab => "tab",
            KeyCode::Backspace => "backspace",
            KeyCode::Delete => "delete",
            KeyCode::Space => "space",
            KeyCode::Up => "up",
            KeyCode::Down => "down",
            KeyCode::Left => "left",
            KeyCode::Right => "right",
            KeyCode::Home => "home",
            KeyCode::End => "end",
            KeyCode::PageUp => "pageup",
            KeyCode::PageDown => "pagedown",
            KeyCode::NumpadEnter => "numpad_enter",
        };
        f.write_str(name)
    }
}

/// A single keystroke: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character key
    pub fn char(c: char) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods: Modifiers::NONE,
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}
