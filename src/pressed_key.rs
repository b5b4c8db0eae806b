use std::fmt;

use crate::key::{Key, Modifiers};

/// A classified key press: the logical key, its modifier flags and the text
/// the keyboard layout produced for it.
///
/// Values are never mutated; [`PressedKey::main_key`] and
/// [`PressedKey::with_secondary_key`] derive new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressedKey {
    key: Key,
    flags: Modifiers,
    text: String,
    secondary_key: Key,
}

impl PressedKey {
    pub const EMPTY: PressedKey = PressedKey {
        key: Key::None,
        flags: Modifiers::empty(),
        text: String::new(),
        secondary_key: Key::None,
    };

    pub fn new(key: Key) -> Self {
        Self::with_flags(key, Modifiers::empty())
    }

    pub fn with_flags(key: Key, flags: Modifiers) -> Self {
        Self::with_text(key, flags, String::new())
    }

    pub fn with_text(key: Key, flags: Modifiers, text: impl Into<String>) -> Self {
        Self {
            key,
            flags,
            text: text.into(),
            secondary_key: Key::None,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn flags(&self) -> Modifiers {
        self.flags
    }

    /// Text produced by the key, empty when there is none.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Second key of a two-key chord, [`Key::None`] when absent.
    pub fn secondary_key(&self) -> Key {
        self.secondary_key
    }

    pub fn is_empty(&self) -> bool {
        self.key == Key::None
    }

    /// Same key, flags and secondary key. Text is not compared.
    pub fn same_chord(&self, other: &PressedKey) -> bool {
        self.key == other.key
            && self.flags == other.flags
            && self.secondary_key == other.secondary_key
    }

    /// This key without its secondary key.
    pub fn main_key(&self) -> PressedKey {
        Self::with_text(self.key, self.flags, self.text.clone())
    }

    pub fn with_secondary_key(&self, secondary_key: Key) -> PressedKey {
        PressedKey {
            key: self.key,
            flags: self.flags,
            text: String::new(),
            secondary_key,
        }
    }
}

impl Default for PressedKey {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for PressedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.contains(Modifiers::CTRL) {
            f.write_str("Ctrl-")?;
        }
        if self.flags.contains(Modifiers::SHIFT) {
            f.write_str("Shift-")?;
        }
        if self.flags.contains(Modifiers::ALT) {
            f.write_str("Alt-")?;
        }
        write!(f, "{}", self.key)?;
        if self.secondary_key != Key::None {
            write!(f, ", {}", self.secondary_key)?;
        }
        Ok(())
    }
}
