//! Single key gestures: a key with the modifiers that must be held.
//!
//! # String format
//!
//! `[Modifier+]*Key`, e.g. `"Ctrl+E"`, `"Ctrl+Shift+N"`, `"Alt+F4"`, `"F1"`.
//! Modifier names (`Ctrl`/`Control`, `Shift`, `Alt`) and key names are
//! case-insensitive.
//!
//! # Validity
//!
//! Function keys and numpad keys are gestures on their own. Other keys need
//! Ctrl or Alt, except keys that do not type a letter or a digit: `"Delete"`
//! is a gesture, `"W"` and `"Shift+W"` are not.

use std::fmt;
use std::str::FromStr;

use crate::error::GestureParseError;
use crate::key::{InputEvent, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyGesture {
    key: Key,
    mods: Modifiers,
}

impl KeyGesture {
    pub fn new(key: Key, mods: Modifiers) -> Result<Self, GestureParseError> {
        if Self::is_valid(key, mods) {
            Ok(Self { key, mods })
        } else {
            Err(GestureParseError::InvalidGesture(display_string(key, mods)))
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn mods(&self) -> Modifiers {
        self.mods
    }

    pub fn is_valid(key: Key, mods: Modifiers) -> bool {
        if matches!(key, Key::None | Key::System) || key.is_modifier() {
            return false;
        }
        if key.is_function_key() || key.is_numpad() {
            return true;
        }
        if mods.intersects(Modifiers::CTRL | Modifiers::ALT) {
            return !matches!(key, Key::LWin | Key::RWin);
        }
        !(key.is_letter() || key.is_digit())
    }

    /// True for a keyboard event with exactly this key and these modifiers.
    pub fn matches(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(input) => input.key == self.key && input.mods == self.mods,
            InputEvent::Mouse(_) => false,
        }
    }
}

impl fmt::Display for KeyGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_string(self.key, self.mods))
    }
}

impl FromStr for KeyGesture {
    type Err = GestureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (mod_names, key_name) = text.rsplit_once('+').unwrap_or(("", text));

        let key_name = key_name.trim();
        if key_name.is_empty() {
            return Err(GestureParseError::InvalidGesture(text.to_string()));
        }
        let key = parse_key(key_name)?;

        let mut mods = Modifiers::empty();
        for name in mod_names.split('+').map(str::trim).filter(|n| !n.is_empty()) {
            mods |= parse_modifier(name)?;
        }

        if Self::is_valid(key, mods) {
            Ok(Self { key, mods })
        } else {
            Err(GestureParseError::InvalidGesture(text.to_string()))
        }
    }
}

/// Parses a key name, rejecting the names that are not keys a user presses.
pub fn parse_key(name: &str) -> Result<Key, GestureParseError> {
    match name.trim().parse::<Key>() {
        Ok(Key::None | Key::System) | Err(_) => {
            Err(GestureParseError::UnknownKey(name.trim().to_string()))
        }
        Ok(key) => Ok(key),
    }
}

fn parse_modifier(name: &str) -> Result<Modifiers, GestureParseError> {
    match name.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Ok(Modifiers::CTRL),
        "shift" => Ok(Modifiers::SHIFT),
        "alt" => Ok(Modifiers::ALT),
        _ => Err(GestureParseError::UnknownModifier(name.to_string())),
    }
}

fn display_string(key: Key, mods: Modifiers) -> String {
    let mut parts = Vec::with_capacity(4);
    if mods.contains(Modifiers::CTRL) {
        parts.push("Ctrl".to_string());
    }
    if mods.contains(Modifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if mods.contains(Modifiers::SHIFT) {
        parts.push("Shift".to_string());
    }
    parts.push(key.to_string());
    parts.join("+")
}
