use crate::classifier::resolve_modifiers;
use crate::traits::ModifierStateReader;

/// Logical keys of the keyboard.
///
/// The discriminant of each variant is the virtual key code the host's
/// keyboard layout uses for it, so [`Key::virtual_key`] is a plain cast.
/// Hosts map their platform key events to these keys.
///
/// Keys parse from their names case-insensitively, with the usual aliases
/// (`Esc`, `Return`, `Del`, `PgUp`, `0`-`9`, ...).
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    /// No key. A [`PressedKey`](crate::PressedKey) holding it is empty.
    None = 0x00,
    #[strum(to_string = "Back", serialize = "Backspace")]
    Back = 0x08,
    Tab = 0x09,
    Clear = 0x0C,
    #[strum(to_string = "Enter", serialize = "Return")]
    Enter = 0x0D,
    /// Marker for a key pressed while Alt is held; the actual key is the
    /// event's system key.
    System = 0x12,
    Pause = 0x13,
    #[strum(to_string = "CapsLock", serialize = "Capital")]
    CapsLock = 0x14,
    #[strum(to_string = "Escape", serialize = "Esc")]
    Escape = 0x1B,
    Space = 0x20,
    #[strum(to_string = "PageUp", serialize = "PgUp", serialize = "Prior")]
    PageUp = 0x21,
    #[strum(to_string = "PageDown", serialize = "PgDn", serialize = "Next")]
    PageDown = 0x22,
    End = 0x23,
    Home = 0x24,
    Left = 0x25,
    Up = 0x26,
    Right = 0x27,
    Down = 0x28,
    #[strum(to_string = "PrintScreen", serialize = "Snapshot", serialize = "PrtSc")]
    PrintScreen = 0x2C,
    #[strum(to_string = "Insert", serialize = "Ins")]
    Insert = 0x2D,
    #[strum(to_string = "Delete", serialize = "Del")]
    Delete = 0x2E,
    #[strum(to_string = "D0", serialize = "0")]
    D0 = 0x30,
    #[strum(to_string = "D1", serialize = "1")]
    D1 = 0x31,
    #[strum(to_string = "D2", serialize = "2")]
    D2 = 0x32,
    #[strum(to_string = "D3", serialize = "3")]
    D3 = 0x33,
    #[strum(to_string = "D4", serialize = "4")]
    D4 = 0x34,
    #[strum(to_string = "D5", serialize = "5")]
    D5 = 0x35,
    #[strum(to_string = "D6", serialize = "6")]
    D6 = 0x36,
    #[strum(to_string = "D7", serialize = "7")]
    D7 = 0x37,
    #[strum(to_string = "D8", serialize = "8")]
    D8 = 0x38,
    #[strum(to_string = "D9", serialize = "9")]
    D9 = 0x39,
    A = 0x41,
    B = 0x42,
    C = 0x43,
    D = 0x44,
    E = 0x45,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    I = 0x49,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    M = 0x4D,
    N = 0x4E,
    O = 0x4F,
    P = 0x50,
    Q = 0x51,
    R = 0x52,
    S = 0x53,
    T = 0x54,
    U = 0x55,
    V = 0x56,
    W = 0x57,
    X = 0x58,
    Y = 0x59,
    Z = 0x5A,
    #[strum(to_string = "LWin", serialize = "Win")]
    LWin = 0x5B,
    RWin = 0x5C,
    Apps = 0x5D,
    NumPad0 = 0x60,
    NumPad1 = 0x61,
    NumPad2 = 0x62,
    NumPad3 = 0x63,
    NumPad4 = 0x64,
    NumPad5 = 0x65,
    NumPad6 = 0x66,
    NumPad7 = 0x67,
    NumPad8 = 0x68,
    NumPad9 = 0x69,
    Multiply = 0x6A,
    Add = 0x6B,
    Separator = 0x6C,
    Subtract = 0x6D,
    Decimal = 0x6E,
    Divide = 0x6F,
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,
    F13 = 0x7C,
    F14 = 0x7D,
    F15 = 0x7E,
    F16 = 0x7F,
    F17 = 0x80,
    F18 = 0x81,
    F19 = 0x82,
    F20 = 0x83,
    F21 = 0x84,
    F22 = 0x85,
    F23 = 0x86,
    F24 = 0x87,
    NumLock = 0x90,
    Scroll = 0x91,
    LeftShift = 0xA0,
    RightShift = 0xA1,
    LeftCtrl = 0xA2,
    RightCtrl = 0xA3,
    LeftAlt = 0xA4,
    RightAlt = 0xA5,
    OemSemicolon = 0xBA,
    OemPlus = 0xBB,
    OemComma = 0xBC,
    OemMinus = 0xBD,
    OemPeriod = 0xBE,
    OemQuestion = 0xBF,
    OemTilde = 0xC0,
    OemOpenBrackets = 0xDB,
    OemPipe = 0xDC,
    OemCloseBrackets = 0xDD,
    OemQuotes = 0xDE,
    OemBackslash = 0xE2,
}

impl Key {
    /// The virtual key code of this key.
    pub fn virtual_key(self) -> u8 {
        self as u8
    }

    /// True for the left and right Ctrl, Shift and Alt keys.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Key::LeftCtrl
                | Key::RightCtrl
                | Key::LeftShift
                | Key::RightShift
                | Key::LeftAlt
                | Key::RightAlt
        )
    }

    pub fn is_letter(self) -> bool {
        (Key::A as u8..=Key::Z as u8).contains(&(self as u8))
    }

    pub fn is_digit(self) -> bool {
        (Key::D0 as u8..=Key::D9 as u8).contains(&(self as u8))
    }

    pub fn is_function_key(self) -> bool {
        (Key::F1 as u8..=Key::F24 as u8).contains(&(self as u8))
    }

    /// True for the numeric keypad digits and operators.
    pub fn is_numpad(self) -> bool {
        (Key::NumPad0 as u8..=Key::Divide as u8).contains(&(self as u8))
    }

    /// The digit of a NumPad0..NumPad9 key.
    pub fn numpad_digit(self) -> Option<u8> {
        let code = self as u8;
        (Key::NumPad0 as u8..=Key::NumPad9 as u8)
            .contains(&code)
            .then(|| code - Key::NumPad0 as u8)
    }
}

bitflags::bitflags! {
    /// Modifier flags of a classified key.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const CTRL  = 0b0001;
        const SHIFT = 0b0010;
        const ALT   = 0b0100;
    }
}

/// A raw key transition as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// The key, or [`Key::System`] when the key was pressed while Alt is held.
    pub key: Key,
    /// The actual key when `key` is [`Key::System`]; [`Key::None`] otherwise.
    pub system_key: Key,
    /// True when the event is an auto-repeat of a held key.
    pub is_repeat: bool,
    /// True when the key is down after this transition.
    pub is_down: bool,
}

impl RawKeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            key,
            system_key: Key::None,
            is_repeat: false,
            is_down: true,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            system_key: Key::None,
            is_repeat: false,
            is_down: false,
        }
    }

    /// A key-down of `system_key` while Alt is held.
    pub fn system_down(system_key: Key) -> Self {
        Self {
            key: Key::System,
            system_key,
            is_repeat: false,
            is_down: true,
        }
    }

    /// A key-up of `system_key` while Alt is held.
    pub fn system_up(system_key: Key) -> Self {
        Self {
            key: Key::System,
            system_key,
            is_repeat: false,
            is_down: false,
        }
    }

    pub fn repeated(mut self) -> Self {
        self.is_repeat = true;
        self
    }

    /// The key with [`Key::System`] replaced by the system key.
    pub fn effective_key(&self) -> Key {
        if self.key == Key::System {
            self.system_key
        } else {
            self.key
        }
    }
}

/// Mouse buttons a gesture input can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A key press offered to gesture matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub mods: Modifiers,
    /// Set when a matcher consumed the key as part of a sequence.
    pub handled: bool,
}

/// A mouse press offered to gesture matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub button: MouseButton,
    pub mods: Modifiers,
    pub handled: bool,
}

/// Input events that gestures are matched against.
///
/// Only keyboard events can match a key gesture or a bare key step; any
/// other input breaks a partially matched sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyInput),
    Mouse(MouseInput),
}

impl InputEvent {
    pub fn key(key: Key, mods: Modifiers) -> Self {
        InputEvent::Key(KeyInput {
            key,
            mods,
            handled: false,
        })
    }

    pub fn mouse(button: MouseButton, mods: Modifiers) -> Self {
        InputEvent::Mouse(MouseInput {
            button,
            mods,
            handled: false,
        })
    }

    /// Builds the gesture input for a raw key-down, with the modifiers the
    /// classifier would assign.
    pub fn from_raw<R: ModifierStateReader + ?Sized>(raw: &RawKeyEvent, reader: &R) -> Self {
        InputEvent::key(raw.effective_key(), resolve_modifiers(reader))
    }

    pub fn mods(&self) -> Modifiers {
        match self {
            InputEvent::Key(k) => k.mods,
            InputEvent::Mouse(m) => m.mods,
        }
    }

    pub fn is_handled(&self) -> bool {
        match self {
            InputEvent::Key(k) => k.handled,
            InputEvent::Mouse(m) => m.handled,
        }
    }

    pub fn set_handled(&mut self) {
        match self {
            InputEvent::Key(k) => k.handled = true,
            InputEvent::Mouse(m) => m.handled = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn every_key_parses_from_its_name() {
        for key in Key::iter() {
            assert_eq!(key.to_string().parse::<Key>(), Ok(key));
            assert_eq!(key.to_string().to_lowercase().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn aliases() {
        assert_eq!("esc".parse::<Key>(), Ok(Key::Escape));
        assert_eq!("Return".parse::<Key>(), Ok(Key::Enter));
        assert_eq!("PgUp".parse::<Key>(), Ok(Key::PageUp));
        assert_eq!("7".parse::<Key>(), Ok(Key::D7));
    }

    #[test]
    fn only_numpad_digit_keys_have_a_digit() {
        let digits: Vec<(Key, u8)> = Key::iter()
            .filter_map(|key| key.numpad_digit().map(|d| (key, d)))
            .collect();
        assert_eq!(digits.len(), 10);
        assert_eq!(digits[0], (Key::NumPad0, 0));
        assert_eq!(digits[9], (Key::NumPad9, 9));
        assert!(digits.iter().all(|(key, _)| key.is_numpad()));
    }

    #[test]
    fn effective_key_substitutes_system_key() {
        assert_eq!(RawKeyEvent::system_up(Key::F4).effective_key(), Key::F4);
        assert_eq!(RawKeyEvent::down(Key::F4).effective_key(), Key::F4);
    }
}
