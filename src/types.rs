use crate::key::{Key, Modifiers};

/// Directions in which a caret is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter)]
pub enum MoveDirection {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

impl MoveDirection {
    /// The direction a navigation key moves the caret in.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Left => Some(MoveDirection::Left),
            Key::Right => Some(MoveDirection::Right),
            Key::Up => Some(MoveDirection::Up),
            Key::Down => Some(MoveDirection::Down),
            Key::PageUp => Some(MoveDirection::PageUp),
            Key::PageDown => Some(MoveDirection::PageDown),
            Key::Home => Some(MoveDirection::Home),
            Key::End => Some(MoveDirection::End),
            _ => None,
        }
    }
}

/// Semantic events emitted by the [`KeyboardManager`](crate::KeyboardManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticEvent {
    /// A visible character was typed.
    CharacterKey {
        /// The Unicode code point.
        code: u32,
        /// The key that produced the character, `None` for a character
        /// composed with Alt+numpad.
        key: Option<Key>,
    },
    /// The caret should move.
    MoveKey {
        direction: MoveDirection,
        /// Ctrl, Shift and Alt flags of the key press.
        flags: Modifiers,
    },
}

/// A semantic event handed to listeners.
///
/// Listeners set `handled` to tell the host to suppress default processing
/// of the raw key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventArgs {
    pub event: SemanticEvent,
    pub handled: bool,
}

impl EventArgs {
    pub fn new(event: SemanticEvent) -> Self {
        Self {
            event,
            handled: false,
        }
    }

    /// The character code of a `CharacterKey` event.
    pub fn code(&self) -> Option<u32> {
        match self.event {
            SemanticEvent::CharacterKey { code, .. } => Some(code),
            SemanticEvent::MoveKey { .. } => None,
        }
    }

    /// The direction of a `MoveKey` event.
    pub fn direction(&self) -> Option<MoveDirection> {
        match self.event {
            SemanticEvent::MoveKey { direction, .. } => Some(direction),
            SemanticEvent::CharacterKey { .. } => None,
        }
    }

    pub fn is_shift(&self) -> bool {
        matches!(self.event, SemanticEvent::MoveKey { flags, .. } if flags.contains(Modifiers::SHIFT))
    }

    pub fn is_ctrl(&self) -> bool {
        matches!(self.event, SemanticEvent::MoveKey { flags, .. } if flags.contains(Modifiers::CTRL))
    }
}
