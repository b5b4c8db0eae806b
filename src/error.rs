//! Error types.
//!
//! Gesture configuration errors are fatal to the binding being built and are
//! returned to the caller. Key text errors happen while decoding and never
//! leave the [`KeyboardManager`](crate::KeyboardManager): they are traced and
//! the key is treated as producing no text.

/// A multi-key gesture or one of its tokens could not be built from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GestureParseError {
    #[error("the key sequence for a multi-key gesture must not be empty")]
    Empty,

    #[error("a multi-key gesture accepts at most {max} keys, got {len}")]
    TooManyKeys { len: usize, max: usize },

    #[error("'{0}' is not a key name")]
    UnknownKey(String),

    #[error("'{0}' is not a modifier name")]
    UnknownModifier(String),

    #[error("'{0}' is not a valid key gesture")]
    InvalidGesture(String),

    #[error("'{0}' could not be parsed as a gesture or a key")]
    InvalidToken(String),

    #[error("a multi-key gesture must start with a gesture, not a simple key: '{0}'")]
    BareKeyFirst(String),
}

/// The keyboard layout could not translate a key into text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyTextError {
    #[error("no keyboard layout is active")]
    NoLayout,

    #[error("the keyboard state could not be read")]
    KeyboardStateUnavailable,

    #[error("virtual key {virtual_key:#04x} produces no text")]
    NoTranslation { virtual_key: u8 },
}
