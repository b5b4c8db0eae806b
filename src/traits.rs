use crate::error::KeyTextError;
use crate::key::Key;

/// Snapshot of the whole keyboard, indexed by virtual key code.
///
/// Each entry follows the layout convention: high bit set when the key is
/// down, low bit set when a toggle key (Caps Lock, Num Lock) is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState([u8; 256]);

impl KeyboardState {
    pub const DOWN: u8 = 0x80;
    pub const TOGGLED: u8 = 0x01;

    pub fn new() -> Self {
        Self([0; 256])
    }

    pub fn from_bytes(bytes: [u8; 256]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 256] {
        &self.0
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.0[usize::from(key.virtual_key())] & Self::DOWN != 0
    }

    pub fn is_toggled(&self, key: Key) -> bool {
        self.0[usize::from(key.virtual_key())] & Self::TOGGLED != 0
    }

    pub fn set_down(&mut self, key: Key, down: bool) {
        let entry = &mut self.0[usize::from(key.virtual_key())];
        if down {
            *entry |= Self::DOWN;
        } else {
            *entry &= !Self::DOWN;
        }
    }

    pub fn set_toggled(&mut self, key: Key, toggled: bool) {
        let entry = &mut self.0[usize::from(key.virtual_key())];
        if toggled {
            *entry |= Self::TOGGLED;
        } else {
            *entry &= !Self::TOGGLED;
        }
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Reports which keys are currently held. Left and right modifier keys are
/// queried independently.
pub trait ModifierStateReader {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Translates a key into the text the active keyboard layout produces.
pub trait KeyTextResolver {
    /// Current state of every key, fed to [`KeyTextResolver::key_text`].
    fn keyboard_state(&self) -> Result<KeyboardState, KeyTextError>;

    /// Text produced by `virtual_key` under `state`.
    fn key_text(&self, virtual_key: u8, state: &KeyboardState) -> Result<String, KeyTextError>;

    fn resolve_key_text(&self, key: Key) -> Result<String, KeyTextError> {
        let state = self.keyboard_state()?;
        self.key_text(key.virtual_key(), &state)
    }
}
