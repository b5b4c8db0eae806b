use std::collections::HashMap;

use keyboard_helper::{Key, KeyTextError, KeyTextResolver, KeyboardState, ModifierStateReader};

/// A keyboard with a small US-like layout.
///
/// Letters type lowercase, uppercase with Shift. AltGr (Left Ctrl + Right
/// Alt) types the entries of `alt_gr`. Keys without an entry produce no text.
pub struct MockKeyboard {
    state: KeyboardState,
    plain: HashMap<Key, String>,
    alt_gr: HashMap<Key, String>,
    state_unavailable: bool,
}

impl MockKeyboard {
    pub fn new() -> Self {
        let mut plain = HashMap::new();
        for key in [
            Key::A,
            Key::B,
            Key::E,
            Key::Q,
            Key::W,
            Key::X,
            Key::Z,
        ] {
            plain.insert(key, key.to_string().to_lowercase());
        }
        for (key, text) in [
            (Key::D1, "1"),
            (Key::D2, "2"),
            (Key::Space, " "),
            (Key::Enter, "\r"),
            (Key::Back, "\u{8}"),
            (Key::Escape, "\u{1b}"),
            (Key::OemComma, ","),
            (Key::NumPad6, "6"),
        ] {
            plain.insert(key, text.to_string());
        }

        let mut alt_gr = HashMap::new();
        alt_gr.insert(Key::E, "€".to_string());

        Self {
            state: KeyboardState::new(),
            plain,
            alt_gr,
            state_unavailable: false,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.state.set_down(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.state.set_down(key, false);
    }

    pub fn map(&mut self, key: Key, text: &str) {
        self.plain.insert(key, text.to_string());
    }

    /// Makes every keyboard state query fail.
    pub fn break_state(&mut self) {
        self.state_unavailable = true;
    }
}

impl ModifierStateReader for MockKeyboard {
    fn is_key_down(&self, key: Key) -> bool {
        self.state.is_down(key)
    }
}

impl KeyTextResolver for MockKeyboard {
    fn keyboard_state(&self) -> Result<KeyboardState, KeyTextError> {
        if self.state_unavailable {
            Err(KeyTextError::KeyboardStateUnavailable)
        } else {
            Ok(self.state)
        }
    }

    fn key_text(&self, virtual_key: u8, state: &KeyboardState) -> Result<String, KeyTextError> {
        let no_text = KeyTextError::NoTranslation { virtual_key };
        let key = self
            .plain
            .keys()
            .chain(self.alt_gr.keys())
            .find(|k| k.virtual_key() == virtual_key)
            .copied()
            .ok_or(no_text.clone())?;

        if state.is_down(Key::LeftCtrl) && state.is_down(Key::RightAlt) {
            return self.alt_gr.get(&key).cloned().ok_or(no_text);
        }

        let text = self.plain.get(&key).cloned().ok_or(no_text)?;
        let shift = state.is_down(Key::LeftShift) || state.is_down(Key::RightShift);
        Ok(if shift { text.to_uppercase() } else { text })
    }
}
