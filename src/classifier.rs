use crate::key::{Key, Modifiers, RawKeyEvent};
use crate::numpad::NumpadAccumulator;
use crate::pressed_key::PressedKey;
use crate::trace;
use crate::traits::{KeyTextResolver, ModifierStateReader};

/// Result of classifying a raw key-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub pressed: PressedKey,
    /// False when the layout could not give text for the key; the text is
    /// then empty and no character is typed.
    pub text_resolved: bool,
}

impl Classification {
    fn bare(pressed: PressedKey) -> Self {
        Self {
            pressed,
            text_resolved: true,
        }
    }
}

/// Modifier flags from the current key states.
///
/// Right Alt together with Left Ctrl is how layouts report AltGr: that
/// combination asserts neither Ctrl nor Alt, so AltGr characters are typed
/// rather than taken as Ctrl+Alt shortcuts.
pub fn resolve_modifiers<R: ModifierStateReader + ?Sized>(reader: &R) -> Modifiers {
    let left_ctrl = reader.is_key_down(Key::LeftCtrl);
    let right_ctrl = reader.is_key_down(Key::RightCtrl);
    let left_alt = reader.is_key_down(Key::LeftAlt);
    let right_alt = reader.is_key_down(Key::RightAlt);
    let alt_gr = right_alt && left_ctrl;

    let mut flags = Modifiers::empty();
    flags.set(Modifiers::CTRL, (left_ctrl || right_ctrl) && !alt_gr);
    flags.set(
        Modifiers::SHIFT,
        reader.is_key_down(Key::LeftShift) || reader.is_key_down(Key::RightShift),
    );
    flags.set(Modifiers::ALT, left_alt || (right_alt && !left_ctrl));
    flags
}

/// Classifies a raw key-down into a [`PressedKey`].
///
/// A Left Alt press (not a repeat) restarts `numpad`; this is the only
/// state the classifier touches. Text resolution failures degrade to an
/// empty text.
pub fn classify<K>(raw: &RawKeyEvent, keyboard: &K, numpad: &mut NumpadAccumulator) -> Classification
where
    K: ModifierStateReader + KeyTextResolver + ?Sized,
{
    if matches!(
        raw.key,
        Key::LeftCtrl | Key::RightCtrl | Key::LeftShift | Key::RightShift
    ) {
        return Classification::bare(PressedKey::new(raw.key));
    }

    let key = raw.effective_key();

    if key == Key::LeftAlt && raw.is_down {
        if !raw.is_repeat {
            trace::step("Recording numpad started");
            numpad.start();
        }
        return Classification::bare(PressedKey::EMPTY);
    }

    let flags = resolve_modifiers(keyboard);

    match keyboard.resolve_key_text(key) {
        Ok(text) => Classification {
            pressed: PressedKey::with_text(key, flags, text),
            text_resolved: true,
        },
        Err(error) => {
            trace::show_traces().then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "⌨️ keyboard_helper: no text for key",
                    key = %key,
                    error = %error,
                );
            });
            Classification {
                pressed: PressedKey::with_flags(key, flags),
                text_resolved: false,
            }
        }
    }
}
