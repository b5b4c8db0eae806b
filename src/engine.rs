use crate::classifier::{Classification, classify};
use crate::key::{Key, Modifiers, RawKeyEvent};
use crate::numpad::NumpadAccumulator;
use crate::text;
use crate::trace::{self, RawEventTracer};
use crate::traits::{KeyTextResolver, ModifierStateReader};
use crate::types::{EventArgs, MoveDirection, SemanticEvent};

type Listener = Box<dyn FnMut(&mut EventArgs)>;

/// Turns raw key events into [`SemanticEvent`]s for a text-editing widget.
///
/// The host feeds every raw key-down to [`KeyboardManager::key_down`] and
/// every key-up to [`KeyboardManager::key_up`], in delivery order, passing
/// the keyboard the events come from.
pub struct KeyboardManager {
    character_key: Vec<Listener>,
    move_key: Vec<Listener>,
    numpad: NumpadAccumulator,
    tracer: RawEventTracer,
}

#[derive(Debug, Clone)]
pub struct KeyboardSnapshot {
    /// Digits of the Alt+numpad entry in progress.
    pub numpad_digits: Option<String>,
    pub last_key_repeated: bool,
}

#[derive(Default)]
pub struct KeyboardManagerBuilder {
    character_key: Vec<Listener>,
    move_key: Vec<Listener>,
}

impl KeyboardManagerBuilder {
    pub fn on_character_key(mut self, listener: impl FnMut(&mut EventArgs) + 'static) -> Self {
        self.character_key.push(Box::new(listener));
        self
    }

    pub fn on_move_key(mut self, listener: impl FnMut(&mut EventArgs) + 'static) -> Self {
        self.move_key.push(Box::new(listener));
        self
    }

    pub fn build(self) -> KeyboardManager {
        KeyboardManager {
            character_key: self.character_key,
            move_key: self.move_key,
            numpad: NumpadAccumulator::new(),
            tracer: RawEventTracer::default(),
        }
    }
}

impl Default for KeyboardManager {
    fn default() -> Self {
        KeyboardManagerBuilder::default().build()
    }
}

impl std::fmt::Debug for KeyboardManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardManager")
            .field("character_key_listeners", &self.character_key.len())
            .field("move_key_listeners", &self.move_key.len())
            .field("numpad", &self.numpad)
            .finish()
    }
}

impl KeyboardManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> KeyboardManagerBuilder {
        KeyboardManagerBuilder::default()
    }

    /// Registers a listener for visible characters. Listeners run in
    /// registration order.
    pub fn on_character_key(&mut self, listener: impl FnMut(&mut EventArgs) + 'static) {
        self.character_key.push(Box::new(listener));
    }

    /// Registers a listener for caret moves. Listeners run in registration
    /// order.
    pub fn on_move_key(&mut self, listener: impl FnMut(&mut EventArgs) + 'static) {
        self.move_key.push(Box::new(listener));
    }

    pub fn snapshot(&self) -> KeyboardSnapshot {
        KeyboardSnapshot {
            numpad_digits: self.numpad.digits().map(str::to_owned),
            last_key_repeated: self.tracer.last_key_repeated(),
        }
    }

    /// Handles a raw key-down. Returns true when the host should mark the raw
    /// event handled.
    pub fn key_down<K>(&mut self, keyboard: &K, raw: RawKeyEvent) -> bool
    where
        K: ModifierStateReader + KeyTextResolver + ?Sized,
    {
        self.tracer.trace("OnKeyDown", &raw);

        let Classification { pressed, .. } = classify(&raw, keyboard, &mut self.numpad);
        let key = pressed.key();

        if key == Key::None || key.is_modifier() {
            return false;
        }

        if key == Key::Escape {
            return true;
        }

        if let Some(direction) = MoveDirection::from_key(key) {
            return self.notify_move_key(direction, pressed.flags());
        }

        let flags = pressed.flags();
        if flags.intersects(Modifiers::CTRL | Modifiers::ALT) || pressed.text().is_empty() {
            return true;
        }

        let code = text::string_to_code(pressed.text());
        self.notify_character_key(code, Some(key))
    }

    /// Handles a raw key-up, driving the Alt+numpad entry.
    pub fn key_up<R>(&mut self, keyboard: &R, raw: RawKeyEvent)
    where
        R: ModifierStateReader + ?Sized,
    {
        self.tracer.trace("OnKeyUp", &raw);

        let alt_down = keyboard.is_key_down(Key::LeftAlt) || keyboard.is_key_down(Key::RightAlt);

        if raw.key == Key::System && alt_down && self.numpad.is_active() {
            match raw.system_key.numpad_digit() {
                Some(digit) => {
                    self.numpad.push_digit(digit);
                    trace::show_traces().then(|| {
                        tracing::debug!(
                            message = "⌨️ keyboard_helper: recording numpad",
                            digits = ?self.numpad.digits(),
                        );
                    });
                }
                None => {
                    self.numpad.interrupt();
                    trace::step("Recording numpad interrupted. Not a numpad key.");
                }
            }
            return;
        }

        let key = raw.effective_key();
        if matches!(key, Key::LeftAlt | Key::RightAlt) && !raw.is_down {
            self.finish_numpad();
        }
    }

    fn finish_numpad(&mut self) {
        if !self.numpad.is_active() {
            return;
        }
        trace::step("Recording numpad finished");

        let Some(code) = self.numpad.finish() else {
            return;
        };

        if text::is_visible(code) {
            trace::show_traces().then(|| {
                tracing::debug!(message = "⌨️ keyboard_helper: numpad code parsed", code);
            });
            self.notify_character_key(code, None);
        } else {
            trace::show_traces().then(|| {
                tracing::debug!(
                    message = "⌨️ keyboard_helper: numpad code is not a visible character",
                    code,
                );
            });
        }
    }

    fn notify_character_key(&mut self, code: u32, key: Option<Key>) -> bool {
        let mut args = EventArgs::new(SemanticEvent::CharacterKey { code, key });
        for listener in &mut self.character_key {
            listener(&mut args);
        }
        args.handled
    }

    fn notify_move_key(&mut self, direction: MoveDirection, flags: Modifiers) -> bool {
        let mut args = EventArgs::new(SemanticEvent::MoveKey { direction, flags });
        for listener in &mut self.move_key {
            listener(&mut args);
        }
        args.handled
    }
}
