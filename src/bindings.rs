use crate::error::GestureParseError;
use crate::key::InputEvent;
use crate::multi_key_gesture::MultiKeyGesture;

/// Ordered table of gesture sequences bound to commands.
///
/// Every input event is offered to the bound gestures in binding order until
/// one of them completes.
#[derive(Debug, Clone)]
pub struct InputBindings<C> {
    bindings: Vec<(MultiKeyGesture, C)>,
}

impl<C> Default for InputBindings<C> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<C> InputBindings<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn bind(&mut self, gesture: MultiKeyGesture, command: C) {
        self.bindings.push((gesture, command));
    }

    /// Binds a sequence written as `"Ctrl+E, W"`.
    ///
    /// # Errors
    ///
    /// When the sequence does not parse; nothing is bound then.
    pub fn bind_str(&mut self, sequence: &str, command: C) -> Result<(), GestureParseError> {
        let gesture = sequence.parse()?;
        self.bind(gesture, command);
        Ok(())
    }

    /// Offers `event` to the bound gestures. Returns the command of the first
    /// gesture the event completes; the gestures after it do not see the
    /// event.
    pub fn translate(&mut self, event: &mut InputEvent) -> Option<&C> {
        let index = self
            .bindings
            .iter_mut()
            .position(|(gesture, _)| gesture.matches(event))?;
        Some(&self.bindings[index].1)
    }

    /// Forgets every partial match.
    pub fn reset(&mut self) {
        for (gesture, _) in &mut self.bindings {
            gesture.reset();
        }
    }
}

impl<C: PartialEq> InputBindings<C> {
    /// The sequence bound to `command`, as text, for shortcut hints.
    pub fn sequence_text(&self, command: &C) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound == command)
            .map(|(gesture, _)| gesture.to_string())
    }
}
