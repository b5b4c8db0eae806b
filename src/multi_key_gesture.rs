//! Gestures made of a sequence of keys, such as `Ctrl+E` followed by `W`.
//!
//! The first step must be a [`KeyGesture`]; later steps are gestures or bare
//! keys. Sequences are written as comma separated tokens:
//!
//! ```
//! use keyboard_helper::{InputEvent, Key, Modifiers, MultiKeyGesture};
//!
//! let mut gesture: MultiKeyGesture = "Ctrl+E, W".parse().unwrap();
//!
//! let mut first = InputEvent::key(Key::E, Modifiers::CTRL);
//! assert!(!gesture.matches(&mut first));
//! assert!(first.is_handled());
//!
//! let mut second = InputEvent::key(Key::W, Modifiers::empty());
//! assert!(gesture.matches(&mut second));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::GestureParseError;
use crate::gesture::{KeyGesture, parse_key};
use crate::key::{InputEvent, Key, Modifiers};
use crate::trace;

/// Most steps a sequence can have.
pub const MAX_SEQUENCE_LEN: usize = 5;

/// One step of a [`MultiKeyGesture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureStep {
    /// A key with its required modifiers.
    Chord(KeyGesture),
    /// A key pressed without regard to modifiers. Only keyboard events match it.
    Key(Key),
}

impl GestureStep {
    /// Parses a token as a gesture, or failing that as a bare key.
    pub fn parse(token: &str) -> Result<Self, GestureParseError> {
        if let Ok(gesture) = token.parse::<KeyGesture>() {
            return Ok(GestureStep::Chord(gesture));
        }
        parse_key(token)
            .map(GestureStep::Key)
            .map_err(|_| GestureParseError::InvalidToken(token.trim().to_string()))
    }

    fn normalized(self) -> Self {
        match self {
            GestureStep::Key(key) => KeyGesture::new(key, Modifiers::empty())
                .map_or(self, GestureStep::Chord),
            GestureStep::Chord(_) => self,
        }
    }

    pub fn matches(&self, event: &InputEvent) -> bool {
        match (self, event) {
            (GestureStep::Chord(gesture), _) => gesture.matches(event),
            (GestureStep::Key(key), InputEvent::Key(input)) => input.key == *key,
            (GestureStep::Key(_), _) => false,
        }
    }
}

impl fmt::Display for GestureStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureStep::Chord(gesture) => write!(f, "{gesture}"),
            GestureStep::Key(key) => write!(f, "{key}"),
        }
    }
}

/// Matches a sequence of input events against a list of steps.
///
/// The matcher remembers how many steps have matched so far. An event that
/// does not match the expected step forgets the partial match entirely.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiKeyGesture {
    steps: Vec<GestureStep>,
    index: usize,
}

impl MultiKeyGesture {
    /// Builds a sequence from its tokens, e.g. `&["Ctrl+E", "W"]`.
    ///
    /// # Errors
    ///
    /// When there are no tokens or more than [`MAX_SEQUENCE_LEN`], when a
    /// token is neither a gesture nor a key, or when the first token is not
    /// a gesture.
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self, GestureParseError> {
        if tokens.is_empty() {
            return Err(GestureParseError::Empty);
        }
        if tokens.len() > MAX_SEQUENCE_LEN {
            return Err(GestureParseError::TooManyKeys {
                len: tokens.len(),
                max: MAX_SEQUENCE_LEN,
            });
        }

        let steps = tokens
            .iter()
            .map(|token| GestureStep::parse(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if let GestureStep::Key(_) = steps[0] {
            return Err(GestureParseError::BareKeyFirst(
                tokens[0].as_ref().trim().to_string(),
            ));
        }

        Ok(Self { steps, index: 0 })
    }

    /// Builds a sequence from steps, with the same rules as
    /// [`MultiKeyGesture::new`].
    ///
    /// A [`GestureStep::Key`] whose key is a gesture on its own (`Delete`,
    /// `F2`, ...) becomes a [`GestureStep::Chord`] without modifiers, as the
    /// same token would when parsed.
    ///
    /// # Errors
    ///
    /// When `steps` is empty, too long, or starts with a bare key.
    pub fn from_steps(steps: Vec<GestureStep>) -> Result<Self, GestureParseError> {
        let steps: Vec<GestureStep> = steps.into_iter().map(GestureStep::normalized).collect();
        match steps.first() {
            None => Err(GestureParseError::Empty),
            Some(_) if steps.len() > MAX_SEQUENCE_LEN => Err(GestureParseError::TooManyKeys {
                len: steps.len(),
                max: MAX_SEQUENCE_LEN,
            }),
            Some(GestureStep::Key(key)) => Err(GestureParseError::BareKeyFirst(key.to_string())),
            Some(GestureStep::Chord(_)) => Ok(Self { steps, index: 0 }),
        }
    }

    pub fn steps(&self) -> &[GestureStep] {
        &self.steps
    }

    /// Index of the step the next event is matched against.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Forgets a partial match.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Offers `event` to the sequence. Returns true when it completes the
    /// sequence. An event that matches an intermediate step is marked
    /// handled so the host does not process the key itself.
    pub fn matches(&mut self, event: &mut InputEvent) -> bool {
        if !self.steps[self.index].matches(event) {
            self.index = 0;
            return false;
        }

        self.index += 1;
        if self.index < self.steps.len() {
            event.set_handled();
            trace::show_traces().then(|| {
                tracing::debug!(
                    message = "⌨️ keyboard_helper: gesture sequence advanced",
                    gesture = %self,
                    index = self.index,
                );
            });
            return false;
        }

        self.index = 0;
        true
    }
}

impl fmt::Display for MultiKeyGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl FromStr for MultiKeyGesture {
    type Err = GestureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(GestureParseError::Empty);
        }
        let tokens: Vec<&str> = s.split(',').collect();
        Self::new(&tokens)
    }
}
