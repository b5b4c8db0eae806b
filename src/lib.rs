pub mod bindings;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod key;
pub mod multi_key_gesture;
pub mod numpad;
pub mod pressed_key;
pub mod text;
pub mod trace;
pub mod traits;
pub mod types;

pub use crate::bindings::InputBindings;
pub use crate::classifier::{Classification, classify, resolve_modifiers};
pub use crate::engine::{KeyboardManager, KeyboardManagerBuilder, KeyboardSnapshot};
pub use crate::error::{GestureParseError, KeyTextError};
pub use crate::gesture::KeyGesture;
pub use crate::key::{InputEvent, Key, KeyInput, Modifiers, MouseButton, MouseInput, RawKeyEvent};
pub use crate::multi_key_gesture::{GestureStep, MAX_SEQUENCE_LEN, MultiKeyGesture};
pub use crate::numpad::NumpadAccumulator;
pub use crate::pressed_key::PressedKey;
pub use crate::trace::{set_show_traces, show_traces};
pub use crate::traits::{KeyTextResolver, KeyboardState, ModifierStateReader};
pub use crate::types::{EventArgs, MoveDirection, SemanticEvent};
