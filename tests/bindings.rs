use keyboard_helper::{GestureParseError, InputBindings, InputEvent, Key, Modifiers};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Editing {
    Delete,
    ToggleInsert,
    Backspace,
}

fn editing_bindings() -> InputBindings<Editing> {
    let mut bindings = InputBindings::new();
    bindings.bind_str("Ctrl+E, W", Editing::Delete).unwrap();
    bindings.bind_str("Ctrl+E, Ctrl+I", Editing::ToggleInsert).unwrap();
    bindings.bind_str("Ctrl+H", Editing::Backspace).unwrap();
    bindings
}

fn ctrl(key: Key) -> InputEvent {
    InputEvent::key(key, Modifiers::CTRL)
}

#[test]
fn first_completed_sequence_wins() {
    let mut bindings = editing_bindings();

    let mut first = ctrl(Key::E);
    assert_eq!(bindings.translate(&mut first), None);
    assert!(first.is_handled());

    let mut second = InputEvent::key(Key::W, Modifiers::empty());
    assert_eq!(bindings.translate(&mut second), Some(&Editing::Delete));
}

#[test]
fn sequences_sharing_a_prefix_progress_together() {
    let mut bindings = editing_bindings();

    assert_eq!(bindings.translate(&mut ctrl(Key::E)), None);
    assert_eq!(bindings.translate(&mut ctrl(Key::I)), Some(&Editing::ToggleInsert));
}

#[test]
fn single_chord_binding() {
    let mut bindings = editing_bindings();

    let mut event = ctrl(Key::H);
    assert_eq!(bindings.translate(&mut event), Some(&Editing::Backspace));
    assert!(!event.is_handled());
}

#[test]
fn reset_forgets_partial_matches() {
    let mut bindings = editing_bindings();

    assert_eq!(bindings.translate(&mut ctrl(Key::E)), None);
    bindings.reset();
    assert_eq!(
        bindings.translate(&mut InputEvent::key(Key::W, Modifiers::empty())),
        None
    );
}

#[test]
fn invalid_sequence_binds_nothing() {
    let mut bindings = editing_bindings();

    assert_eq!(
        bindings.bind_str("W, Ctrl+E", Editing::Delete),
        Err(GestureParseError::BareKeyFirst("W".into()))
    );
    assert_eq!(bindings.len(), 3);
}

#[test]
fn sequence_text_for_hints() {
    let bindings = editing_bindings();

    assert_eq!(
        bindings.sequence_text(&Editing::ToggleInsert).as_deref(),
        Some("Ctrl+E, Ctrl+I")
    );
    assert_eq!(
        InputBindings::<Editing>::new().sequence_text(&Editing::Delete),
        None
    );
}
