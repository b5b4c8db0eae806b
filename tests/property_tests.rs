use std::cell::RefCell;
use std::rc::Rc;

use keyboard_helper::text::{
    code_to_string, delete_character, insert_character, is_visible, string_to_code,
};
use keyboard_helper::{
    InputEvent, Key, KeyboardManager, Modifiers, MultiKeyGesture, RawKeyEvent, SemanticEvent,
};
use proptest::prelude::*;

mod support;
use support::mock_keyboard::MockKeyboard;

// Strategy for generating text with ASCII, accented, CJK and emoji characters
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9 .!?,;:\\-_]{0,50}",
        "[\u{0020}-\u{007E}\u{00A0}-\u{00FF}\u{4E00}-\u{9FFF}\u{1F600}-\u{1F64F}]{0,40}",
    ]
}

fn numpad_key(digit: char) -> Key {
    match digit {
        '0' => Key::NumPad0,
        '1' => Key::NumPad1,
        '2' => Key::NumPad2,
        '3' => Key::NumPad3,
        '4' => Key::NumPad4,
        '5' => Key::NumPad5,
        '6' => Key::NumPad6,
        '7' => Key::NumPad7,
        '8' => Key::NumPad8,
        _ => Key::NumPad9,
    }
}

// Keys and modifiers a user may throw at a chord matcher
fn input_strategy() -> impl Strategy<Value = InputEvent> {
    let key = prop_oneof![
        Just(Key::E),
        Just(Key::W),
        Just(Key::Q),
        Just(Key::Delete),
        Just(Key::F2),
    ];
    let mods = (0u8..8).prop_map(Modifiers::from_bits_truncate);
    (key, mods).prop_map(|(key, mods)| InputEvent::key(key, mods))
}

proptest! {
    #[test]
    fn chars_are_visible_unless_control_or_separator(c in any::<char>()) {
        let expected = !c.is_control() && c != '\u{2028}' && c != '\u{2029}';
        prop_assert_eq!(is_visible(u32::from(c)), expected);
    }

    #[test]
    fn surrogates_and_out_of_range_are_invisible(
        code in prop_oneof![0xD800u32..=0xDFFF, 0x11_0000u32..=u32::MAX],
    ) {
        prop_assert!(!is_visible(code));
    }

    #[test]
    fn code_string_round_trip(c in any::<char>()) {
        let code = u32::from(c);
        prop_assert_eq!(string_to_code(&code_to_string(code)), code);
    }

    #[test]
    fn insert_then_delete_is_identity(
        text in text_strategy(),
        c in any::<char>().prop_filter("non-zero", |c| *c != '\0'),
        seed in any::<usize>(),
    ) {
        let len = text.chars().count();
        let start = seed % (len + 1);

        let mut edited = text.clone();
        let mut pos = start;
        insert_character(u32::from(c), &mut edited, &mut pos);
        prop_assert_eq!(pos, start + 1);

        pos = start;
        prop_assert!(delete_character(false, &mut edited, &mut pos));
        prop_assert_eq!(edited, text);
        prop_assert_eq!(pos, start);
    }

    #[test]
    fn matcher_index_stays_in_bounds(events in prop::collection::vec(input_strategy(), 0..50)) {
        let mut gesture = MultiKeyGesture::new(&["Ctrl+E", "W", "Ctrl+Delete"]).unwrap();
        for mut event in events {
            let before = gesture.index();
            let completed = gesture.matches(&mut event);
            prop_assert!(gesture.index() < gesture.steps().len());
            if completed {
                prop_assert_eq!(before, 2);
                prop_assert_eq!(gesture.index(), 0);
            }
            prop_assert_eq!(event.is_handled(), gesture.index() > 0);
        }
    }

    #[test]
    fn numpad_entry_types_any_visible_char(
        c in any::<char>().prop_filter("visible", |c| is_visible(u32::from(*c))),
    ) {
        let mut kb = MockKeyboard::new();
        let log: Rc<RefCell<Vec<SemanticEvent>>> = Rc::default();
        let sink = Rc::clone(&log);
        let mut manager = KeyboardManager::new();
        manager.on_character_key(move |args| sink.borrow_mut().push(args.event));

        kb.press(Key::LeftAlt);
        manager.key_down(&kb, RawKeyEvent::system_down(Key::LeftAlt));
        for digit in u32::from(c).to_string().chars() {
            let key = numpad_key(digit);
            kb.press(key);
            manager.key_down(&kb, RawKeyEvent::system_down(key));
            kb.release(key);
            manager.key_up(&kb, RawKeyEvent::system_up(key));
        }
        kb.release(Key::LeftAlt);
        manager.key_up(&kb, RawKeyEvent::system_up(Key::LeftAlt));

        prop_assert_eq!(
            log.borrow().clone(),
            vec![SemanticEvent::CharacterKey { code: u32::from(c), key: None }]
        );
    }
}
