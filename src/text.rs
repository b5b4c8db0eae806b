//! Helpers to edit a string with the characters the keyboard produces.
//!
//! Codes are Unicode code points. Positions count `char`s, not bytes. Passing
//! a zero or non-scalar code, or a position outside the text, is a bug in the
//! caller and panics.

/// The string holding the character `code`. Surrogates and values past
/// U+10FFFF give U+FFFD.
pub fn code_to_string(code: u32) -> String {
    char::from_u32(code)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}

/// Code point of the first character of `text`.
///
/// # Panics
///
/// If `text` is empty.
pub fn string_to_code(text: &str) -> u32 {
    match text.chars().next() {
        Some(c) => u32::from(c),
        None => panic!("text must not be empty"),
    }
}

/// True unless `code` is a control character, a surrogate, a line or
/// paragraph separator, or not a code point at all.
pub fn is_visible(code: u32) -> bool {
    match char::from_u32(code) {
        Some(c) => !c.is_control() && c != '\u{2028}' && c != '\u{2029}',
        None => false,
    }
}

/// Inserts `code` at `position` and moves `position` past it.
///
/// # Panics
///
/// If `code` is zero or not a Unicode scalar value, or `position` is past
/// the end of `text`.
pub fn insert_character(code: u32, text: &mut String, position: &mut usize) {
    let c = scalar(code);
    let at = byte_index(text, *position).unwrap_or_else(|| invalid_position(*position, text));
    text.insert(at, c);
    *position += 1;
}

/// Replaces the character at `position` with `code` and moves `position`
/// past it.
///
/// # Panics
///
/// If `code` is zero or not a Unicode scalar value, or there is no character
/// at `position`.
pub fn replace_character(code: u32, text: &mut String, position: &mut usize) {
    let c = scalar(code);
    let Some((at, old)) = text.char_indices().nth(*position) else {
        invalid_position(*position, text)
    };
    text.replace_range(at..at + old.len_utf8(), c.encode_utf8(&mut [0; 4]));
    *position += 1;
}

/// Deletes the character before `position` when `backward`, at `position`
/// otherwise. Returns false, leaving everything untouched, when there is no
/// such character.
///
/// # Panics
///
/// If `position` is past the end of `text`.
pub fn delete_character(backward: bool, text: &mut String, position: &mut usize) -> bool {
    if byte_index(text, *position).is_none() {
        invalid_position(*position, text);
    }

    let target = if backward {
        match position.checked_sub(1) {
            Some(before) => before,
            None => return false,
        }
    } else {
        *position
    };

    let Some((at, _)) = text.char_indices().nth(target) else {
        return false;
    };
    text.remove(at);
    if backward {
        *position -= 1;
    }
    true
}

fn scalar(code: u32) -> char {
    match char::from_u32(code) {
        Some(c) if code != 0 => c,
        _ => panic!("code {code:#x} must be a non-zero Unicode scalar value"),
    }
}

/// Byte offset of the `position`th char, or of the end when `position` is
/// the char count.
fn byte_index(text: &str, position: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(position)
}

fn invalid_position(position: usize, text: &str) -> ! {
    panic!(
        "position {position} must be a valid position in a text of {} characters",
        text.chars().count()
    )
}
