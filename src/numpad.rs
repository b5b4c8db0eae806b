/// Tracks an Alt+numpad code point entry.
///
/// `None` while inactive. Left Alt going down starts an empty entry, numpad
/// key-ups append digits, and Alt going up finishes the entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumpadAccumulator {
    digits: Option<String>,
}

impl NumpadAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.digits.is_some()
    }

    /// Digits entered so far, `None` when inactive.
    pub fn digits(&self) -> Option<&str> {
        self.digits.as_deref()
    }

    /// Starts a new entry, dropping any digits already entered.
    pub fn start(&mut self) {
        self.digits = Some(String::new());
    }

    /// Appends a decimal digit. Ignored while inactive.
    pub fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit < 10);
        if let Some(digits) = &mut self.digits {
            digits.push(char::from(b'0' + digit));
        }
    }

    /// A key that is not a numpad digit broke the entry: start over, still
    /// accumulating.
    pub fn interrupt(&mut self) {
        if let Some(digits) = &mut self.digits {
            digits.clear();
        }
    }

    /// Ends the entry and returns the code point it spells, if any.
    pub fn finish(&mut self) -> Option<u32> {
        let digits = self.digits.take()?;
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }
}
