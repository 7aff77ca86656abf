//! Keypad keys, character bindings and the key input register

use rustc_hash::FxHashMap;
use std::fmt;

pub const KEY_ADD: i32 = 10;
pub const KEY_SUB: i32 = 11;
pub const KEY_MUL: i32 = 12;
pub const KEY_DIV: i32 = 13;
pub const KEY_SQRT: i32 = 14;
pub const KEY_EQUAL: i32 = 15;
pub const KEY_CLEAR: i32 = 16;
pub const KEY_POINT: i32 = 17;
pub const KEY_NEG: i32 = 18;
pub const KEY_BLANK: i32 = 19;

/// A calculator keypad key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Key {
    /// 0-9; build with [`Key::digit`]. Values above 9 read as [`KEY_BLANK`].
    Digit(u8),
    Add,
    Sub,
    Mul,
    Div,
    Sqrt,
    Equal,
    Clear,
    Point,
    Neg,
    /// No key
    #[default]
    Blank,
}

impl Key {
    pub fn digit(value: u8) -> Option<Key> {
        (value <= 9).then_some(Key::Digit(value))
    }

    /// Value a program sees from `readKey()`
    pub fn code(self) -> i32 {
        match self {
            Key::Digit(value) if value <= 9 => i32::from(value),
            Key::Digit(_) => KEY_BLANK,
            Key::Add => KEY_ADD,
            Key::Sub => KEY_SUB,
            Key::Mul => KEY_MUL,
            Key::Div => KEY_DIV,
            Key::Sqrt => KEY_SQRT,
            Key::Equal => KEY_EQUAL,
            Key::Clear => KEY_CLEAR,
            Key::Point => KEY_POINT,
            Key::Neg => KEY_NEG,
            Key::Blank => KEY_BLANK,
        }
    }

    pub fn from_code(code: i32) -> Option<Key> {
        let key = match code {
            0..=9 => Key::Digit(code as u8),
            KEY_ADD => Key::Add,
            KEY_SUB => Key::Sub,
            KEY_MUL => Key::Mul,
            KEY_DIV => Key::Div,
            KEY_SQRT => Key::Sqrt,
            KEY_EQUAL => Key::Equal,
            KEY_CLEAR => Key::Clear,
            KEY_POINT => Key::Point,
            KEY_NEG => Key::Neg,
            KEY_BLANK => Key::Blank,
            _ => return None,
        };
        Some(key)
    }

    /// All keys, digits first
    pub fn all() -> impl Iterator<Item = Key> {
        (0..=KEY_BLANK).filter_map(Key::from_code)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(value) => write!(f, "{}", value),
            Key::Add => write!(f, "+"),
            Key::Sub => write!(f, "-"),
            Key::Mul => write!(f, "*"),
            Key::Div => write!(f, "/"),
            Key::Sqrt => write!(f, "sqrt"),
            Key::Equal => write!(f, "="),
            Key::Clear => write!(f, "clear"),
            Key::Point => write!(f, "."),
            Key::Neg => write!(f, "neg"),
            Key::Blank => write!(f, "blank"),
        }
    }
}

/// Character-to-key table. Unbound characters read as [`Key::Blank`].
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: FxHashMap<char, Key>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        KeyBindings {
            map: FxHashMap::default(),
        }
    }

    /// Digits, `+ - * / = .`, and `s`/`c`/`n` in either case
    pub fn standard() -> Self {
        let mut bindings = Self::empty();
        for (ch, value) in ('0'..='9').zip(0u8..) {
            bindings.bind(ch, Key::Digit(value));
        }
        for (ch, key) in [
            ('+', Key::Add),
            ('-', Key::Sub),
            ('*', Key::Mul),
            ('/', Key::Div),
            ('s', Key::Sqrt),
            ('S', Key::Sqrt),
            ('=', Key::Equal),
            ('c', Key::Clear),
            ('C', Key::Clear),
            ('.', Key::Point),
            ('n', Key::Neg),
            ('N', Key::Neg),
        ] {
            bindings.bind(ch, key);
        }
        bindings
    }

    /// Bind `ch`, returning the key it was previously bound to
    pub fn bind(&mut self, ch: char, key: Key) -> Option<Key> {
        self.map.insert(ch, key)
    }

    pub fn lookup(&self, ch: char) -> Key {
        self.map.get(&ch).copied().unwrap_or_default()
    }

    /// Key for a whole line of typed input. A bare Enter is
    /// [`Key::Equal`]; more than one character is [`Key::Blank`].
    pub fn lookup_input(&self, input: &str) -> Key {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Key::Equal,
            (Some(ch), None) => self.lookup(ch),
            _ => Key::Blank,
        }
    }

    /// Characters bound to `key`, sorted
    pub fn chars_for(&self, key: Key) -> Vec<char> {
        let mut chars: Vec<char> = self
            .map
            .iter()
            .filter(|(_, bound)| **bound == key)
            .map(|(&ch, _)| ch)
            .collect();
        chars.sort_unstable();
        chars
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::standard()
    }
}

/// Most recently observed key.
///
/// Reads never change the register; only [`KeyInputRegister::latch`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyInputRegister {
    latest: Key,
}

impl KeyInputRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> Key {
        self.latest
    }

    /// Record a key event, returning the previous value
    pub fn latch(&mut self, key: Key) -> Key {
        std::mem::replace(&mut self.latest, key)
    }

    pub fn reset(&mut self) {
        self.latest = Key::Blank;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        assert_eq!(Key::all().count(), 20);
        for key in Key::all() {
            assert_eq!(Key::from_code(key.code()), Some(key));
        }
        assert_eq!(Key::from_code(20), None);
        assert_eq!(Key::from_code(-1), None);
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Key::digit(9), Some(Key::Digit(9)));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_out_of_range_digit_reads_as_blank() {
        assert_eq!(Key::Digit(12).code(), KEY_BLANK);
        assert_ne!(Key::Digit(12).code(), KEY_MUL);
        assert_eq!(Key::from_code(Key::Digit(200).code()), Some(Key::Blank));
    }

    #[test]
    fn test_standard_bindings() {
        let bindings = KeyBindings::standard();
        assert_eq!(bindings.lookup('7'), Key::Digit(7));
        assert_eq!(bindings.lookup('S'), Key::Sqrt);
        assert_eq!(bindings.lookup('c'), Key::Clear);
        assert_eq!(bindings.lookup('.'), Key::Point);
        assert_eq!(bindings.lookup('x'), Key::Blank);
        assert_eq!(bindings.chars_for(Key::Neg), vec!['N', 'n']);
    }

    #[test]
    fn test_lookup_input_lines() {
        let bindings = KeyBindings::standard();
        assert_eq!(bindings.lookup_input("+"), Key::Add);
        assert_eq!(bindings.lookup_input("12"), Key::Blank);
        assert_eq!(bindings.lookup_input(""), Key::Equal);
    }

    #[test]
    fn test_register_reads_are_stable() {
        let mut register = KeyInputRegister::new();
        assert_eq!(register.read(), Key::Blank);
        assert_eq!(register.latch(Key::Digit(4)), Key::Blank);
        assert_eq!(register.read(), Key::Digit(4));
        assert_eq!(register.read(), Key::Digit(4));
        register.reset();
        assert_eq!(register.read(), Key::Blank);
    }
}
