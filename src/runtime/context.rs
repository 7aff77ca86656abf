//! Explicit runtime context
//!
//! Owns the display and the key register that the runtime library keeps as
//! globals. Key events come in through [`RuntimeContext::press`]; programs
//! (or the interactive panel) observe them with [`RuntimeContext::read_key`].

use super::display::{DisplayError, DisplayState};
use super::keys::{Key, KeyBindings, KeyInputRegister};
use super::segments::{BLANK, SEG_G};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct RuntimeContext {
    display: DisplayState,
    register: KeyInputRegister,
    bindings: KeyBindings,
    /// Digits typed since the last clear
    entry_len: usize,
}

impl RuntimeContext {
    pub fn new() -> Self {
        Self::with_display(DisplayState::new())
    }

    pub fn with_display(display: DisplayState) -> Self {
        RuntimeContext {
            display,
            register: KeyInputRegister::new(),
            bindings: KeyBindings::standard(),
            entry_len: 0,
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayState {
        &mut self.display
    }

    pub fn register(&self) -> &KeyInputRegister {
        &self.register
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Current value of the key register
    pub fn read_key(&self) -> Key {
        self.register.read()
    }

    /// Record an external key event
    pub fn press(&mut self, key: Key) {
        let previous = self.register.latch(key);
        trace!(%key, %previous, "key latched");
    }

    /// Record a typed character through the bindings table
    pub fn press_char(&mut self, ch: char) -> Key {
        let key = self.bindings.lookup(ch);
        self.press(key);
        key
    }

    /// No key held
    pub fn release(&mut self) {
        self.press(Key::Blank);
    }

    pub fn render(&self) -> [String; 3] {
        self.display.render()
    }

    /// Slot reserved for the sign during calculator-style entry
    fn sign_slot(&self) -> usize {
        self.display.slot_count() - 1
    }

    /// Shift `digit` in from the right. Returns `false` once every digit
    /// slot below the sign slot is filled.
    pub fn enter_digit(&mut self, digit: u8) -> Result<bool, DisplayError> {
        let Some(key) = Key::digit(digit) else {
            return Err(DisplayError::InvalidDigit { digit });
        };
        let sign_slot = self.sign_slot();
        if self.entry_len >= sign_slot {
            return Ok(false);
        }
        for index in (1..sign_slot).rev() {
            let shifted = self.display.segments(index - 1).unwrap_or(BLANK);
            self.display.set_segments(index, shifted)?;
        }
        self.display.set_segments(0, BLANK)?;
        self.display.set_digit(0, digit)?;
        self.entry_len += 1;
        trace!(%key, entry_len = self.entry_len, "digit entered");
        Ok(true)
    }

    /// Light the decimal point after the most recent digit, clearing any
    /// earlier one
    pub fn enter_point(&mut self) -> Result<(), DisplayError> {
        for index in 0..self.sign_slot() {
            self.display.set_point(index, false)?;
        }
        if self.entry_len == 0 {
            self.enter_digit(0)?;
        }
        self.display.set_point(0, true)
    }

    /// Toggle the minus sign in the leftmost slot
    pub fn toggle_sign(&mut self) -> Result<(), DisplayError> {
        let sign_slot = self.sign_slot();
        let mask = self.display.segments(sign_slot).unwrap_or(BLANK);
        let toggled = if mask == SEG_G { BLANK } else { SEG_G };
        self.display.set_segments(sign_slot, toggled)
    }

    pub fn clear_entry(&mut self) {
        self.display.clear();
        self.entry_len = 0;
    }

    /// Latch `key` and apply its calculator-entry effect to the display.
    /// Operator keys only latch.
    pub fn apply(&mut self, key: Key) -> Result<(), DisplayError> {
        self.press(key);
        match key {
            Key::Digit(digit) => self.enter_digit(digit).map(|_| ()),
            Key::Point => self.enter_point(),
            Key::Neg => self.toggle_sign(),
            Key::Clear => {
                self.clear_entry();
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl Default for RuntimeContext {
    fn default() -> Self {
        Self::new()
    }
}
