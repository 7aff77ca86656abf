//! Multi-digit seven-segment display
//!
//! [`DisplayState`] holds `NUM_DISPLAY_DIGITS + 1` slots. Each slot is a
//! segment mask (see [`segments`](super::segments)); digits and blanks are
//! just particular masks. Slot 0 is the rightmost digit on screen.

use super::segments::{self, BLANK, SEG_H};
use std::fmt;
use thiserror::Error;

/// Digit count the runtime library sizes `DISPLAY` from
pub const NUM_DISPLAY_DIGITS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("display index {index} out of range for {slots} slots")]
    IndexOutOfRange { index: usize, slots: usize },

    #[error("{digit} is not a displayable digit")]
    InvalidDigit { digit: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    slots: Vec<u8>,
}

impl DisplayState {
    /// A blank display with `NUM_DISPLAY_DIGITS + 1` slots
    pub fn new() -> Self {
        Self::with_digits(NUM_DISPLAY_DIGITS)
    }

    /// A blank display with `num_digits + 1` slots
    pub fn with_digits(num_digits: usize) -> Self {
        DisplayState {
            slots: vec![BLANK; num_digits + 1],
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[u8] {
        &self.slots
    }

    pub fn segments(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied()
    }

    /// Digit shown in slot `index`, `None` for blanks and non-digit masks
    pub fn digit_at(&self, index: usize) -> Option<u8> {
        self.segments(index).and_then(segments::decode_digit)
    }

    pub fn has_point(&self, index: usize) -> bool {
        self.segments(index).is_some_and(|mask| mask & SEG_H != 0)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut u8, DisplayError> {
        let slots = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(DisplayError::IndexOutOfRange { index, slots })
    }

    pub fn set_segments(&mut self, index: usize, mask: u8) -> Result<(), DisplayError> {
        *self.slot_mut(index)? = mask;
        Ok(())
    }

    /// Show `digit` in slot `index`, keeping its decimal point
    pub fn set_digit(&mut self, index: usize, digit: u8) -> Result<(), DisplayError> {
        let mask = segments::encode_digit(digit).ok_or(DisplayError::InvalidDigit { digit })?;
        let slot = self.slot_mut(index)?;
        *slot = mask | (*slot & SEG_H);
        Ok(())
    }

    pub fn set_blank(&mut self, index: usize) -> Result<(), DisplayError> {
        self.set_segments(index, BLANK)
    }

    pub fn set_point(&mut self, index: usize, lit: bool) -> Result<(), DisplayError> {
        let slot = self.slot_mut(index)?;
        if lit {
            *slot |= SEG_H;
        } else {
            *slot &= !SEG_H;
        }
        Ok(())
    }

    /// Blank every slot
    pub fn clear(&mut self) {
        self.slots.fill(BLANK);
    }

    /// Render the display as three text rows, highest slot leftmost
    pub fn render(&self) -> [String; 3] {
        let mut rows: [String; 3] = Default::default();
        for &mask in self.slots.iter().rev() {
            for (row, part) in rows.iter_mut().zip(segments::glyph(mask)) {
                row.push_str(&part);
            }
        }
        rows
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [top, middle, bottom] = self.render();
        writeln!(f, "{}", top)?;
        writeln!(f, "{}", middle)?;
        write!(f, "{}", bottom)
    }
}
