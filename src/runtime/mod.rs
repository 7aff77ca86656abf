//! Display and keypad model behind rewritten programs
//!
//! The runtime library keeps a `DISPLAY` array and a key register as
//! globals. This module models the same contract as owned data:
//!
//! - [`segments`]: segment bits, digit encodings, box-drawing glyphs
//! - [`display`]: [`DisplayState`], `NUM_DISPLAY_DIGITS + 1` segment slots
//! - [`keys`]: [`Key`] codes, [`KeyBindings`], [`KeyInputRegister`]
//! - [`context`]: [`RuntimeContext`], which owns a display and a register
//! - [`library`]: the [`RuntimeLibrary`] text appended to programs

pub mod context;
pub mod display;
pub mod keys;
pub mod library;
pub mod segments;

pub use context::RuntimeContext;
pub use display::{DisplayError, DisplayState, NUM_DISPLAY_DIGITS};
pub use keys::{Key, KeyBindings, KeyInputRegister};
pub use library::RuntimeLibrary;
