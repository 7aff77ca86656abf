//! # Introduction
//!
//! sturun adapts programs written in stu, a small language for a
//! seven-segment calculator, into JavaScript and runs them with a host
//! interpreter (`node` by default).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Rewrite → + Runtime library → Script file → Interpreter
//! ```
//!
//! 1. [`rewrite`]: ordered text substitutions (`KEY[0]`, `elif`, the
//!    `DISPLAY` declaration). No lexer, no validation.
//! 2. [`runtime`]: the display and keypad contract the runtime library
//!    implements, modelled as a [`runtime::RuntimeContext`].
//! 3. [`harness`]: concatenates program and library, writes `<file>.js`
//!    next to the source and runs it with inherited stdio.
//! 4. [`config`]: command-line and environment settings.
//! 5. [`ui`]: ratatui panel for trying the display and keypad by hand.

pub mod config;
pub mod harness;
pub mod rewrite;
pub mod runtime;
pub mod ui;

pub use rewrite::rewrite;
