//! Interactive seven-segment panel built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: panel state and keyboard event loop around a [`RuntimeContext`]
//! - **[`panes`]**: stateless render functions (display, keypad legend, status bar)
//! - **[`session`]**: raw mode and alternate screen, restored on drop
//! - **[`theme`]**: colors shared by the panes
//!
//! Typed keys go through the context's bindings into its key register and
//! are entered into the display calculator-style.
//!
//! [`RuntimeContext`]: crate::runtime::RuntimeContext

pub mod app;
pub mod panes;
pub mod session;
pub mod theme;

pub use app::App;
pub use session::{Crossterm, TerminalSession};
