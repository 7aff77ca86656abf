//! Panel application state and event loop

use crate::runtime::keys::Key;
use crate::runtime::RuntimeContext;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

use super::panes::DISPLAY_PANE_HEIGHT;

/// The panel's state: a runtime context driven by real key presses
pub struct App {
    pub context: RuntimeContext,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub is_error: bool,
}

impl App {
    pub fn new(context: RuntimeContext) -> Self {
        App {
            context,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_error: false,
        }
    }

    /// Run the panel until Esc or Ctrl-C
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DISPLAY_PANE_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_display_pane(frame, chunks[0], self.context.display());
        super::panes::render_keypad_pane(
            frame,
            chunks[1],
            self.context.bindings(),
            self.context.read_key(),
        );
        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.context.read_key(),
            self.is_error,
        );
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.apply(Key::Equal),
            KeyCode::Char(ch) => {
                let key = self.context.bindings().lookup(ch);
                self.apply(key);
            }
            _ => {}
        }
    }

    fn apply(&mut self, key: Key) {
        match self.context.apply(key) {
            Ok(()) => {
                self.status_message = format!("Pressed {}", key);
                self.is_error = false;
            }
            Err(e) => {
                self.status_message = e.to_string();
                self.is_error = true;
            }
        }
    }
}
