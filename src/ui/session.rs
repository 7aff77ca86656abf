//! Terminal mode switching for the panel

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;

/// The terminal switches the panel needs
pub trait TerminalControl {
    fn enable_raw_mode(&mut self) -> io::Result<()>;
    fn disable_raw_mode(&mut self) -> io::Result<()>;
    fn enter_alternate_screen(&mut self) -> io::Result<()>;
    fn leave_alternate_screen(&mut self) -> io::Result<()>;
}

/// Controls the process's own terminal through stdout
pub struct Crossterm;

impl TerminalControl for Crossterm {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }

    fn enter_alternate_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnterAlternateScreen)
    }

    fn leave_alternate_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), LeaveAlternateScreen)
    }
}

/// Raw mode plus alternate screen. Whatever was switched on is switched
/// back off on drop, including when `enter` itself fails halfway.
pub struct TerminalSession<C: TerminalControl> {
    control: C,
    raw: bool,
    alternate: bool,
}

impl<C: TerminalControl> TerminalSession<C> {
    pub fn enter(control: C) -> io::Result<Self> {
        let mut session = TerminalSession {
            control,
            raw: false,
            alternate: false,
        };
        session.control.enable_raw_mode()?;
        session.raw = true;
        session.control.enter_alternate_screen()?;
        session.alternate = true;
        Ok(session)
    }

    /// Undo both switches. Both are attempted even if the first fails;
    /// the first error is returned.
    pub fn restore(&mut self) -> io::Result<()> {
        let raw = if std::mem::take(&mut self.raw) {
            self.control.disable_raw_mode()
        } else {
            Ok(())
        };
        let alternate = if std::mem::take(&mut self.alternate) {
            self.control.leave_alternate_screen()
        } else {
            Ok(())
        };
        raw.and(alternate)
    }
}

impl<C: TerminalControl> Drop for TerminalSession<C> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every call; can be told to fail entering the alternate screen
    struct Recorder {
        calls: Rc<RefCell<Vec<&'static str>>>,
        fail_alternate: bool,
    }

    impl Recorder {
        fn new(fail_alternate: bool) -> (Self, Rc<RefCell<Vec<&'static str>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let recorder = Recorder {
                calls: Rc::clone(&calls),
                fail_alternate,
            };
            (recorder, calls)
        }
    }

    impl TerminalControl for Recorder {
        fn enable_raw_mode(&mut self) -> io::Result<()> {
            self.calls.borrow_mut().push("enable_raw");
            Ok(())
        }

        fn disable_raw_mode(&mut self) -> io::Result<()> {
            self.calls.borrow_mut().push("disable_raw");
            Ok(())
        }

        fn enter_alternate_screen(&mut self) -> io::Result<()> {
            self.calls.borrow_mut().push("enter_alternate");
            if self.fail_alternate {
                Err(io::Error::new(io::ErrorKind::Other, "no alternate screen"))
            } else {
                Ok(())
            }
        }

        fn leave_alternate_screen(&mut self) -> io::Result<()> {
            self.calls.borrow_mut().push("leave_alternate");
            Ok(())
        }
    }

    #[test]
    fn test_failed_enter_leaves_raw_mode() {
        let (recorder, calls) = Recorder::new(true);
        let err = TerminalSession::enter(recorder).err().unwrap();
        assert_eq!(err.to_string(), "no alternate screen");
        assert_eq!(
            *calls.borrow(),
            vec!["enable_raw", "enter_alternate", "disable_raw"]
        );
    }

    #[test]
    fn test_drop_restores_both() {
        let (recorder, calls) = Recorder::new(false);
        let session = TerminalSession::enter(recorder).unwrap();
        drop(session);
        assert_eq!(
            *calls.borrow(),
            vec!["enable_raw", "enter_alternate", "disable_raw", "leave_alternate"]
        );
    }

    #[test]
    fn test_restore_runs_once() {
        let (recorder, calls) = Recorder::new(false);
        let mut session = TerminalSession::enter(recorder).unwrap();
        session.restore().unwrap();
        drop(session);
        assert_eq!(calls.borrow().len(), 4);
    }
}
