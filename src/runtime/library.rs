//! The runtime library text appended to every rewritten program

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Library file name, resolved against the working directory
pub const DEFAULT_LIBRARY_FILE: &str = "lib.js";

/// Names rewritten programs call into
pub const REQUIRED_SYMBOLS: &[&str] = &["readKey", "NUM_DISPLAY_DIGITS"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeLibrary {
    path: PathBuf,
    text: String,
}

impl RuntimeLibrary {
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(RuntimeLibrary::from_text(path, text))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        RuntimeLibrary {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether `symbol` appears anywhere in the library text
    pub fn provides(&self, symbol: &str) -> bool {
        self.text.contains(symbol)
    }

    pub fn missing_symbols(&self) -> Vec<&'static str> {
        REQUIRED_SYMBOLS
            .iter()
            .copied()
            .filter(|symbol| !self.provides(symbol))
            .collect()
    }
}
