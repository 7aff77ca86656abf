//! Combining a rewritten program with the runtime library

use super::errors::HarnessError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of the generated host script
pub const SCRIPT_EXTENSION: &str = "js";

/// Rewritten program followed by the library text, nothing in between
pub fn assemble(rewritten: &str, library: &str) -> String {
    if !ends_at_statement_boundary(rewritten) {
        warn!("rewritten program does not end with a newline, ';' or '}}'; the library is appended directly");
    }
    let mut combined = String::with_capacity(rewritten.len() + library.len());
    combined.push_str(rewritten);
    combined.push_str(library);
    combined
}

fn ends_at_statement_boundary(text: &str) -> bool {
    text.is_empty() || text.trim_end_matches([' ', '\t']).ends_with(['\n', ';', '}'])
}

/// Sibling of `source` with the same stem and [`SCRIPT_EXTENSION`]
pub fn derive_script_path(source: &Path) -> PathBuf {
    source.with_extension(SCRIPT_EXTENSION)
}

/// Write `combined` to `path` in one call, replacing any existing file
pub fn persist(combined: &str, path: &Path) -> Result<(), HarnessError> {
    fs::write(path, combined).map_err(|source| HarnessError::ScriptWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = combined.len(), "wrote script");
    Ok(())
}
