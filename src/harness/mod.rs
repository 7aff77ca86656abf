//! Assembly and execution
//!
//! One strictly sequential pass per invocation:
//!
//! ```text
//! read source → rewrite → read library → assemble → persist → locate interpreter → run
//! ```
//!
//! - [`assemble`]: concatenation, script path derivation, writing the script
//! - [`process`]: interpreter lookup on `PATH` and the blocking child run
//! - [`errors`]: [`HarnessError`], one variant per failed precondition
//!
//! A missing source or library aborts before anything is written.

pub mod assemble;
pub mod errors;
pub mod process;

pub use assemble::{assemble, derive_script_path, persist, SCRIPT_EXTENSION};
pub use errors::HarnessError;
pub use process::{execute, locate_interpreter};

use crate::config::Config;
use crate::rewrite::Rewriter;
use crate::runtime::RuntimeLibrary;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tracing::{info, warn};

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub script_path: PathBuf,
    /// Length of the rewritten program, library excluded
    pub rewritten_bytes: usize,
    /// `None` when execution was disabled
    pub status: Option<ExitStatus>,
}

pub fn read_source(path: &Path) -> Result<String, HarnessError> {
    fs::read_to_string(path).map_err(|source| HarnessError::source_read(path.to_path_buf(), source))
}

pub fn load_library(path: &Path) -> Result<RuntimeLibrary, HarnessError> {
    let library = RuntimeLibrary::load(path).map_err(|source| HarnessError::LibraryUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let missing = library.missing_symbols();
    if !missing.is_empty() {
        warn!(path = %path.display(), ?missing, "runtime library does not mention required symbols");
    }
    Ok(library)
}

/// Rewrite the source, append the library and write the script.
/// Returns the script path and the rewritten program's length.
pub fn build_script(config: &Config) -> Result<(PathBuf, usize), HarnessError> {
    let source = read_source(&config.source)?;
    info!(path = %config.source.display(), bytes = source.len(), "read stu source");

    let rewritten = Rewriter::standard().rewrite(&source);
    let library = load_library(&config.library)?;

    let script_path = derive_script_path(&config.source);
    if script_path == config.source {
        return Err(HarnessError::ScriptOverwritesSource { path: script_path });
    }

    let combined = assemble(&rewritten, library.text());
    persist(&combined, &script_path)?;
    info!(script = %script_path.display(), "generated host script");

    Ok((script_path, rewritten.len()))
}

/// Build the script and, unless disabled, run it to completion
pub fn run(config: &Config) -> Result<RunReport, HarnessError> {
    let (script_path, rewritten_bytes) = build_script(config)?;

    let status = if config.execute {
        let interpreter = locate_interpreter(&config.interpreter)?;
        Some(execute(&interpreter, &script_path)?)
    } else {
        None
    };

    Ok(RunReport {
        script_path,
        rewritten_bytes,
        status,
    })
}
