//! Fatal harness errors
//!
//! Each variant names the precondition that failed. A rule that finds
//! nothing to rewrite is not an error, and a child process exiting with a
//! failure status is reported as its [`ExitStatus`](std::process::ExitStatus),
//! not as a [`HarnessError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("source file '{}' not found", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("cannot read source file '{}': {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read runtime library '{}': {source}", .path.display())]
    LibraryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("generated script '{}' would overwrite its own source", .path.display())]
    ScriptOverwritesSource { path: PathBuf },

    #[error("cannot write script '{}': {source}", .path.display())]
    ScriptWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("interpreter '{name}' not found on PATH")]
    InterpreterNotFound { name: String },

    #[error("failed to start '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HarnessError {
    /// Classify a failed source read
    pub fn source_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            HarnessError::SourceNotFound { path }
        } else {
            HarnessError::SourceUnreadable { path, source }
        }
    }
}
