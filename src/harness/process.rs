//! Locating and running the host interpreter

use super::errors::HarnessError;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

/// Interpreter looked up when none is configured
pub const DEFAULT_INTERPRETER: &str = "node";

/// Resolve `name` against `PATH`. A name with a directory part is checked
/// as given.
pub fn locate_interpreter(name: &str) -> Result<PathBuf, HarnessError> {
    let search_path = env::var_os("PATH");
    locate_in(name, search_path.as_deref()).ok_or_else(|| HarnessError::InterpreterNotFound {
        name: name.to_string(),
    })
}

/// Resolve `name` against an explicit search path
pub fn locate_in(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    let candidate = Path::new(name);
    if candidate.is_absolute() || candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    env::split_paths(search_path?)
        .flat_map(|dir| executable_names(name).into_iter().map(move |n| dir.join(n)))
        .find(|path| is_executable(path))
}

#[cfg(windows)]
fn executable_names(name: &str) -> Vec<String> {
    vec![name.to_string(), format!("{}.exe", name)]
}

#[cfg(not(windows))]
fn executable_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Run `interpreter script` with inherited stdio and wait for it to exit.
///
/// The exit status is returned as-is; a failing program is not an error.
pub fn execute(interpreter: &Path, script: &Path) -> Result<ExitStatus, HarnessError> {
    info!(interpreter = %interpreter.display(), script = %script.display(), "starting interpreter");
    let status = Command::new(interpreter)
        .arg(script)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| HarnessError::Spawn {
            program: interpreter.to_path_buf(),
            source,
        })?;
    debug!(%status, "interpreter exited");
    Ok(status)
}
