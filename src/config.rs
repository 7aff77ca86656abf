//! Command-line and environment configuration
//!
//! Flags take precedence over environment variables, which take precedence
//! over the built-in defaults.

use crate::harness::process::DEFAULT_INTERPRETER;
use crate::runtime::library::DEFAULT_LIBRARY_FILE;
use std::path::PathBuf;
use thiserror::Error;

/// Runtime library path override
pub const LIBRARY_ENV: &str = "STU_LIB";

/// Interpreter name or path override
pub const INTERPRETER_ENV: &str = "STU_INTERPRETER";

/// Settings for one adapt-and-run pass over a stu file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub library: PathBuf,
    pub interpreter: String,
    /// Run the generated script after writing it
    pub execute: bool,
}

impl Config {
    /// Defaults for `source`
    pub fn for_source(source: impl Into<PathBuf>) -> Self {
        Config {
            source: source.into(),
            library: PathBuf::from(DEFAULT_LIBRARY_FILE),
            interpreter: DEFAULT_INTERPRETER.to_string(),
            execute: true,
        }
    }
}

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Panel,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no input file provided")]
    MissingSource,

    #[error("option '{flag}' needs a value")]
    MissingValue { flag: String },

    #[error("unknown option '{flag}'")]
    UnknownFlag { flag: String },

    #[error("unexpected argument '{arg}'")]
    UnexpectedArgument { arg: String },
}

/// Parse arguments (program name excluded), reading fallbacks through `env`
pub fn parse_args<I, E>(args: I, env: E) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = String>,
    E: Fn(&str) -> Option<String>,
{
    let mut source: Option<PathBuf> = None;
    let mut library: Option<PathBuf> = None;
    let mut interpreter: Option<String> = None;
    let mut execute = true;
    let mut panel = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "--panel" => panel = true,
            "--no-run" => execute = false,
            "--lib" | "--interpreter" => {
                let value = args
                    .next()
                    .ok_or_else(|| UsageError::MissingValue { flag: arg.clone() })?;
                if arg == "--lib" {
                    library = Some(PathBuf::from(value));
                } else {
                    interpreter = Some(value);
                }
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(UsageError::UnknownFlag {
                    flag: flag.to_string(),
                });
            }
            _ if source.is_none() => source = Some(PathBuf::from(&arg)),
            _ => return Err(UsageError::UnexpectedArgument { arg: arg.clone() }),
        }
    }

    if panel {
        return match source {
            Some(path) => Err(UsageError::UnexpectedArgument {
                arg: path.display().to_string(),
            }),
            None => Ok(Invocation::Panel),
        };
    }

    let mut config = Config::for_source(source.ok_or(UsageError::MissingSource)?);
    if let Some(path) = library.or_else(|| env(LIBRARY_ENV).map(PathBuf::from)) {
        config.library = path;
    }
    if let Some(name) = interpreter.or_else(|| env(INTERPRETER_ENV)) {
        config.interpreter = name;
    }
    config.execute = execute;
    Ok(Invocation::Run(config))
}

pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {program} [--lib PATH] [--interpreter NAME] [--no-run] <file.stu>\n\
         \x20      {program} --panel\n\
         \n\
         Rewrites <file.stu> for the host runtime, appends the runtime library,\n\
         writes <file>.js next to it and runs it.\n\
         \n\
         Options:\n\
         \x20 --lib PATH          runtime library (env {lib_env}, default {lib})\n\
         \x20 --interpreter NAME  host interpreter (env {interp_env}, default {interp})\n\
         \x20 --no-run            write the script without running it\n\
         \x20 --panel             interactive seven-segment display and keypad\n\
         \x20 -h, --help          show this help\n",
        program = program_name,
        lib_env = LIBRARY_ENV,
        lib = DEFAULT_LIBRARY_FILE,
        interp_env = INTERPRETER_ENV,
        interp = DEFAULT_INTERPRETER,
    )
}
