//! Error handling for scaff.
//! Defines the error kinds produced while resolving, validating and creating commands.

use std::io;
use thiserror::Error;

/// Exit code used when no command name was given on the command line.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Exit code used for every runtime failure other than a missing command.
pub const FAILURE_EXIT_CODE: i32 = 2;

/// Exit code used when the requested command could not be found.
pub const NOT_FOUND_EXIT_CODE: i32 = 3;

/// A structural problem in a configuration file or one of its commands.
///
/// Kept separate from [`Error`] so the validators can collect several of them
/// before anything is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }
}

/// Custom error types for scaff operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem failures, reported exactly as the OS produced them.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// A single validation failure that stopped command resolution.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),

    /// Every validation failure found in one pass over a command.
    #[error("{}", join_lines(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// Reading a variable value from the user failed.
    #[error("unable to read a value for variable '{name}': {source}")]
    PromptError {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("unable to find the requested command ('{name}')")]
    CommandNotFound { name: String },

    /// Target paths that already exist; nothing has been created.
    #[error("{}", existing_lines(.0))]
    ExistingPaths(Vec<String>),

    #[error("error while creating directory '{path}': {source}")]
    CreateDirectoryError {
        path: String,
        #[source]
        source: io::Error,
    },
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("\n")
}

fn existing_lines(paths: &[String]) -> String {
    paths.iter().map(|path| format!("path already exists: {path}")).collect::<Vec<_>>().join("\n")
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandNotFound { .. } => NOT_FOUND_EXIT_CODE,
            _ => FAILURE_EXIT_CODE,
        }
    }

    /// True for the validation kinds, which point at a broken configuration
    /// rather than a failing filesystem.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::ValidationError(_) | Error::ValidationErrors(_))
    }
}

/// Convenience type alias for Results with scaff's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with [`Error::exit_code`].
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
