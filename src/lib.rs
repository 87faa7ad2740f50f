//! scaff creates directory and file trees from named commands declared in
//! `scaff.json` files, filling names and file contents from templates and
//! user-supplied variables.

/// Resolve, validate and create flow of a single invocation
pub mod app;

/// Command-line interface module for the scaff application
pub mod cli;

/// Configuration file model and structural validation
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the scaff application
pub mod error;

/// Filesystem access behind a replaceable trait
pub mod fs;

/// Logger setup for the binary
pub mod logger;

/// Slash-separated path helpers used for configuration-relative paths
pub mod paths;

/// Creation of the files and directories described by a command
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Upward search for the configuration file declaring a command
pub mod resolver;

/// Variable maps and `{: name :}` tag substitution
pub mod variable;

pub use app::run;
