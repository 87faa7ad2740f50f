//! Command-line interface implementation for scaff.
//! Provides argument parsing and help text formatting using clap.

use crate::error::USAGE_EXIT_CODE;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::ffi::OsString;

const AFTER_HELP: &str = r#"scaff works its way up the directory tree from the current working directory, searching for a scaff.json file that declares the requested command (if several commands share a name, the first one declared is used).

Variables needed by the command can be given as arguments, for example:

    var1=myValue
    var2="my longer value"

Any variable that is needed but not given is prompted for.

Options must come before the first variable; everything after it is read as a variable."#;

/// Command-line arguments structure for scaff.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Creates directories and files in the current working directory, based on the commands defined in scaff.json files",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Name of the command (in a scaff.json file) that defines the files and directories to create
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Variables used by the command, each written as name=value
    #[arg(value_name = "VARIABLES", trailing_var_arg = true, allow_hyphen_values = true)]
    pub variables: Vec<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rewrites any spelling of `--help` (`--HELP`, `--Help`, ...) in the first
/// argument to the form clap recognises. Later arguments are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| match arg.to_str() {
            Some(s) if index == 1 && s.eq_ignore_ascii_case("--help") => OsString::from("--help"),
            _ => arg,
        })
        .collect()
}

/// Parses `args` (program name first) into [`Args`].
///
/// # Errors
/// * clap's error for `--help`, `--version` and malformed command lines
/// * `UnknownArgument` for an option given after the first variable
pub fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = Args::try_parse_from(normalize_args(args))?;

    if let Some(option) = args.variables.iter().find(|variable| variable.starts_with('-')) {
        return Err(Args::command().error(
            ErrorKind::UnknownArgument,
            format!("unexpected argument '{option}': options must come before the first variable"),
        ));
    }
    Ok(args)
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if no command name is given
/// * With clap's default handling for `--help`, `--version` and other argument errors
pub fn get_args() -> Args {
    match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("please provide the name of the command to process (or use '--help')");
                std::process::exit(USAGE_EXIT_CODE);
            } else {
                e.exit();
            }
        }
    }
}
