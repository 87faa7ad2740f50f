//! scaff's main application entry point.
//! Parses the command line and runs the requested command against the local
//! filesystem and the current working directory.

use std::io::IsTerminal;

use scaff::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    fs::LocalFileSystem,
    logger::init_logger,
    prompt::{DialoguerPrompter, Prompter, ReaderPrompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn get_prompter() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(ReaderPrompter::new(std::io::stdin().lock(), std::io::stdout()))
    }
}

fn run(args: Args) -> Result<()> {
    let fs = LocalFileSystem::new();
    let prompter = get_prompter();
    let working_dir = std::env::current_dir()?.to_string_lossy().into_owned();

    scaff::run(
        &args.command,
        &args.variables,
        &fs,
        &*prompter,
        &working_dir,
        std::env::consts::OS,
    )
}
