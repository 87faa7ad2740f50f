//! The flow behind a single `scaff` invocation, independent of the process
//! environment so it can run against any [`FileSystem`] and [`Prompter`].

use crate::constants::CONFIG_FILE;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::processor::Processor;
use crate::prompt::Prompter;
use crate::resolver::Resolver;
use crate::variable::{map_from_args, Populator};
use log::{debug, info};

/// Finds, validates and creates the command called `command_name`.
///
/// # Flow
/// 1. Builds the variable map from the `name=value` arguments
/// 2. Finds the command, walking up from `working_dir`
/// 3. Validates the command, reporting every problem at once
/// 4. Refuses to continue if any top-level target already exists
/// 5. Creates the files and directories
///
/// # Errors
/// * `CommandNotFound` if no configuration file declares the command
/// * `ValidationErrors` with every problem found; nothing is created
/// * `ExistingPaths` listing the targets that already exist; nothing is created
pub fn run<S: AsRef<str>>(
    command_name: &str,
    variables: &[S],
    fs: &dyn FileSystem,
    prompter: &dyn Prompter,
    working_dir: &str,
    os: &str,
) -> Result<()> {
    let populator = Populator::new(prompter);
    let mut vars = map_from_args(variables);
    debug!("Working directory: '{working_dir}', variables: {vars:?}");

    let resolved = Resolver::new(fs, os)
        .find(command_name, CONFIG_FILE, working_dir)?
        .ok_or_else(|| Error::CommandNotFound { name: command_name.to_string() })?;
    info!("Using templates from '{}'", resolved.template_root);

    let errors = resolved.command.validate(&resolved.template_root, fs);
    if !errors.is_empty() {
        return Err(Error::ValidationErrors(errors));
    }

    let processor = Processor::new(fs, &populator, &resolved.template_root, working_dir);

    let existing = processor.existing_paths(&resolved.command, &mut vars)?;
    if !existing.is_empty() {
        return Err(Error::ExistingPaths(existing));
    }

    processor.process(&resolved.command, &mut vars)?;
    info!("Command '{command_name}' completed in '{working_dir}'");
    Ok(())
}
