//! Command lookup.
//!
//! Starting from a directory, the resolver walks up towards the filesystem
//! root looking for configuration files. Each file found is searched for the
//! requested command, then its children are searched depth-first in
//! declaration order. The first match wins.

use crate::config::{Command, ConfigurationFile};
use crate::constants::WINDOWS_OS;
use crate::error::{Result, ValidationError};
use crate::fs::FileSystem;
use crate::paths;
use log::debug;

/// A command together with the absolute directory holding its templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub command: Command,
    pub template_root: String,
}

/// Finds commands declared in configuration files.
pub struct Resolver<'a> {
    fs: &'a dyn FileSystem,
    os: &'a str,
}

impl<'a> Resolver<'a> {
    /// `os` is compared against `"windows"`: every other value gets a leading
    /// separator on the directory paths rebuilt during the upward walk.
    pub fn new(fs: &'a dyn FileSystem, os: &'a str) -> Self {
        Self { fs, os }
    }

    /// Looks for `command_name` in files called `config_file_name`, from
    /// `start_dir` up to the root.
    ///
    /// Returns `Ok(None)` when no file declares the command. The first broken or
    /// unreadable file ends the search with an error, even if a directory
    /// further up would have matched.
    pub fn find(
        &self,
        command_name: &str,
        config_file_name: &str,
        start_dir: &str,
    ) -> Result<Option<ResolvedCommand>> {
        let prefix = if self.os == WINDOWS_OS { "" } else { "/" };
        let segments = paths::split_segments(start_dir);

        for depth in (1..=segments.len()).rev() {
            let dir = paths::join(&segments[..depth]);
            let candidate = paths::join(&[prefix, dir.as_str(), config_file_name]);

            if !self.fs.exists(&candidate) {
                continue;
            }

            debug!("Searching '{candidate}' for command '{command_name}'");
            let mut ancestors = Vec::new();
            if let Some(found) = self.search_file(&candidate, command_name, &mut ancestors)? {
                debug!("Found command '{command_name}' in '{candidate}'");
                return Ok(Some(found));
            }
        }

        debug!("Command '{command_name}' was not found above '{start_dir}'");
        Ok(None)
    }

    /// Searches one configuration file and, recursively, its children.
    ///
    /// `ancestors` holds the files currently being searched above this one.
    fn search_file(
        &self,
        file_path: &str,
        command_name: &str,
        ancestors: &mut Vec<String>,
    ) -> Result<Option<ResolvedCommand>> {
        let containing_dir = paths::containing_dir(file_path);

        let contents = self.fs.read_file(file_path)?;
        let mut config = ConfigurationFile::parse(&contents, file_path)?;

        if let Some(index) = config.position_of(command_name) {
            let command = config.commands.swap_remove(index);
            let template_root =
                paths::join(&[containing_dir, command.template_directory_path.as_str()]);
            return Ok(Some(ResolvedCommand { command, template_root }));
        }

        config.validate_children()?;

        ancestors.push(paths::clean(file_path));
        for child in &config.children {
            let child_path = paths::join(&[containing_dir, child.as_str()]);

            if !self.fs.exists(&child_path) {
                return Err(ValidationError::new(format!(
                    "unable to locate child scaff file at path: '{child_path}'"
                ))
                .into());
            }

            if ancestors.contains(&child_path) {
                return Err(ValidationError::new(format!(
                    "encountered a circular reference to child scaff file at path: '{child_path}'"
                ))
                .into());
            }

            debug!("Searching child file '{child_path}'");
            if let Some(found) = self.search_file(&child_path, command_name, ancestors)? {
                return Ok(Some(found));
            }
        }
        ancestors.pop();

        Ok(None)
    }
}
