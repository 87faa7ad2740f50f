//! Creation of the files and directories described by a command.

use crate::config::{Command, DirectoryScaffold, FileScaffold};
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::paths;
use crate::variable::{Populator, VariableMap};
use log::debug;

/// Creates a command's tree under the working directory.
pub struct Processor<'a> {
    fs: &'a dyn FileSystem,
    populator: &'a Populator<'a>,
    template_root: &'a str,
    working_dir: &'a str,
}

impl<'a> Processor<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        populator: &'a Populator<'a>,
        template_root: &'a str,
        working_dir: &'a str,
    ) -> Self {
        Self { fs, populator, template_root, working_dir }
    }

    /// Lists the top-level targets of `command` that already exist.
    ///
    /// Files count only when the existing path is a file, directories only when
    /// it is a directory. Nested entries are not checked: they cannot exist if
    /// their top-level directory does not.
    pub fn existing_paths(&self, command: &Command, vars: &mut VariableMap) -> Result<Vec<String>> {
        let mut existing = Vec::new();

        for file in &command.files {
            let path = self.target_path(self.working_dir, &file.name, vars)?;
            if matches!(self.fs.stat_path(&path), Ok(stat) if stat.exists && !stat.is_dir) {
                existing.push(path);
            }
        }

        for directory in &command.directories {
            let path = self.target_path(self.working_dir, &directory.name, vars)?;
            if matches!(self.fs.stat_path(&path), Ok(stat) if stat.exists && stat.is_dir) {
                existing.push(path);
            }
        }

        Ok(existing)
    }

    /// Creates every file, then every directory, of `command`.
    ///
    /// Stops at the first failure; whatever was already created stays in place.
    pub fn process(&self, command: &Command, vars: &mut VariableMap) -> Result<()> {
        debug!("Processing command '{}'", command.name);

        for file in &command.files {
            self.create_file(file, self.working_dir, vars)?;
        }
        for directory in &command.directories {
            self.create_directory(directory, self.working_dir, vars)?;
        }
        Ok(())
    }

    fn create_file(&self, file: &FileScaffold, parent: &str, vars: &mut VariableMap) -> Result<()> {
        let template_path = file.full_template_path(self.template_root);
        let template = self.fs.read_file(&template_path)?;

        let content = self.populator.populate(&String::from_utf8_lossy(&template), vars)?;
        let target = self.target_path(parent, &file.name, vars)?;

        debug!("Writing file '{target}' from template '{template_path}'");
        self.fs.write_file(&target, content.as_bytes())?;
        Ok(())
    }

    fn create_directory(
        &self,
        directory: &DirectoryScaffold,
        parent: &str,
        vars: &mut VariableMap,
    ) -> Result<()> {
        let target = self.target_path(parent, &directory.name, vars)?;

        debug!("Creating directory '{target}'");
        self.fs
            .create_dir(&target)
            .map_err(|source| Error::CreateDirectoryError { path: target.clone(), source })?;

        for file in &directory.files {
            self.create_file(file, &target, vars)?;
        }
        for inner in &directory.directories {
            self.create_directory(inner, &target, vars)?;
        }
        Ok(())
    }

    fn target_path(&self, parent: &str, name: &str, vars: &mut VariableMap) -> Result<String> {
        let name = self.populator.populate(name, vars)?;
        Ok(paths::join(&[parent, name.as_str()]))
    }
}
