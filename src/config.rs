//! Configuration handling for scaff.
//! This module defines the `scaff.json` document model and the structural
//! validation applied to it before anything is created.

use crate::error::ValidationError;
use crate::fs::FileSystem;
use crate::paths;
use log::debug;
use serde::Deserialize;

const BLANK_TEMPLATE_DIRECTORY_PATH: &str =
    "command objects should have a 'templateDirectoryPath' property that is set to a non-empty value";
const BLANK_FILE_NAME: &str =
    "file scaffold objects should have a 'name' property that is set to a non-empty value";
const BLANK_TEMPLATE_PATH: &str =
    "file scaffold objects should have a 'templatePath' property that is set to a non-empty value";
const BLANK_DIRECTORY_NAME: &str =
    "directory scaffold objects should have a 'name' property that is set to a non-empty value";
const BLANK_CHILD_PATH: &str = "encountered an empty file path for a child scaff file";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Root document of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigurationFile {
    pub commands: Vec<Command>,
    /// Paths of further configuration files, relative to this file's directory
    pub children: Vec<String>,
}

/// A named set of files and directories to create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Command {
    pub name: String,
    /// Relative to the directory of the declaring configuration file
    pub template_directory_path: String,
    pub files: Vec<FileScaffold>,
    pub directories: Vec<DirectoryScaffold>,
}

/// A file to create from a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileScaffold {
    /// Target file name, may contain variable tags
    pub name: String,
    /// Relative to the command's template root
    pub template_path: String,
}

/// A directory to create, with its own nested files and directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DirectoryScaffold {
    /// Target directory name, may contain variable tags
    pub name: String,
    pub files: Vec<FileScaffold>,
    pub directories: Vec<DirectoryScaffold>,
}

impl ConfigurationFile {
    /// Parses the contents of the configuration file read from `path`.
    ///
    /// # Errors
    /// * `ValidationError` naming `path` if the contents are not a valid configuration
    pub fn parse(contents: &[u8], path: &str) -> Result<Self, ValidationError> {
        serde_json::from_slice(contents).map_err(|e| {
            debug!("Failed to parse '{path}': {e}");
            ValidationError::new(format!(
                "encountered a scaff.json file with an invalid structure: '{path}'"
            ))
        })
    }

    /// Index of the first command called `name`, in declaration order.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|command| command.name == name)
    }

    /// Checks that no child path is blank. Stops at the first blank entry.
    pub fn validate_children(&self) -> Result<(), ValidationError> {
        if self.children.iter().any(|child| is_blank(child)) {
            return Err(ValidationError::new(BLANK_CHILD_PATH));
        }
        Ok(())
    }
}

impl Command {
    /// Validates the command and everything in it.
    ///
    /// `template_root` must already be resolved: `template_directory_path` is
    /// relative to the configuration file, not to the working directory.
    pub fn validate(&self, template_root: &str, fs: &dyn FileSystem) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.template_directory_path) {
            errors.push(ValidationError::new(BLANK_TEMPLATE_DIRECTORY_PATH));
        }

        validate_entries(&self.files, &self.directories, template_root, fs, &mut errors);
        errors
    }
}

impl FileScaffold {
    /// Location of this file's template under `template_root`.
    pub fn full_template_path(&self, template_root: &str) -> String {
        paths::join(&[template_root, self.template_path.as_str()])
    }

    /// Validates the name and template path, and that the template exists.
    pub fn validate(&self, template_root: &str, fs: &dyn FileSystem) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(ValidationError::new(BLANK_FILE_NAME));
        }

        if is_blank(&self.template_path) {
            errors.push(ValidationError::new(BLANK_TEMPLATE_PATH));
        } else {
            let full_path = self.full_template_path(template_root);
            if !fs.exists(&full_path) {
                errors.push(ValidationError::new(format!(
                    "unable to locate template file at path: '{full_path}'"
                )));
            }
        }

        errors
    }
}

impl DirectoryScaffold {
    /// Validates the name, then every nested file and directory against the same template root.
    pub fn validate(&self, template_root: &str, fs: &dyn FileSystem) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(ValidationError::new(BLANK_DIRECTORY_NAME));
        }

        validate_entries(&self.files, &self.directories, template_root, fs, &mut errors);
        errors
    }
}

fn validate_entries(
    files: &[FileScaffold],
    directories: &[DirectoryScaffold],
    template_root: &str,
    fs: &dyn FileSystem,
    errors: &mut Vec<ValidationError>,
) {
    for file in files {
        errors.extend(file.validate(template_root, fs));
    }
    for directory in directories {
        errors.extend(directory.validate(template_root, fs));
    }
}
