#![allow(dead_code)]

use scaff::error::{Error, Result};
use scaff::fs::{FileSystem, PathStat};
use scaff::prompt::Prompter;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::io;

#[derive(Debug, Clone)]
enum Entry {
    File(Vec<u8>),
    Dir,
}

/// In-memory filesystem keyed by exact path strings.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    entries: RefCell<BTreeMap<String, Entry>>,
    read_errors: HashMap<String, String>,
    reads: RefCell<Vec<String>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.entries.borrow_mut().insert(path.to_string(), Entry::File(contents.as_bytes().to_vec()));
        self
    }

    pub fn with_json(self, path: &str, contents: &serde_json::Value) -> Self {
        self.with_file(path, &contents.to_string())
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.entries.borrow_mut().insert(path.to_string(), Entry::Dir);
        self
    }

    /// Registers an existing file whose reads fail with `message`.
    pub fn with_read_error(mut self, path: &str, message: &str) -> Self {
        self.entries.borrow_mut().insert(path.to_string(), Entry::File(Vec::new()));
        self.read_errors.insert(path.to_string(), message.to_string());
        self
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        match self.entries.borrow().get(path) {
            Some(Entry::File(bytes)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    pub fn is_dir(&self, path: &str) -> bool {
        matches!(self.entries.borrow().get(path), Some(Entry::Dir))
    }

    /// Every file and directory currently present, sorted.
    pub fn paths(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Paths passed to `read_file`, in call order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        self.reads.borrow_mut().push(path.to_string());
        if let Some(message) = self.read_errors.get(path) {
            return Err(io::Error::other(message.clone()));
        }
        match self.entries.borrow().get(path) {
            Some(Entry::File(bytes)) => Ok(bytes.clone()),
            Some(Entry::Dir) => Err(io::Error::other(format!("'{path}' is a directory"))),
            None => Err(io::Error::new(io::ErrorKind::NotFound, format!("'{path}' not found"))),
        }
    }

    fn stat_path(&self, path: &str) -> io::Result<PathStat> {
        match self.entries.borrow().get(path) {
            Some(Entry::File(_)) => Ok(PathStat::file()),
            Some(Entry::Dir) => Ok(PathStat::dir()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, format!("'{path}' not found"))),
        }
    }

    fn create_dir(&self, path: &str) -> io::Result<()> {
        let mut entries = self.entries.borrow_mut();
        if entries.contains_key(path) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "file exists"));
        }
        entries.insert(path.to_string(), Entry::Dir);
        Ok(())
    }

    fn write_file(&self, path: &str, contents: &[u8]) -> io::Result<()> {
        self.entries.borrow_mut().insert(path.to_string(), Entry::File(contents.to_vec()));
        Ok(())
    }
}

/// Prompter that hands out queued answers and records every variable asked for.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_variable(&self, name: &str) -> Result<String> {
        self.asked.borrow_mut().push(name.to_string());
        self.answers.borrow_mut().pop_front().ok_or_else(|| Error::PromptError {
            name: name.to_string(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"),
        })
    }
}
