//! Filesystem access used by command resolution, validation and creation.
//! Everything goes through the [`FileSystem`] trait so callers can swap in
//! an in-memory implementation.

use log::trace;
use std::fs;
use std::io;

/// Result of inspecting a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathStat {
    pub exists: bool,
    pub is_dir: bool,
}

impl PathStat {
    pub fn file() -> Self {
        Self { exists: true, is_dir: false }
    }

    pub fn dir() -> Self {
        Self { exists: true, is_dir: true }
    }
}

/// Trait for the filesystem operations scaff needs.
pub trait FileSystem {
    /// Reads the whole file at `path`.
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Inspects `path`. An error means the path is missing or inaccessible.
    fn stat_path(&self, path: &str) -> io::Result<PathStat>;

    /// Creates a single directory. The parent must already exist.
    fn create_dir(&self, path: &str) -> io::Result<()>;

    /// Writes `contents` to `path`, replacing anything already there.
    fn write_file(&self, path: &str, contents: &[u8]) -> io::Result<()>;

    /// True when `path` can be stat'ed and reports itself as existing.
    fn exists(&self, path: &str) -> bool {
        matches!(self.stat_path(path), Ok(stat) if stat.exists)
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        trace!("Reading '{path}'");
        fs::read(path)
    }

    fn stat_path(&self, path: &str) -> io::Result<PathStat> {
        let metadata = fs::metadata(path)?;
        Ok(PathStat { exists: true, is_dir: metadata.is_dir() })
    }

    fn create_dir(&self, path: &str) -> io::Result<()> {
        trace!("Creating directory '{path}'");
        fs::create_dir(path)
    }

    fn write_file(&self, path: &str, contents: &[u8]) -> io::Result<()> {
        trace!("Writing '{path}'");
        fs::write(path, contents)
    }
}
