//! Insertion-ordered, read-only directory tree.
//!
//! Directories are stored as a flat list keyed by path. Lookups are linear;
//! the portfolio tree holds a handful of entries.

use kode_types::error::{KodeError, Result};

use crate::{DirEntry, Entry, ROOT};

#[derive(Debug, Clone)]
struct Directory {
    path: String,
    entries: Vec<DirEntry>,
}

/// A validated, immutable virtual file system.
#[derive(Debug, Clone)]
pub struct StaticVfs {
    dirs: Vec<Directory>,
}

/// Join a directory path and an entry name.
pub fn join(dir: &str, name: &str) -> String {
    format!("{dir}/{name}")
}

/// Return the parent of a path. The root is its own parent.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..i],
        None => ROOT,
    }
}

impl StaticVfs {
    /// Start describing a tree.
    pub fn builder() -> VfsBuilder {
        VfsBuilder::default()
    }

    fn dir(&self, path: &str) -> Option<&Directory> {
        self.dirs.iter().find(|d| d.path == path)
    }

    /// Whether `path` names a directory.
    pub fn is_dir(&self, path: &str) -> bool {
        self.dir(path).is_some()
    }

    /// Entries of a directory, in insertion order.
    pub fn readdir(&self, path: &str) -> Result<&[DirEntry]> {
        self.dir(path)
            .map(|d| d.entries.as_slice())
            .ok_or_else(|| KodeError::Vfs(format!("no such directory: {path}")))
    }

    /// Look up a single entry of a directory.
    pub fn lookup(&self, dir: &str, name: &str) -> Option<&Entry> {
        self.dir(dir)?
            .entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.entry)
    }

    /// Read a file's contents.
    pub fn read(&self, dir: &str, name: &str) -> Result<&str> {
        match self.lookup(dir, name) {
            Some(Entry::File(text)) => Ok(text),
            Some(Entry::Dir) => Err(KodeError::Vfs(format!(
                "is a directory: {}",
                join(dir, name)
            ))),
            None => Err(KodeError::Vfs(format!(
                "no such file: {}",
                join(dir, name)
            ))),
        }
    }

    /// Number of directories, root included.
    pub fn dir_count(&self) -> usize {
        self.dirs.len()
    }
}

/// Collects directories and entries, then validates them into a
/// [`StaticVfs`].
#[derive(Debug, Default)]
pub struct VfsBuilder {
    dirs: Vec<Directory>,
}

impl VfsBuilder {
    fn dir_mut(&mut self, path: &str) -> &mut Directory {
        if let Some(i) = self.dirs.iter().position(|d| d.path == path) {
            return &mut self.dirs[i];
        }
        self.dirs.push(Directory {
            path: path.to_string(),
            entries: Vec::new(),
        });
        let last = self.dirs.len() - 1;
        &mut self.dirs[last]
    }

    /// Declare a directory (idempotent). Declaring it is needed for empty
    /// directories; adding an entry declares its parent implicitly.
    pub fn dir(mut self, path: &str) -> Self {
        self.dir_mut(path);
        self
    }

    /// Add a text file to `dir`.
    pub fn file(mut self, dir: &str, name: &str, contents: impl Into<String>) -> Self {
        self.dir_mut(dir).entries.push(DirEntry {
            name: name.to_string(),
            entry: Entry::File(contents.into()),
        });
        self
    }

    /// Add a subdirectory marker to `dir` and declare the subdirectory.
    pub fn subdir(mut self, dir: &str, name: &str) -> Self {
        self.dir_mut(dir).entries.push(DirEntry {
            name: name.to_string(),
            entry: Entry::Dir,
        });
        let child = join(dir, name);
        self.dir_mut(&child);
        self
    }

    /// Add a subdirectory marker without declaring the subdirectory.
    ///
    /// Only useful to describe trees that must fail validation.
    pub fn dangling_marker(mut self, dir: &str, name: &str) -> Self {
        self.dir_mut(dir).entries.push(DirEntry {
            name: name.to_string(),
            entry: Entry::Dir,
        });
        self
    }

    /// Validate and freeze the tree.
    ///
    /// Fails when the root is missing, a name repeats inside a directory, or
    /// a directory marker has no matching directory.
    pub fn build(self) -> Result<StaticVfs> {
        if !self.dirs.iter().any(|d| d.path == ROOT) {
            return Err(KodeError::Vfs(format!("missing root directory {ROOT}")));
        }
        for dir in &self.dirs {
            for (i, entry) in dir.entries.iter().enumerate() {
                if dir.entries[..i].iter().any(|e| e.name == entry.name) {
                    return Err(KodeError::Vfs(format!(
                        "duplicate entry: {}",
                        join(&dir.path, &entry.name)
                    )));
                }
                if entry.entry == Entry::Dir {
                    let child = join(&dir.path, &entry.name);
                    if !self.dirs.iter().any(|d| d.path == child) {
                        return Err(KodeError::Vfs(format!("dangling directory: {child}")));
                    }
                }
            }
        }
        log::debug!("VFS built with {} directories", self.dirs.len());
        Ok(StaticVfs { dirs: self.dirs })
    }
}
