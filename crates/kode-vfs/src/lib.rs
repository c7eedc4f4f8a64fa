//! Static virtual file system for the KODE_OS terminal.
//!
//! The tree is defined once at startup and is read-only afterwards. Paths are
//! home-relative strings (`~`, `~/projects`); each directory keeps its entries
//! in insertion order so listings are deterministic.

mod tree;

pub use tree::{StaticVfs, VfsBuilder, join, parent};

/// Path of the root (home) directory.
pub const ROOT: &str = "~";

/// What a directory entry holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A text file and its contents.
    File(String),
    /// A marker for a subdirectory; the directory itself is keyed by
    /// `join(parent, name)`.
    Dir,
}

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A named entry inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub entry: Entry,
}

impl DirEntry {
    /// File or directory.
    pub fn kind(&self) -> EntryKind {
        match self.entry {
            Entry::File(_) => EntryKind::File,
            Entry::Dir => EntryKind::Directory,
        }
    }
}
