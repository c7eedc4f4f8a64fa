//! Submitted-line history with an Up/Down cursor.

/// What the input field should show after a cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Load this history entry.
    Entry(&'a str),
    /// The cursor moved past the newest entry: clear the field.
    Blank,
    /// The cursor did not move; leave the field alone.
    Unchanged,
}

/// Every submitted non-empty line, oldest first.
///
/// The cursor ranges over `0..=len`; `len` is the past-the-end position
/// meaning "new entry".
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and move the cursor past it. Blank lines
    /// are ignored and leave the cursor where it was; repeats are kept.
    pub fn push(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        self.entries.push(trimmed.to_string());
        self.reset_cursor();
    }

    /// Move the cursor to the past-the-end position.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Step to the previous (older) entry. Stops at the oldest.
    pub fn up(&mut self) -> Recall<'_> {
        if self.cursor == 0 {
            return Recall::Unchanged;
        }
        self.cursor -= 1;
        Recall::Entry(&self.entries[self.cursor])
    }

    /// Step to the next (newer) entry, or past the newest to a blank line.
    pub fn down(&mut self) -> Recall<'_> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            Recall::Entry(&self.entries[self.cursor])
        } else {
            self.cursor = self.entries.len();
            Recall::Blank
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
