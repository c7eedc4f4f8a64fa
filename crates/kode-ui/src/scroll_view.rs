//! ScrollView: a row-based scrollable viewport over transcript content.

use std::ops::Range;

/// A scrollable content region measured in text rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollView {
    pub content_rows: usize,
    pub scroll_top: usize,
    pub viewport_rows: usize,
}

impl ScrollView {
    pub fn new(content_rows: usize, viewport_rows: usize) -> Self {
        Self {
            content_rows,
            scroll_top: 0,
            viewport_rows,
        }
    }

    fn max_scroll(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    /// Clamp scroll position to valid range.
    pub fn clamp_scroll(&mut self) {
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    /// Update the content height, keeping the scroll position valid.
    pub fn set_content_rows(&mut self, rows: usize) {
        self.content_rows = rows;
        self.clamp_scroll();
    }

    /// Pin the view to the last row. Idempotent; content shorter than the
    /// viewport stays at the top.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.max_scroll();
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll()
    }

    /// Rows currently inside the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.scroll_top + self.viewport_rows).min(self.content_rows);
        self.scroll_top.min(end)..end
    }
}
