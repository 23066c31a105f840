//! Scroll state for the popup's row list

use std::ops::Range;

/// Window of rows currently visible inside the popup's scroll region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListViewport {
    /// Index of the first visible row
    pub offset: usize,
    /// Number of rows that fit in the scroll region
    pub visible_rows: usize,
}

impl ListViewport {
    /// A window of at least one row
    pub fn new(visible_rows: usize) -> Self {
        Self {
            offset: 0,
            visible_rows: visible_rows.max(1),
        }
    }

    /// Scroll just enough to bring `index` into view (nearest edge, never centered)
    pub fn reveal(&mut self, index: usize, total: usize) {
        if self.visible_rows == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.visible_rows {
            self.offset = index + 1 - self.visible_rows;
        }
        self.clamp(total);
    }

    /// Scroll by whole rows (positive = down), clamped to the content
    pub fn scroll(&mut self, lines: i32, total: usize) {
        if lines < 0 {
            self.offset = self.offset.saturating_sub(lines.unsigned_abs() as usize);
        } else {
            self.offset = self.offset.saturating_add(lines as usize);
        }
        self.clamp(total);
    }

    /// Keep the offset within `[0, total - visible_rows]`
    pub fn clamp(&mut self, total: usize) {
        self.offset = self.offset.min(total.saturating_sub(self.visible_rows));
    }

    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);
        let end = (self.offset + self.visible_rows).min(total);
        start..end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.visible_rows
    }
}
