//! Popup geometry - pixel layout of the popup and its rows
//!
//! The popup origin comes from the host (caret anchoring is the editor's
//! concern); everything else derives from the config and the row count.

use crate::config::SuggestConfig;
use crate::overlay::{OverlayBounds, PopupWidth};

/// Pixel layout of a mounted popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupGeometry {
    /// Outer bounds including border and padding
    pub bounds: OverlayBounds,
    /// Padding between border and rows
    pub padding: usize,
    /// Height of a single row
    pub row_height: usize,
    /// Row slots laid out (visible rows, or one for the empty placeholder)
    pub row_slots: usize,
}

impl PopupGeometry {
    /// Lay out a popup at `origin` with `row_slots` rows
    ///
    /// `row_slots` is the size of the scroll window, which the caller takes
    /// from the renderer's viewport so layout and scrolling agree. At least
    /// one slot is always laid out.
    pub fn new(
        origin: (usize, usize),
        width: PopupWidth,
        row_slots: usize,
        config: &SuggestConfig,
    ) -> Self {
        let row_slots = row_slots.max(1);
        let row_height = config.row_height.max(1);
        let height = row_slots * row_height + config.padding * 2;
        Self {
            bounds: OverlayBounds::new(origin.0, origin.1, config.width_px(width), height),
            padding: config.padding,
            row_height,
            row_slots,
        }
    }

    /// Bounds of the row at `visual_row` within the scroll window
    pub fn row_bounds(&self, visual_row: usize) -> OverlayBounds {
        OverlayBounds::new(
            self.bounds.x + self.padding,
            self.bounds.y + self.padding + visual_row * self.row_height,
            self.bounds.width.saturating_sub(self.padding * 2),
            self.row_height,
        )
    }

    /// Visual row under a point, if the point is on a row
    pub fn visual_row_at(&self, px: usize, py: usize) -> Option<usize> {
        if self.row_height == 0 {
            return None;
        }
        let rows_top = self.bounds.y + self.padding;
        let rows_area = OverlayBounds::new(
            self.bounds.x + self.padding,
            rows_top,
            self.bounds.width.saturating_sub(self.padding * 2),
            self.row_slots * self.row_height,
        );
        if !rows_area.contains(px, py) {
            return None;
        }
        Some((py - rows_top) / self.row_height)
    }
}
