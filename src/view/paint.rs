//! Paint popup chrome into an ARGB framebuffer
//!
//! Fills the background, the 1px border and the selected row highlight.
//! Text is drawn by the host's glyph renderer afterwards, using
//! [`PopupGeometry::row_bounds`] for placement.

use crate::overlay::{fill_rect, render_overlay_border};
use crate::theme::PopupTheme;

use super::{PopupFrame, PopupGeometry};

/// Paint the popup for `frame` at `geometry`
pub fn paint_popup<C>(
    buffer: &mut [u32],
    buffer_width: usize,
    buffer_height: usize,
    geometry: &PopupGeometry,
    frame: &PopupFrame<C>,
    theme: &PopupTheme,
) {
    fill_rect(
        buffer,
        &geometry.bounds,
        theme.background.to_argb_u32(),
        buffer_width,
        buffer_height,
    );

    if let PopupFrame::List { .. } = frame {
        let selected = frame.visible_rows().iter().position(|row| row.is_selected());
        if let Some(visual_row) = selected.filter(|&row| row < geometry.row_slots) {
            fill_rect(
                buffer,
                &geometry.row_bounds(visual_row),
                theme.selection_background.to_argb_u32(),
                buffer_width,
                buffer_height,
            );
        }
    }

    render_overlay_border(
        buffer,
        &geometry.bounds,
        theme.border.to_argb_u32(),
        buffer_width,
        buffer_height,
    );
}
