//! Overlay drawing primitives for the suggestion popup
//!
//! Provides popup bounds and the pixel operations used to paint popup chrome
//! (background, border, row highlight) into an ARGB framebuffer. Glyphs are
//! drawn by the host on top of this.

/// Width class of a popup; resolved to pixels through the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupWidth {
    /// Command menus (short titles with an icon)
    #[default]
    Narrow,
    /// Note references (title plus a preview line)
    Wide,
}

/// Computed overlay bounds (screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayBounds {
    /// X position in pixels
    pub x: usize,
    /// Y position in pixels
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl OverlayBounds {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the right edge X coordinate
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Whether a point lies inside the bounds
    pub fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Blend a source pixel (with alpha) onto a destination pixel
///
/// Both colors are in ARGB format. The source alpha determines
/// the blend ratio.
#[inline]
pub fn blend_pixel(src: u32, dst: u32) -> u32 {
    let alpha = (src >> 24) & 0xFF;
    if alpha == 0 {
        return dst;
    }
    if alpha == 255 {
        return src | 0xFF000000;
    }

    let inv_alpha = 255 - alpha;

    let r = ((((src >> 16) & 0xFF) * alpha + ((dst >> 16) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let g = ((((src >> 8) & 0xFF) * alpha + ((dst >> 8) & 0xFF) * inv_alpha) / 255) & 0xFF;
    let b = (((src & 0xFF) * alpha + (dst & 0xFF) * inv_alpha) / 255) & 0xFF;

    0xFF000000 | (r << 16) | (g << 8) | b
}

/// Blend a filled rectangle into the framebuffer, clipped to its size
pub fn fill_rect(
    buffer: &mut [u32],
    bounds: &OverlayBounds,
    color: u32,
    buffer_width: usize,
    buffer_height: usize,
) {
    let y_end = bounds.bottom().min(buffer_height);
    let x_end = bounds.right().min(buffer_width);

    for py in bounds.y..y_end {
        for px in bounds.x..x_end {
            let idx = py * buffer_width + px;
            if idx < buffer.len() {
                buffer[idx] = blend_pixel(color, buffer[idx]);
            }
        }
    }
}

/// Render a 1px border around overlay bounds
pub fn render_overlay_border(
    buffer: &mut [u32],
    bounds: &OverlayBounds,
    border_color: u32,
    buffer_width: usize,
    buffer_height: usize,
) {
    let y_end = bounds.bottom().min(buffer_height);
    let x_end = bounds.right().min(buffer_width);
    let color = border_color | 0xFF000000;

    let mut put = |px: usize, py: usize| {
        let idx = py * buffer_width + px;
        if idx < buffer.len() {
            buffer[idx] = color;
        }
    };

    // Top edge
    if bounds.y < buffer_height {
        for px in bounds.x..x_end {
            put(px, bounds.y);
        }
    }

    // Bottom edge
    let bottom_y = y_end.saturating_sub(1);
    if bottom_y > bounds.y && bottom_y < buffer_height {
        for px in bounds.x..x_end {
            put(px, bottom_y);
        }
    }

    // Left edge
    if bounds.x < buffer_width {
        for py in bounds.y..y_end {
            put(bounds.x, py);
        }
    }

    // Right edge
    let right_x = x_end.saturating_sub(1);
    if right_x > bounds.x && right_x < buffer_width {
        for py in bounds.y..y_end {
            put(right_x, py);
        }
    }
}
