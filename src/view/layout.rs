//! Placement of text and decorations inside the window
//!
//! Everything here is pure arithmetic on pixel sizes so it can be tested
//! without a window or a font.

use crate::theme::{Motif, MotifAnchor};

/// Gap between the clock and the window edge, in logical pixels
pub const CLOCK_MARGIN: f64 = 10.0;

/// Gap between the prompt and the error line below it, in logical pixels
pub const ERROR_GAP: f64 = 8.0;

/// A rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Top-left position that centers `content` in `area`.
///
/// Content larger than the area is pinned to the left/top edge.
pub fn centered(content: Size, area: Size) -> (usize, usize) {
    (
        area.width.saturating_sub(content.width) / 2,
        area.height.saturating_sub(content.height) / 2,
    )
}

/// Top-left position that places `content` in the top-right corner, `margin` pixels in
pub fn top_right(content: Size, area: Size, margin: usize) -> (usize, usize) {
    (
        area.width.saturating_sub(content.width + margin),
        margin,
    )
}

/// Squares of one motif row in physical pixels.
///
/// `width`/`height` are the logical window size; `scale` converts to physical.
pub fn motif_squares(motif: &Motif, width: f64, height: f64, scale: f64) -> Vec<Rect> {
    let size = (motif.size as f64 * scale) as f32;
    (0..motif.count)
        .map(|i| {
            let step = (i * motif.spacing) as f64;
            let (x, y) = match motif.anchor {
                MotifAnchor::TopLeft => (motif.offset_x as f64 + step, motif.offset_y as f64),
                MotifAnchor::BottomRight => (
                    width - motif.offset_x as f64 - step,
                    height - motif.offset_y as f64,
                ),
            };
            Rect::new((x * scale) as f32, (y * scale) as f32, size, size)
        })
        .collect()
}
