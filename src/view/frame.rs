//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use fontdue::Font;

use super::layout::{Rect, Size};
use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let height = if actual_size < expected_size && width > 0 {
            actual_size / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1.max(x0)].fill(color);
        }
    }

    /// Blend a pixel with alpha (ARGB format, alpha in high byte)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = y * self.width + x;
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }

        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }
}

/// Text rendering context wrapping font and glyph cache.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        line_height: usize,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            line_height,
        }
    }

    /// Get the line height in pixels
    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text with its top-left corner at the specified position
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let alpha = bitmap[bitmap_y * metrics.width + bitmap_x];
                    if alpha == 0 {
                        continue;
                    }

                    let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px < 0 || py < 0 {
                        continue;
                    }

                    let coverage = ((alpha as u32) << 24) | (color & 0x00FF_FFFF);
                    frame.blend_pixel(px as usize, py as usize, coverage);
                }
            }

            current_x += metrics.advance_width;
        }
    }

    /// Measure text width in pixels
    pub fn measure_width(&mut self, text: &str) -> f32 {
        let mut width = 0.0;
        for ch in text.chars() {
            let key = (ch, self.font_size.to_bits());
            let (metrics, _) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));
            width += metrics.advance_width;
        }
        width
    }

    /// Pixel size of a single line of text
    pub fn measure(&mut self, text: &str) -> Size {
        Size::new(self.measure_width(text).ceil() as usize, self.line_height)
    }
}
