//! View module - rendering code
//!
//! Contains the Renderer struct and the scene drawing for both phases.

pub mod frame;
pub mod layout;

pub use frame::{Frame, TextPainter};
pub use layout::{Rect, Size};

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::Path;
use std::rc::Rc;
use winit::window::Window;

use crate::model::{AppModel, Phase};

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Read and parse a TrueType/OpenType font file
pub fn load_font(path: &Path) -> Result<Font> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to load font {}", path.display()))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to parse font {}: {}", path.display(), e))
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents are preserved between
    /// frames, so the scene is drawn here and copied to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    /// Font size in logical pixels
    base_font_size: f32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    scale_factor: f64,
}

impl Renderer {
    /// Create a new renderer, automatically detecting the window's scale factor
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font: Font,
        base_font_size: f32,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        let (width, height) = {
            let size = window.inner_size();
            (size.width, size.height)
        };

        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        let font_size = base_font_size * scale_factor as f32;
        let line_metrics = line_metrics(&font, font_size)?;

        let mut renderer = Self {
            font,
            surface,
            back_buffer: Vec::new(),
            width: 0,
            height: 0,
            base_font_size,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            scale_factor,
        };
        renderer.resize(width, height)?;
        Ok(renderer)
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    /// Match the surface and back buffer to a new physical window size
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            // Minimized; keep the old surface until a real size arrives
            return Ok(());
        };

        self.surface
            .resize(w, h)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        self.width = width;
        self.height = height;
        self.back_buffer
            .resize((width as usize) * (height as usize), 0);
        Ok(())
    }

    /// Rescale fonts after the window moved to a display with a different DPI
    pub fn set_scale_factor(&mut self, scale_factor: f64) -> Result<()> {
        self.scale_factor = scale_factor;
        self.font_size = self.base_font_size * scale_factor as f32;
        self.line_metrics = line_metrics(&self.font, self.font_size)?;
        self.glyph_cache.clear();
        Ok(())
    }

    /// Draw the current phase and present it.
    ///
    /// `clock` is the wall-clock line, shown only while the counter runs.
    pub fn render(&mut self, model: &AppModel, clock: Option<&str>) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        {
            let ascent = self.line_metrics.ascent;
            let line_height = self.line_height();
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                ascent,
                line_height,
            );
            draw_scene(&mut frame, &mut painter, model, clock, self.scale_factor);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        let len = buffer.len().min(self.back_buffer.len());
        buffer[..len].copy_from_slice(&self.back_buffer[..len]);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

fn line_metrics(font: &Font, font_size: f32) -> Result<LineMetrics> {
    font.horizontal_line_metrics(font_size)
        .ok_or_else(|| anyhow!("Font missing horizontal line metrics"))
}

/// Paint background, motifs, and the phase's text into `frame`
pub fn draw_scene(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    clock: Option<&str>,
    scale_factor: f64,
) {
    let theme = &model.theme;
    let area = frame.size();

    draw_background(frame, model, scale_factor);

    let foreground = theme.foreground.to_argb_u32();
    match &model.phase {
        Phase::AwaitingInput(input) => {
            let prompt = input.prompt_text();
            let size = painter.measure(&prompt);
            let (x, y) = layout::centered(size, area);
            painter.draw(frame, x, y, &prompt, foreground);

            if let Some(error) = input.error() {
                let error_size = painter.measure(error);
                let (ex, _) = layout::centered(error_size, area);
                let ey = y + size.height + (layout::ERROR_GAP * scale_factor) as usize;
                painter.draw(frame, ex, ey, error, theme.error.to_argb_u32());
            }
        }
        Phase::Running(state) => {
            let text = state.display_text();
            let size = painter.measure(&text);
            let (x, y) = layout::centered(size, area);
            painter.draw(frame, x, y, &text, foreground);

            if let Some(clock) = clock {
                let margin = (layout::CLOCK_MARGIN * scale_factor) as usize;
                let clock_size = painter.measure(clock);
                let (cx, cy) = layout::top_right(clock_size, area, margin);
                painter.draw(frame, cx, cy, clock, foreground);
            }
        }
    }
}

/// Clear to the theme background and draw its motifs
pub fn draw_background(frame: &mut Frame, model: &AppModel, scale_factor: f64) {
    let theme = &model.theme;
    frame.clear(theme.background.to_argb_u32());

    let logical_width = frame.width() as f64 / scale_factor;
    let logical_height = frame.height() as f64 / scale_factor;
    for motif in &theme.motifs {
        let color = motif.color.to_argb_u32();
        for square in layout::motif_squares(motif, logical_width, logical_height, scale_factor) {
            frame.fill_rect(square, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WINDOW_HEIGHT, WINDOW_WIDTH};
    use crate::theme::Theme;

    fn render_background(theme: Theme) -> Vec<u32> {
        let model = AppModel::new(theme);
        let mut buffer = vec![0u32; (WINDOW_WIDTH * WINDOW_HEIGHT) as usize];
        let mut frame = Frame::new(&mut buffer, WINDOW_WIDTH as usize, WINDOW_HEIGHT as usize);
        draw_background(&mut frame, &model, 1.0);
        buffer
    }

    fn pixel(buffer: &[u32], x: usize, y: usize) -> u32 {
        buffer[y * WINDOW_WIDTH as usize + x]
    }

    #[test]
    fn test_decorated_background_and_motifs() {
        let buffer = render_background(Theme::decorated());
        assert_eq!(pixel(&buffer, 300, 100), 0xFFFFC0CB);
        // First heart
        assert_eq!(pixel(&buffer, 12, 12), 0xFFFF69B4);
        // First star
        assert_eq!(pixel(&buffer, 592, 182), 0xFFFFFF00);
    }

    #[test]
    fn test_plain_background_has_no_motifs() {
        let theme = Theme::from_builtin("plain").unwrap();
        let background = theme.background.to_argb_u32();
        let buffer = render_background(theme);
        assert!(buffer.iter().all(|&p| p == background));
    }

    #[test]
    fn test_load_font_missing_file() {
        let err = load_font(Path::new("definitely/not/here.ttf")).unwrap_err();
        assert!(err.to_string().contains("Failed to load font"));
    }

    #[test]
    fn test_load_font_rejects_non_font_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let err = load_font(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse font"));
    }
}
