//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use fontdue::Font;

use super::geometry::Rect;
use super::GlyphCache;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity.
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

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer actually holds.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            (width, actual_size / width)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[cfg(test)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Constrain all subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = (rect.right().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0.0) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    #[inline]
    fn in_clip(&self, x: usize, y: usize) -> bool {
        x >= self.min_x() && x < self.max_x() && y >= self.min_y() && y < self.max_y()
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = (rect.x.max(0.0) as usize).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).max(self.min_y());
        let x1 = (rect.right().max(0.0) as usize).min(self.max_x());
        let y1 = (rect.bottom().max(0.0) as usize).min(self.max_y());

        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0.min(x1)..row_start + x1].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn blend_rect(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color);
        }

        let x0 = (rect.x.max(0.0) as usize).max(self.min_x());
        let y0 = (rect.y.max(0.0) as usize).max(self.min_y());
        let x1 = (rect.right().max(0.0) as usize).min(self.max_x());
        let y1 = (rect.bottom().max(0.0) as usize).min(self.max_y());

        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Get a single pixel (returns 0 if out of bounds)
    #[cfg(test)]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend `color` onto a pixel with an explicit coverage value
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if !self.in_clip(x, y) || alpha <= 0.0 {
            return;
        }
        let idx = y * self.width + x;
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }

    /// 1px outline inside `rect`
    pub fn draw_border(&mut self, rect: Rect, color: u32) {
        let (x, y) = (rect.x, rect.y);
        let (w, h) = (rect.width, rect.height);
        self.fill_rect(Rect::new(x, y, w, 1.0), color);
        self.fill_rect(Rect::new(x, y + h - 1.0, w, 1.0), color);
        self.fill_rect(Rect::new(x, y, 1.0, h), color);
        self.fill_rect(Rect::new(x + w - 1.0, y, 1.0, h), color);
    }
}

/// Text rendering context wrapping font and glyph cache.
///
/// Layout is monospace: every character advances by `char_width`.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
        line_height: usize,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            char_width,
            line_height,
        }
    }

    #[inline]
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw a single line of text with its top edge at `y`
    pub fn draw(&mut self, frame: &mut Frame, x: f32, y: f32, text: &str, color: u32) {
        let baseline = y + self.ascent;
        let mut current_x = x;

        for ch in text.chars() {
            if current_x >= frame.max_x() as f32 {
                break;
            }

            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let Some(&alpha) = bitmap.get(bitmap_y * metrics.width + bitmap_x) else {
                        continue;
                    };
                    if alpha == 0 {
                        continue;
                    }

                    let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px >= 0 && py >= 0 {
                        frame.blend_pixel(px as usize, py as usize, color, alpha as f32 / 255.0);
                    }
                }
            }

            current_x += self.char_width;
        }
    }
}
