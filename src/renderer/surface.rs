//! The raster drawing surface — an RGBA pixel buffer sized in device
//! pixels, drawn to in logical coordinates.
//!
//! The surface stores `logical size × scale` physical pixels and applies
//! the scale inside every primitive, so layout math upstream stays in
//! round logical numbers while high-density displays still get a
//! full-resolution image. Resizing is destructive: prior pixel content
//! is discarded and the buffer is refilled.

use crate::error::ChartError;
use crate::model::Color;

use super::constants::MAX_SURFACE_DIM;
use super::font;

pub(super) struct Surface {
    scale: f64,
    width_px: u32,
    height_px: u32,
    data: Vec<Color>,
}

impl Surface {
    /// Create a surface of the given logical size at a device pixel ratio,
    /// filled with `fill`. Fails on degenerate or absurd dimensions — no
    /// chart can be drawn without a usable buffer.
    pub(super) fn new(
        logical_width: f64,
        logical_height: f64,
        scale: f64,
        fill: Color,
    ) -> Result<Self, ChartError> {
        if !(logical_width.is_finite() && logical_height.is_finite() && scale.is_finite())
            || logical_width <= 0.0
            || logical_height <= 0.0
            || scale <= 0.0
        {
            return Err(ChartError::Rendering(format!(
                "invalid surface dimensions: {logical_width}x{logical_height} @ {scale}x"
            )));
        }

        let width_px = (logical_width * scale).round() as u32;
        let height_px = (logical_height * scale).round() as u32;
        if width_px == 0
            || height_px == 0
            || width_px > MAX_SURFACE_DIM
            || height_px > MAX_SURFACE_DIM
        {
            return Err(ChartError::Rendering(format!(
                "surface size {width_px}x{height_px}px is outside 1..={MAX_SURFACE_DIM}"
            )));
        }

        Ok(Self {
            scale,
            width_px,
            height_px,
            data: vec![fill; (width_px as usize) * (height_px as usize)],
        })
    }

    /// Destructively resize to a new logical size, refilling with `fill`.
    pub(super) fn resize(
        &mut self,
        logical_width: f64,
        logical_height: f64,
        fill: Color,
    ) -> Result<(), ChartError> {
        *self = Self::new(logical_width, logical_height, self.scale, fill)?;
        Ok(())
    }

    pub(super) fn width_px(&self) -> u32 {
        self.width_px
    }

    pub(super) fn height_px(&self) -> u32 {
        self.height_px
    }

    pub(super) fn scale(&self) -> f64 {
        self.scale
    }

    pub(super) fn pixels(&self) -> &[Color] {
        &self.data
    }

    /// Flatten to tightly packed RGBA bytes, row-major.
    pub(super) fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for c in &self.data {
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        out
    }

    /// Fill the whole surface with one color.
    pub(super) fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    #[inline]
    fn set_px(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width_px) || y >= i64::from(self.height_px) {
            return;
        }
        let idx = (y as usize) * (self.width_px as usize) + x as usize;
        self.data[idx] = color;
    }

    /// Fill an axis-aligned rectangle given in logical coordinates.
    pub(super) fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let x0 = (x * self.scale).round() as i64;
        let y0 = (y * self.scale).round() as i64;
        let x1 = ((x + w) * self.scale).round() as i64;
        let y1 = ((y + h) * self.scale).round() as i64;
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_px(px, py, color);
            }
        }
    }

    /// Fill a circle centered at (`cx`, `cy`) with radius `r`, all logical.
    pub(super) fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Color) {
        let cx = cx * self.scale;
        let cy = cy * self.scale;
        let r = r * self.scale;
        let r2 = r * r;

        let x0 = (cx - r).floor() as i64;
        let x1 = (cx + r).ceil() as i64;
        let y0 = (cy - r).floor() as i64;
        let y1 = (cy + r).ceil() as i64;

        for py in y0..=y1 {
            for px in x0..=x1 {
                // Sample at the pixel center.
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set_px(px, py, color);
                }
            }
        }
    }

    /// Stroke a circle outline of the given stroke width, all logical.
    pub(super) fn stroke_circle(&mut self, cx: f64, cy: f64, r: f64, width: f64, color: Color) {
        let cx = cx * self.scale;
        let cy = cy * self.scale;
        let r = r * self.scale;
        let half = (width * self.scale) / 2.0;
        let inner2 = (r - half).max(0.0) * (r - half).max(0.0);
        let outer2 = (r + half) * (r + half);

        let reach = r + half;
        let x0 = (cx - reach).floor() as i64;
        let x1 = (cx + reach).ceil() as i64;
        let y0 = (cy - reach).floor() as i64;
        let y1 = (cy + reach).ceil() as i64;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let d2 = dx * dx + dy * dy;
                if d2 >= inner2 && d2 <= outer2 {
                    self.set_px(px, py, color);
                }
            }
        }
    }

    /// Width of a text run in logical pixels at the given size.
    pub(super) fn text_width(&self, text: &str, size: f64) -> f64 {
        font::text_columns(text) as f64 * (size / font::GLYPH_HEIGHT as f64)
    }

    /// Draw text with its top edge at `top`, horizontally centered on
    /// `cx` (logical coordinates). `size` is the glyph height in logical
    /// pixels; glyph cells are scaled nearest-neighbour.
    pub(super) fn draw_text_centered(
        &mut self,
        cx: f64,
        top: f64,
        text: &str,
        size: f64,
        color: Color,
    ) {
        let left = cx - self.text_width(text, size) / 2.0;
        self.draw_text(left, top, text, size, color);
    }

    /// Draw text with its top-left corner at (`left`, `top`).
    pub(super) fn draw_text(&mut self, left: f64, top: f64, text: &str, size: f64, color: Color) {
        let cell = size / font::GLYPH_HEIGHT as f64;
        let mut pen_x = left;

        for ch in text.chars() {
            let pattern = font::glyph(ch);
            for row in 0..font::GLYPH_HEIGHT {
                for col in 0..font::GLYPH_WIDTH {
                    if pattern[row * font::GLYPH_WIDTH + col] != 0 {
                        self.fill_rect(
                            pen_x + col as f64 * cell,
                            top + row as f64 * cell,
                            cell,
                            cell,
                            color,
                        );
                    }
                }
            }
            pen_x += font::GLYPH_ADVANCE as f64 * cell;
        }
    }
}
