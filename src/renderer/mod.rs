//! Chart renderer — paints a parsed song onto a raster surface as a
//! fingering chart and serializes the surface to an image.
//!
//! The renderer recomputes the layout on every render and resizes its
//! surface when the logical canvas size changes; the resize shows up in
//! the returned [`LayoutInfo`] and in the renderer's own config copy, so
//! no caller-shared configuration is mutated behind anyone's back.
//!
//! The renderer is not a validating component: it assumes a song that
//! already passed validation and silently skips notes whose fingering
//! pattern is missing from the supplied map — rendering must not crash
//! on partially known data.

pub(crate) mod constants;
mod export;
mod font;
mod layout;
mod surface;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ChartError, ExportError};
use crate::fingering::FingeringPattern;
use crate::model::{ChartConfig, NoteName, Song};

pub use export::{generate_filename, generate_filename_at, FALLBACK_SLUG};
pub use layout::{calculate_layout, LayoutInfo, Margins};

use constants::{LABEL_FONT_SIZE, OPEN_HOLE_STROKE_WIDTH, TITLE_FONT_SIZE};
use surface::Surface;

/// Draws fingering charts onto an owned raster surface.
pub struct ChartRenderer {
    surface: Surface,
    config: ChartConfig,
}

impl ChartRenderer {
    /// Create a renderer with its own copy of `config` and a surface at
    /// the given device pixel ratio. Fails if the surface cannot be
    /// created — there is no chart without a drawing buffer.
    pub fn new(config: ChartConfig, device_pixel_ratio: f64) -> Result<Self, ChartError> {
        let surface = Surface::new(
            config.canvas_width,
            config.canvas_height,
            device_pixel_ratio,
            config.colors.background,
        )?;
        Ok(Self { surface, config })
    }

    /// The renderer's configuration, including any canvas size updates
    /// applied by the last render.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.surface.scale()
    }

    /// Render a song as a fingering chart.
    ///
    /// `patterns` is the note → fingering association, pre-resolved by
    /// the caller (see [`crate::fingering::FingeringTable::patterns_by_note`]);
    /// notes missing from it are skipped. Returns the computed layout;
    /// when it differs from the current canvas size the surface has been
    /// resized (destructively) and the renderer's config updated to match.
    pub fn render_chart(
        &mut self,
        song: &Song,
        patterns: &HashMap<NoteName, FingeringPattern>,
    ) -> Result<LayoutInfo, ChartError> {
        let info = calculate_layout(song, &self.config);

        if info.total_width != self.config.canvas_width
            || info.total_height != self.config.canvas_height
        {
            debug!(
                "resizing canvas {}x{} -> {}x{}",
                self.config.canvas_width,
                self.config.canvas_height,
                info.total_width,
                info.total_height
            );
            self.surface.resize(
                info.total_width,
                info.total_height,
                self.config.colors.background,
            )?;
            self.config.canvas_width = info.total_width;
            self.config.canvas_height = info.total_height;
        }

        let colors = self.config.colors;
        self.surface.fill(colors.background);

        // Title, centered, top edge halfway into the top margin.
        self.surface.draw_text_centered(
            self.config.canvas_width / 2.0,
            info.margins.top / 2.0,
            &song.title,
            TITLE_FONT_SIZE,
            colors.text,
        );

        let spacing = self.config.spacing;
        let content_top = info.margins.top + spacing * 2.0;

        for (row, line) in song.lines.iter().enumerate() {
            let line_y = content_top + row as f64 * info.line_height;

            for (col, note) in line.iter().enumerate() {
                let Some(pattern) = patterns.get(note) else {
                    debug!("no fingering pattern for {note}, skipping");
                    continue;
                };

                let slot_x =
                    info.margins.left + col as f64 * (info.pattern_width + spacing * 2.0);
                let pattern_x = slot_x + spacing;
                let pattern_y = line_y + spacing * 2.0;

                self.surface.draw_text_centered(
                    pattern_x + info.pattern_width / 2.0,
                    line_y,
                    note.as_str(),
                    LABEL_FONT_SIZE,
                    colors.text,
                );
                self.draw_pattern(pattern, pattern_x, pattern_y);
            }
        }

        Ok(info)
    }

    /// Draw one 2x2 hole grid with its top-left corner at (`x`, `y`).
    fn draw_pattern(&mut self, pattern: &FingeringPattern, x: f64, y: f64) {
        let r = self.config.hole_radius;
        let s = self.config.spacing;
        let colors = self.config.colors;

        // Hole centers: two diameters plus one gap per axis.
        let centers = [
            (x + r, y + r),                         // top-left
            (x + r * 3.0 + s, y + r),               // top-right
            (x + r, y + r * 3.0 + s),               // bottom-left
            (x + r * 3.0 + s, y + r * 3.0 + s),     // bottom-right
        ];

        for (&(cx, cy), &covered) in centers.iter().zip(pattern.holes.iter()) {
            if covered {
                self.surface.fill_circle(cx, cy, r, colors.hole_filled);
            } else {
                // Open holes are painted and outlined, never left
                // transparent, so they stay visible on any background.
                self.surface.fill_circle(cx, cy, r, colors.hole_empty);
                self.surface
                    .stroke_circle(cx, cy, r, OPEN_HOLE_STROKE_WIDTH, colors.hole_filled);
            }
        }
    }

    /// Refill the surface with the background color.
    pub fn clear(&mut self) {
        self.surface.fill(self.config.colors.background);
    }

    /// Whether anything has been drawn: true if any pixel (alpha
    /// included) differs from the configured background color.
    pub fn has_content(&self) -> bool {
        let background = self.config.colors.background;
        self.surface.pixels().iter().any(|&p| p != background)
    }

    // ─── Export ──────────────────────────────────────────────────────

    /// Encode the current surface content as PNG bytes.
    ///
    /// This is the chart's byte-producing export step; it does not
    /// disturb the surface.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        export::encode_png(&self.surface)
    }

    /// Encode the current surface as a `data:image/png;base64,…` URL.
    pub fn to_data_url(&self) -> Result<String, ExportError> {
        export::to_data_url(&self.surface)
    }

    /// Write the current surface to `path` as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Write the chart into `dir` under a filename derived from `title`
    /// (see [`generate_filename`]); returns the full path written.
    pub fn export_to_png<P: AsRef<Path>>(
        &self,
        dir: P,
        title: &str,
    ) -> Result<PathBuf, ExportError> {
        let path = dir.as_ref().join(generate_filename(title));
        self.save_png(&path)?;
        debug!("exported chart to {}", path.display());
        Ok(path)
    }
}
