//! Shared constants for the chart renderer (all in logical pixels).

// ── Default canvas & geometry ───────────────────────────────────────
pub(crate) const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub(crate) const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;
pub(crate) const DEFAULT_HOLE_RADIUS: f64 = 12.0;
pub(crate) const DEFAULT_SPACING: f64 = 10.0;

// ── Text ────────────────────────────────────────────────────────────
pub(crate) const TITLE_FONT_SIZE: f64 = 21.0; // 3x the 7px glyph height
pub(crate) const LABEL_FONT_SIZE: f64 = 14.0;

// ── Strokes ─────────────────────────────────────────────────────────
pub(crate) const OPEN_HOLE_STROKE_WIDTH: f64 = 2.0;

// ── Surface limits ──────────────────────────────────────────────────
// Guard against runaway allocations from absurd configs.
pub(crate) const MAX_SURFACE_DIM: u32 = 8192;
