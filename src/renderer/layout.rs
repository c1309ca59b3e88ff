//! Layout computation — determines the canvas size and the geometry of
//! each note line and fingering pattern.
//!
//! `calculate_layout` is a pure function of the song's line shape and the
//! config's `hole_radius`/`spacing`: the same inputs always produce the
//! same geometry.

use serde::{Deserialize, Serialize};

use crate::model::{ChartConfig, Song};

/// Uniform margins around the chart content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Computed pixel geometry for rendering a song at a given configuration.
///
/// Derived fresh on every render; never persisted independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub total_width: f64,
    pub total_height: f64,
    /// Vertical room per note line, including label space above the pattern
    pub line_height: f64,
    /// Side length of one 2x2 hole grid (two diameters plus one gap)
    pub pattern_width: f64,
    pub pattern_height: f64,
    pub margins: Margins,
}

/// Compute chart geometry for a song under a style configuration.
pub fn calculate_layout(song: &Song, config: &ChartConfig) -> LayoutInfo {
    let spacing = config.spacing;

    let pattern_width = config.hole_radius * 4.0 + spacing;
    let pattern_height = pattern_width;

    // 1 when there are no lines, so widths never degenerate to zero.
    let max_notes_per_line = song.max_notes_per_line().max(1);
    let num_lines = song.lines.len().max(1);

    let line_width = max_notes_per_line as f64 * (pattern_width + spacing * 2.0);
    // Extra vertical room above each pattern for the note-name label.
    let line_height = pattern_height + spacing * 3.0;

    let margins = Margins::uniform(spacing * 2.0);

    let total_width = line_width + margins.left + margins.right;
    // The trailing spacing term reserves the title row.
    let total_height =
        num_lines as f64 * line_height + margins.top + margins.bottom + spacing * 2.0;

    LayoutInfo {
        total_width,
        total_height,
        line_height,
        pattern_width,
        pattern_height,
        margins,
    }
}
