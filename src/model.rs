//! Data model for representing parsed ocarina notation.
//!
//! These structures capture the information needed for rendering
//! fingering charts: the song itself, the chart style configuration,
//! and the colors used on the drawing surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 7 ocarina pitches this system understands.
///
/// This is a closed enumeration: no sharps or flats beyond Bb, and no
/// octave information. The declaration order is the canonical display
/// order (`F, G, A, Bb, C, D, E`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteName {
    F,
    G,
    A,
    Bb,
    C,
    D,
    E,
}

impl NoteName {
    /// All supported notes in canonical display order.
    pub const ALL: [NoteName; 7] = [
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::Bb,
        NoteName::C,
        NoteName::D,
        NoteName::E,
    ];

    /// The canonical capitalization of this note name (e.g. `Bb`, not `BB`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            NoteName::F => "F",
            NoteName::G => "G",
            NoteName::A => "A",
            NoteName::Bb => "Bb",
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
        }
    }

    /// Case-sensitive lookup from canonical spelling.
    /// `"f"` or `"BB"` return `None`; only the exact canonical forms match.
    pub fn from_canonical(s: &str) -> Option<NoteName> {
        match s {
            "F" => Some(NoteName::F),
            "G" => Some(NoteName::G),
            "A" => Some(NoteName::A),
            "Bb" => Some(NoteName::Bb),
            "C" => Some(NoteName::C),
            "D" => Some(NoteName::D),
            "E" => Some(NoteName::E),
            _ => None,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete song parsed from notation text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Song title (never empty; defaults to "Untitled Song")
    pub title: String,
    /// Ordered lines of notes. Blank input lines are excluded.
    pub lines: Vec<Vec<NoteName>>,
    /// Parse metadata
    pub metadata: SongMetadata,
}

/// Metadata attached to a parsed song.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongMetadata {
    /// The raw notation text as given to the parser
    pub original_input: String,
    /// When the song was parsed
    pub parse_timestamp: DateTime<Utc>,
    /// Total number of notes across all lines
    pub note_count: usize,
}

impl Song {
    /// Total number of notes across all lines.
    pub fn note_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Length of the longest note line, or 0 for a song with no lines.
    pub fn max_notes_per_line(&self) -> usize {
        self.lines.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }
}

/// Colors used when drawing a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Canvas background
    pub background: Color,
    /// Covered holes (also used for open-hole outlines)
    pub hole_filled: Color,
    /// Open holes — always painted, never left transparent, so they stay
    /// visible against any background
    pub hole_empty: Color,
    /// Title and note labels
    pub text: Color,
}

/// Chart style configuration, owned by the caller.
///
/// The renderer keeps its own copy and updates `canvas_width`/`canvas_height`
/// when the computed layout requires a resize; read the renderer's config
/// after rendering rather than sharing one mutable value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Canvas width in logical pixels
    pub canvas_width: f64,
    /// Canvas height in logical pixels
    pub canvas_height: f64,
    /// Radius of each fingering hole in logical pixels
    pub hole_radius: f64,
    /// Base spacing unit used throughout the layout
    pub spacing: f64,
    /// Drawing colors
    pub colors: ColorScheme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        use crate::renderer::constants::{
            DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_HOLE_RADIUS, DEFAULT_SPACING,
        };
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            hole_radius: DEFAULT_HOLE_RADIUS,
            spacing: DEFAULT_SPACING,
            colors: ColorScheme {
                background: Color::white(),
                hole_filled: Color::rgb(0x2c, 0x3e, 0x50),
                hole_empty: Color::white(),
                text: Color::rgb(0x2c, 0x3e, 0x50),
            },
        }
    }
}
