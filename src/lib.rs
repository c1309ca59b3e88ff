//! chartlib — ocarina notation parser and fingering-chart rendering library.
//!
//! Turns line-oriented notation text (a title line followed by lines of
//! note tokens) into a [`Song`], and renders songs as fingering-chart
//! images for a 4-hole ocarina: one labelled 2x2 hole grid per note.
//!
//! # Example
//! ```no_run
//! use chartlib::{parse_text, render_text_to_png};
//!
//! let song = parse_text("Title: Scale\nF G A Bb\nC D E").unwrap();
//! println!("Title: {}", song.title);
//! println!("Notes: {}", song.note_count());
//!
//! let png = render_text_to_png("Title: Scale\nF G A Bb\nC D E").unwrap();
//! std::fs::write("scale.png", png).unwrap();
//! ```

pub mod error;
pub mod fingering;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod validation;

pub use error::{ChartError, ExportError};
pub use fingering::{FingeringPattern, FingeringTable};
pub use model::{ChartConfig, Color, ColorScheme, NoteName, Song, SongMetadata};
pub use parser::{ConvertedNotes, NotationParser, ParserOptions, DEFAULT_TITLE};
pub use renderer::{
    calculate_layout, generate_filename, generate_filename_at, ChartRenderer, LayoutInfo, Margins,
};
pub use validation::{
    ErrorKind, ValidationError, ValidationResult, ValidationWarning, WarningKind,
};

/// Parse notation text with the default parser options.
pub fn parse_text(raw: &str) -> Result<Song, ChartError> {
    NotationParser::default().parse_song(raw)
}

/// Validate notation text with the default parser options, returning the
/// full structured diagnostics.
pub fn validate_text(raw: &str) -> ValidationResult {
    NotationParser::default().validate_input(raw)
}

/// Parse notation text and render it straight to PNG bytes at the
/// default configuration. Convenience function combining the whole
/// pipeline.
pub fn render_text_to_png(raw: &str) -> Result<Vec<u8>, ChartError> {
    render_text_to_png_with(raw, ChartConfig::default(), 1.0)
}

/// Parse and render with an explicit configuration and device pixel ratio.
pub fn render_text_to_png_with(
    raw: &str,
    config: ChartConfig,
    device_pixel_ratio: f64,
) -> Result<Vec<u8>, ChartError> {
    let song = parse_text(raw)?;
    let table = FingeringTable::new();
    let mut renderer = ChartRenderer::new(config, device_pixel_ratio)?;
    renderer.render_chart(&song, &table.patterns_by_note())?;
    Ok(renderer.encode_png()?)
}

/// Convert a parsed song to a JSON string.
/// Useful for passing data to a UI layer.
pub fn song_to_json(song: &Song) -> Result<String, ChartError> {
    serde_json::to_string_pretty(song)
        .map_err(|e| ChartError::Parsing(format!("JSON serialization error: {e}")))
}

/// Convert a validation result to a JSON string, for UI layers that want
/// per-line highlighting.
pub fn validation_to_json(result: &ValidationResult) -> Result<String, ChartError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| ChartError::Parsing(format!("JSON serialization error: {e}")))
}
