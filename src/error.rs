//! Error taxonomy for the chart pipeline.

use thiserror::Error;

/// Errors from parsing, rendering, or exporting a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Validation rejected the notation. Carries the joined messages of
    /// every validation error, suitable as a pass/fail gate with a
    /// human-readable reason; use
    /// [`crate::parser::NotationParser::validate_input`] for the full
    /// structured detail.
    #[error("parsing failed: {0}")]
    Parsing(String),

    /// The drawing surface could not be created or drawn to.
    #[error("rendering error: {0}")]
    Rendering(String),

    /// Image export failed.
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

/// Errors from encoding or writing chart images.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}
