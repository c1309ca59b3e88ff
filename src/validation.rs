//! Structured diagnostics produced when validating notation text.
//!
//! Validation never stops at the first problem: a result carries every
//! error and warning found in one pass so a caller can surface them all
//! at once. Line numbers are 1-based and count from the first line of
//! raw input (the title is line 1); positions are 1-based token indices
//! within a line — except for [`crate::fingering::FingeringTable::validate_notes`],
//! which reports 0-based array indices.

use serde::{Deserialize, Serialize};

/// What kind of problem an error describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The input was empty or whitespace-only
    EmptyInput,
    /// A token is not one of the supported note names
    UnsupportedNote,
    /// A structural or limit violation (shape, line count, notes per line)
    Parsing,
}

/// What kind of condition a warning describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A `B` token was automatically converted to `Bb`
    NoteConversion,
    /// A blank line was skipped
    EmptyLine,
    /// The input is large enough that rendering may be slow
    Performance,
}

/// A blocking validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
    /// 1-based line in the raw input (title = line 1), when applicable
    pub line: Option<usize>,
    /// 1-based token index within the line, when applicable
    pub position: Option<usize>,
    /// Actionable replacement hints (e.g. `Bb` for a `B` token)
    pub suggestions: Vec<String>,
}

/// A non-blocking validation notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub kind: WarningKind,
    pub message: String,
    pub line: Option<usize>,
    pub position: Option<usize>,
}

/// The outcome of validating a piece of notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// A result with no diagnostics yet.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an error; the result becomes invalid.
    pub fn push_error(&mut self, error: ValidationError) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn push_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Join all error messages into one human-readable string.
    pub fn joined_errors(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationError {
    /// An error with no line/position coordinates.
    pub fn global(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
            position: None,
            suggestions: Vec::new(),
        }
    }

    /// An error pinned to a line/position.
    pub fn at(kind: ErrorKind, message: impl Into<String>, line: usize, position: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line: Some(line),
            position: Some(position),
            suggestions: Vec::new(),
        }
    }

    /// An error pinned to a line but not a token.
    pub fn at_line(kind: ErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line: Some(line),
            position: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

impl ValidationWarning {
    pub fn global(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
            position: None,
        }
    }

    pub fn at(kind: WarningKind, message: impl Into<String>, line: usize, position: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line: Some(line),
            position: Some(position),
        }
    }

    /// A warning pinned to a line but not a token.
    pub fn at_line(kind: WarningKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line: Some(line),
            position: None,
        }
    }
}
