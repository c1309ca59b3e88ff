//! Notation parser — converts line-oriented notation text into the Song
//! data model.
//!
//! The wire format is plain text: line 1 is the title (optionally
//! prefixed with `Title:`, `Song:` or `Name:`), every following line is
//! a sequence of note tokens separated by runs of spaces, commas, pipes
//! or hyphens. Both `\n` and `\r\n` line endings are accepted.
//!
//! Validation accumulates every diagnostic in one pass (only the
//! empty-input case short-circuits); parsing is all-or-nothing, gated on
//! the validation outcome.

use chrono::Utc;
use log::debug;

use crate::error::ChartError;
use crate::model::{NoteName, Song, SongMetadata};
use crate::validation::{
    ErrorKind, ValidationError, ValidationResult, ValidationWarning, WarningKind,
};

/// Default title used when the title line is empty.
pub const DEFAULT_TITLE: &str = "Untitled Song";

/// Parser behavior knobs, all with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Convert `B` tokens (any case) to `Bb` with a warning instead of
    /// rejecting them
    pub auto_convert_b: bool,
    /// When false, unsupported tokens are dropped with a warning instead
    /// of failing validation
    pub strict_validation: bool,
    /// Maximum number of input lines (title included)
    pub max_lines: usize,
    /// Maximum number of note tokens on a single line
    pub max_notes_per_line: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            auto_convert_b: true,
            strict_validation: true,
            max_lines: 100,
            max_notes_per_line: 50,
        }
    }
}

/// The outcome of applying the B→Bb conversion policy to a token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedNotes {
    pub notes: Vec<String>,
    pub warnings: Vec<ValidationWarning>,
}

/// Parses and validates ocarina notation text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotationParser {
    options: ParserOptions,
}

impl NotationParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse notation text into a [`Song`].
    ///
    /// All-or-nothing: if [`validate_input`](Self::validate_input) reports
    /// any error, this fails with the joined error messages and no
    /// partially valid song is produced.
    pub fn parse_song(&self, raw: &str) -> Result<Song, ChartError> {
        let validation = self.validate_input(raw);
        if !validation.is_valid {
            return Err(ChartError::Parsing(validation.joined_errors()));
        }

        let lines = split_lines(raw);
        let title = extract_title(lines.first().copied().unwrap_or(""));

        let mut note_lines: Vec<Vec<NoteName>> = Vec::new();
        for line in lines.iter().skip(1) {
            if line.is_empty() {
                continue;
            }
            let notes: Vec<NoteName> = split_notes(line)
                .into_iter()
                .filter_map(|token| match self.resolve_token(token) {
                    Some(note) => Some(note),
                    None => {
                        // Only reachable in lenient mode; validation
                        // already warned about the token.
                        debug!("dropping unsupported token '{token}'");
                        None
                    }
                })
                .collect();
            if !notes.is_empty() {
                note_lines.push(notes);
            }
        }

        let song = Song {
            title,
            metadata: SongMetadata {
                original_input: raw.to_string(),
                parse_timestamp: Utc::now(),
                note_count: note_lines.iter().map(Vec::len).sum(),
            },
            lines: note_lines,
        };
        debug!(
            "parsed '{}': {} lines, {} notes",
            song.title,
            song.lines.len(),
            song.metadata.note_count
        );
        Ok(song)
    }

    /// Validate notation text, collecting every error and warning.
    ///
    /// Pure function of the input and options: calling it twice yields
    /// identical results.
    pub fn validate_input(&self, raw: &str) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Empty input short-circuits everything else.
        if raw.trim().is_empty() {
            result.push_error(
                ValidationError::global(ErrorKind::EmptyInput, "Input is empty").with_suggestions(
                    vec![
                        "Enter some notation to get started".to_string(),
                        "Load an example song".to_string(),
                    ],
                ),
            );
            return result;
        }

        let lines = split_lines(raw);

        if lines.len() < 2 {
            result.push_error(ValidationError::global(
                ErrorKind::Parsing,
                "Song must contain a title and at least one line of notes",
            ));
        }

        if lines.len() > self.options.max_lines {
            result.push_error(ValidationError::global(
                ErrorKind::Parsing,
                format!(
                    "Too many lines: {} (maximum {})",
                    lines.len(),
                    self.options.max_lines
                ),
            ));
        }

        // Line 1 is always the title; every later line holds notes.
        for (index, line) in lines.iter().enumerate().skip(1) {
            let line_no = index + 1;
            self.validate_note_line(line, line_no, &mut result);
        }

        result
    }

    fn validate_note_line(&self, line: &str, line_no: usize, result: &mut ValidationResult) {
        if line.is_empty() {
            result.push_warning(ValidationWarning::at_line(
                WarningKind::EmptyLine,
                format!("Line {line_no} is empty and will be skipped"),
                line_no,
            ));
            return;
        }

        let tokens = split_notes(line);

        // B-conversion warnings come first so an auto-converted B never
        // also shows up as an unsupported-note error.
        if self.options.auto_convert_b {
            for (pos, token) in tokens.iter().enumerate() {
                if token.eq_ignore_ascii_case("B") {
                    result.push_warning(ValidationWarning::at(
                        WarningKind::NoteConversion,
                        format!(
                            "Converted 'B' to 'Bb' at line {line_no}, position {}",
                            pos + 1
                        ),
                        line_no,
                        pos + 1,
                    ));
                }
            }
        }

        if tokens.len() > self.options.max_notes_per_line {
            result.push_error(ValidationError::at_line(
                ErrorKind::Parsing,
                format!(
                    "Too many notes on line {line_no}: {} (maximum {})",
                    tokens.len(),
                    self.options.max_notes_per_line
                ),
                line_no,
            ));
        }

        for (pos, token) in tokens.iter().enumerate() {
            let position = pos + 1;
            if normalize_token(token).is_some() {
                continue;
            }
            if token.eq_ignore_ascii_case("B") {
                if self.options.auto_convert_b {
                    continue; // warning already emitted above
                }
                self.report_unsupported(
                    result,
                    ValidationError::at(
                        ErrorKind::UnsupportedNote,
                        format!("Unsupported note 'B' at line {line_no}, position {position}"),
                        line_no,
                        position,
                    )
                    .with_suggestions(
                        std::iter::once("Use Bb instead of B".to_string())
                            .chain(supported_names())
                            .collect(),
                    ),
                );
                continue;
            }
            self.report_unsupported(
                result,
                ValidationError::at(
                    ErrorKind::UnsupportedNote,
                    format!("Unsupported note '{token}' at line {line_no}, position {position}"),
                    line_no,
                    position,
                )
                .with_suggestions(supported_names().collect()),
            );
        }
    }

    /// In strict mode an unsupported token is an error; in lenient mode
    /// it is downgraded to a warning and later dropped during assembly.
    fn report_unsupported(&self, result: &mut ValidationResult, error: ValidationError) {
        if self.options.strict_validation {
            result.push_error(error);
        } else {
            result.push_warning(ValidationWarning {
                kind: WarningKind::NoteConversion,
                message: format!("{} (token dropped)", error.message),
                line: error.line,
                position: error.position,
            });
        }
    }

    /// Apply the B→Bb conversion policy to a list of tokens.
    ///
    /// Tokens other than `B` pass through unchanged; each conversion is
    /// reported as a warning carrying the 1-based token index.
    pub fn convert_notes(&self, tokens: &[&str]) -> ConvertedNotes {
        let mut notes = Vec::with_capacity(tokens.len());
        let mut warnings = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if self.options.auto_convert_b && token.eq_ignore_ascii_case("B") {
                warnings.push(ValidationWarning {
                    kind: WarningKind::NoteConversion,
                    message: format!("Converted 'B' to 'Bb' at position {}", index + 1),
                    line: None,
                    position: Some(index + 1),
                });
                notes.push("Bb".to_string());
            } else {
                notes.push((*token).to_string());
            }
        }

        ConvertedNotes { notes, warnings }
    }

    /// Resolve a validated token to a typed note, applying auto-conversion.
    fn resolve_token(&self, token: &str) -> Option<NoteName> {
        if self.options.auto_convert_b && token.eq_ignore_ascii_case("B") {
            return Some(NoteName::Bb);
        }
        normalize_token(token)
    }
}

// ─── Text helpers ────────────────────────────────────────────────────

/// Split raw text into trimmed lines. Handles `\n` and `\r\n` endings;
/// internal spacing is preserved for tokenization.
fn split_lines(raw: &str) -> Vec<&str> {
    raw.split('\n').map(str::trim).collect()
}

/// Whether a character separates note tokens.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '|' || c == '-'
}

/// Split a note line into tokens on runs of separator characters.
///
/// Used by both the validation pass and the assembly pass so reported
/// line/position coordinates always match the assembled tokens.
fn split_notes(line: &str) -> Vec<&str> {
    line.split(is_separator).filter(|t| !t.is_empty()).collect()
}

/// Normalize a token's case to a supported note, if it is one.
///
/// Uppercases the token, special-casing `BB` → `Bb`; anything that is not
/// a supported name (including bare `B`) returns `None` and is left for
/// the caller to reject or convert.
fn normalize_token(token: &str) -> Option<NoteName> {
    match token.to_ascii_uppercase().as_str() {
        "F" => Some(NoteName::F),
        "G" => Some(NoteName::G),
        "A" => Some(NoteName::A),
        "BB" => Some(NoteName::Bb),
        "C" => Some(NoteName::C),
        "D" => Some(NoteName::D),
        "E" => Some(NoteName::E),
        _ => None,
    }
}

/// Extract the song title from the first input line.
///
/// Strips a leading case-insensitive `title:`/`song:`/`name:` prefix;
/// an empty result falls back to [`DEFAULT_TITLE`].
fn extract_title(first_line: &str) -> String {
    let mut title = first_line.trim();
    let lower = title.to_ascii_lowercase();
    for prefix in ["title:", "song:", "name:"] {
        if lower.starts_with(prefix) {
            title = title[prefix.len()..].trim_start();
            break;
        }
    }
    let title = title.trim();
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    }
}

/// Names of all supported notes, for suggestion lists.
fn supported_names() -> impl Iterator<Item = String> {
    NoteName::ALL.iter().map(|n| n.as_str().to_string())
}
