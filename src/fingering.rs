//! The fingering table — the static mapping from note names to 4-hole
//! cover patterns for a 4-hole ocarina.
//!
//! The table is an explicitly constructed, immutable value with no
//! interior state; callers hand it to whoever needs lookups instead of
//! reaching for a process-wide singleton.
//!
//! String lookups are case-sensitive after trimming: `"f"` does not
//! match. The parser's normalization step is what makes lowercase input
//! usable end-to-end; direct callers wanting infallible typed lookup
//! should use [`FingeringTable::pattern_of`].

use serde::{Deserialize, Serialize};

use crate::model::NoteName;
use crate::validation::{ErrorKind, ValidationError, ValidationResult};

/// The 4-hole cover/open configuration producing a given note.
///
/// Hole positions are fixed semantic slots:
/// `[top-left, top-right, bottom-left, bottom-right]`, `true` = covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingeringPattern {
    pub note: NoteName,
    pub holes: [bool; 4],
}

impl FingeringPattern {
    pub const fn top_left(&self) -> bool {
        self.holes[0]
    }

    pub const fn top_right(&self) -> bool {
        self.holes[1]
    }

    pub const fn bottom_left(&self) -> bool {
        self.holes[2]
    }

    pub const fn bottom_right(&self) -> bool {
        self.holes[3]
    }
}

/// The canonical patterns, one per supported note, in display order.
const PATTERNS: [FingeringPattern; 7] = [
    FingeringPattern { note: NoteName::F, holes: [true, true, true, true] },
    FingeringPattern { note: NoteName::G, holes: [true, false, true, true] },
    FingeringPattern { note: NoteName::A, holes: [true, true, true, false] },
    FingeringPattern { note: NoteName::Bb, holes: [true, false, true, false] },
    FingeringPattern { note: NoteName::C, holes: [false, false, true, true] },
    FingeringPattern { note: NoteName::D, holes: [false, false, true, false] },
    FingeringPattern { note: NoteName::E, holes: [false, true, false, false] },
];

/// Read-only note → fingering lookup for the 4-hole ocarina.
#[derive(Debug, Clone, Copy, Default)]
pub struct FingeringTable;

impl FingeringTable {
    pub const fn new() -> Self {
        Self
    }

    /// Look up the pattern for a note given as text.
    ///
    /// The input is trimmed, then matched case-sensitively against the
    /// canonical names; `"bb"` and `"BB"` both return `None`.
    pub fn pattern(&self, note: &str) -> Option<&'static FingeringPattern> {
        let note = NoteName::from_canonical(note.trim())?;
        Some(self.pattern_of(note))
    }

    /// Typed, infallible pattern lookup.
    pub fn pattern_of(&self, note: NoteName) -> &'static FingeringPattern {
        &PATTERNS[note as usize]
    }

    /// Whether a trimmed token is exactly a canonical note name.
    pub fn is_supported(&self, note: &str) -> bool {
        NoteName::from_canonical(note.trim()).is_some()
    }

    /// All supported notes in canonical display order.
    pub fn supported_notes(&self) -> [NoteName; 7] {
        NoteName::ALL
    }

    /// The full note → pattern association as a plain map, in the shape
    /// the renderer consumes.
    pub fn patterns_by_note(&self) -> std::collections::HashMap<NoteName, FingeringPattern> {
        PATTERNS.iter().map(|p| (p.note, *p)).collect()
    }

    /// Validate a batch of note tokens, reporting one error per
    /// unsupported entry.
    ///
    /// The `position` on each error is the **0-based index into the input
    /// slice**, not the parser's 1-based in-line token position; callers
    /// must not conflate the two.
    pub fn validate_notes(&self, notes: &[&str]) -> ValidationResult {
        let mut result = ValidationResult::new();

        for (index, raw) in notes.iter().enumerate() {
            if self.is_supported(raw) {
                continue;
            }
            result.push_error(ValidationError {
                kind: ErrorKind::UnsupportedNote,
                message: format!("Unsupported note '{}'", raw.trim()),
                line: None,
                position: Some(index),
                suggestions: suggestions_for(raw.trim()),
            });
        }

        result
    }
}

/// Replacement hints for an unsupported token.
///
/// A bare `B` (any case) maps straight to `Bb`; common accidentals map to
/// their nearest supported neighbors; anything else gets the full list.
fn suggestions_for(token: &str) -> Vec<String> {
    if token.eq_ignore_ascii_case("B") {
        return vec!["Bb".to_string()];
    }

    let adjacent: &[&str] = match token {
        "Db" => &["D", "C"],
        "Eb" => &["E", "D"],
        "Gb" => &["G", "F"],
        "Ab" => &["A", "G"],
        _ => &[],
    };
    if !adjacent.is_empty() {
        return adjacent.iter().map(|s| (*s).to_string()).collect();
    }

    NoteName::ALL.iter().map(|n| n.as_str().to_string()).collect()
}
