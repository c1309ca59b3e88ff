//! Hardcoded 5x7 bitmap font used for titles and note labels.
//!
//! Each glyph is a flattened row-major 5x7 pattern (1 = pixel on). The
//! set covers uppercase letters, digits and common title punctuation,
//! plus lowercase `b` so the `Bb` label renders with its canonical
//! capitalization. Other lowercase letters fall back to their uppercase
//! glyphs; anything unknown renders blank.

pub(super) const GLYPH_WIDTH: usize = 5;
pub(super) const GLYPH_HEIGHT: usize = 7;
/// Columns advanced per character (glyph width plus 1 column of spacing).
pub(super) const GLYPH_ADVANCE: usize = GLYPH_WIDTH + 1;

pub(super) type Glyph = [u8; GLYPH_WIDTH * GLYPH_HEIGHT];

/// Width of a text run in glyph-grid columns.
pub(super) fn text_columns(text: &str) -> usize {
    let count = text.chars().count();
    if count == 0 {
        0
    } else {
        count * GLYPH_ADVANCE - 1
    }
}

/// Look up the pattern for a character.
pub(super) fn glyph(c: char) -> &'static Glyph {
    let c = if c.is_ascii_lowercase() && c != 'b' {
        c.to_ascii_uppercase()
    } else {
        c
    };
    match c {
        'A' => &GLYPH_A,
        'B' => &GLYPH_B,
        'C' => &GLYPH_C,
        'D' => &GLYPH_D,
        'E' => &GLYPH_E,
        'F' => &GLYPH_F,
        'G' => &GLYPH_G,
        'H' => &GLYPH_H,
        'I' => &GLYPH_I,
        'J' => &GLYPH_J,
        'K' => &GLYPH_K,
        'L' => &GLYPH_L,
        'M' => &GLYPH_M,
        'N' => &GLYPH_N,
        'O' => &GLYPH_O,
        'P' => &GLYPH_P,
        'Q' => &GLYPH_Q,
        'R' => &GLYPH_R,
        'S' => &GLYPH_S,
        'T' => &GLYPH_T,
        'U' => &GLYPH_U,
        'V' => &GLYPH_V,
        'W' => &GLYPH_W,
        'X' => &GLYPH_X,
        'Y' => &GLYPH_Y,
        'Z' => &GLYPH_Z,
        'b' => &GLYPH_LOWER_B,
        '0' => &GLYPH_0,
        '1' => &GLYPH_1,
        '2' => &GLYPH_2,
        '3' => &GLYPH_3,
        '4' => &GLYPH_4,
        '5' => &GLYPH_5,
        '6' => &GLYPH_6,
        '7' => &GLYPH_7,
        '8' => &GLYPH_8,
        '9' => &GLYPH_9,
        '-' => &GLYPH_HYPHEN,
        '.' => &GLYPH_PERIOD,
        ',' => &GLYPH_COMMA,
        '!' => &GLYPH_BANG,
        '?' => &GLYPH_QUESTION,
        '\'' => &GLYPH_APOSTROPHE,
        ':' => &GLYPH_COLON,
        '(' => &GLYPH_LPAREN,
        ')' => &GLYPH_RPAREN,
        '&' => &GLYPH_AMPERSAND,
        '/' => &GLYPH_SLASH,
        _ => &GLYPH_BLANK,
    }
}

// Patterns are 1 = pixel on, 0 = pixel off, one row per source line.

const GLYPH_BLANK: Glyph = [0; GLYPH_WIDTH * GLYPH_HEIGHT];

const GLYPH_A: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 1, 1, 1, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1,
];

const GLYPH_B: Glyph = [
    1, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 1, 1, 1, 0,
];

const GLYPH_C: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 0,
];

const GLYPH_D: Glyph = [
    1, 1, 1, 0, 0, //
    1, 0, 0, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 1, 0, //
    1, 1, 1, 0, 0,
];

const GLYPH_E: Glyph = [
    1, 1, 1, 1, 1, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 1, 1, 1, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 1, 1, 1, 1,
];

const GLYPH_F: Glyph = [
    1, 1, 1, 1, 1, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 1, 1, 1, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0,
];

const GLYPH_G: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 0, //
    1, 0, 1, 1, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 1,
];

const GLYPH_H: Glyph = [
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 1, 1, 1, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1,
];

const GLYPH_I: Glyph = [
    0, 1, 1, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 1, 1, 1, 0,
];

const GLYPH_J: Glyph = [
    0, 0, 1, 1, 1, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 1, 0, //
    1, 0, 0, 1, 0, //
    0, 1, 1, 0, 0,
];

const GLYPH_K: Glyph = [
    1, 0, 0, 0, 1, //
    1, 0, 0, 1, 0, //
    1, 0, 1, 0, 0, //
    1, 1, 0, 0, 0, //
    1, 0, 1, 0, 0, //
    1, 0, 0, 1, 0, //
    1, 0, 0, 0, 1,
];

const GLYPH_L: Glyph = [
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 1, 1, 1, 1,
];

const GLYPH_M: Glyph = [
    1, 0, 0, 0, 1, //
    1, 1, 0, 1, 1, //
    1, 0, 1, 0, 1, //
    1, 0, 1, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1,
];

const GLYPH_N: Glyph = [
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 1, 0, 0, 1, //
    1, 0, 1, 0, 1, //
    1, 0, 0, 1, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1,
];

const GLYPH_O: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 0,
];

const GLYPH_P: Glyph = [
    1, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 1, 1, 1, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0,
];

const GLYPH_Q: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 1, 0, 1, //
    1, 0, 0, 1, 0, //
    0, 1, 1, 0, 1,
];

const GLYPH_R: Glyph = [
    1, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 1, 1, 1, 0, //
    1, 0, 1, 0, 0, //
    1, 0, 0, 1, 0, //
    1, 0, 0, 0, 1,
];

const GLYPH_S: Glyph = [
    0, 1, 1, 1, 1, //
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    0, 1, 1, 1, 0, //
    0, 0, 0, 0, 1, //
    0, 0, 0, 0, 1, //
    1, 1, 1, 1, 0,
];

const GLYPH_T: Glyph = [
    1, 1, 1, 1, 1, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0,
];

const GLYPH_U: Glyph = [
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 0,
];

const GLYPH_V: Glyph = [
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 0, 1, 0, //
    0, 0, 1, 0, 0,
];

const GLYPH_W: Glyph = [
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 0, 1, 0, 1, //
    1, 0, 1, 0, 1, //
    1, 0, 1, 0, 1, //
    0, 1, 0, 1, 0,
];

const GLYPH_X: Glyph = [
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 0, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 1, 0, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1,
];

const GLYPH_Y: Glyph = [
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 0, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0,
];

const GLYPH_Z: Glyph = [
    1, 1, 1, 1, 1, //
    0, 0, 0, 0, 1, //
    0, 0, 0, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 1, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 1, 1, 1, 1,
];

const GLYPH_LOWER_B: Glyph = [
    1, 0, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 0, 1, 1, 0, //
    1, 1, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    1, 1, 0, 0, 1, //
    1, 0, 1, 1, 0,
];

const GLYPH_0: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 1, 1, //
    1, 0, 1, 0, 1, //
    1, 1, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 0,
];

const GLYPH_1: Glyph = [
    0, 0, 1, 0, 0, //
    0, 1, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 1, 1, 1, 0,
];

const GLYPH_2: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    0, 0, 0, 0, 1, //
    0, 0, 0, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 1, 0, 0, 0, //
    1, 1, 1, 1, 1,
];

const GLYPH_3: Glyph = [
    1, 1, 1, 1, 1, //
    0, 0, 0, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 0,
];

const GLYPH_4: Glyph = [
    0, 0, 0, 1, 0, //
    0, 0, 1, 1, 0, //
    0, 1, 0, 1, 0, //
    1, 0, 0, 1, 0, //
    1, 1, 1, 1, 1, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 1, 0,
];

const GLYPH_5: Glyph = [
    1, 1, 1, 1, 1, //
    1, 0, 0, 0, 0, //
    1, 1, 1, 1, 0, //
    0, 0, 0, 0, 1, //
    0, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 0,
];

const GLYPH_6: Glyph = [
    0, 0, 1, 1, 0, //
    0, 1, 0, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 0,
];

const GLYPH_7: Glyph = [
    1, 1, 1, 1, 1, //
    0, 0, 0, 0, 1, //
    0, 0, 0, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 1, 0, 0, 0, //
    0, 1, 0, 0, 0, //
    0, 1, 0, 0, 0,
];

const GLYPH_8: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 0,
];

const GLYPH_9: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    1, 0, 0, 0, 1, //
    0, 1, 1, 1, 1, //
    0, 0, 0, 0, 1, //
    0, 0, 0, 1, 0, //
    0, 1, 1, 0, 0,
];

const GLYPH_HYPHEN: Glyph = [
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    1, 1, 1, 1, 1, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0,
];

const GLYPH_PERIOD: Glyph = [
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 0, 0, 0,
];

const GLYPH_COMMA: Glyph = [
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 1, 0, 0, 0,
];

const GLYPH_BANG: Glyph = [
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 0, 0, 0,
];

const GLYPH_QUESTION: Glyph = [
    0, 1, 1, 1, 0, //
    1, 0, 0, 0, 1, //
    0, 0, 0, 0, 1, //
    0, 0, 0, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 1, 0, 0,
];

const GLYPH_APOSTROPHE: Glyph = [
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0,
];

const GLYPH_COLON: Glyph = [
    0, 0, 0, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 1, 0, 0, //
    0, 0, 0, 0, 0, //
    0, 0, 0, 0, 0,
];

const GLYPH_LPAREN: Glyph = [
    0, 0, 1, 0, 0, //
    0, 1, 0, 0, 0, //
    0, 1, 0, 0, 0, //
    0, 1, 0, 0, 0, //
    0, 1, 0, 0, 0, //
    0, 1, 0, 0, 0, //
    0, 0, 1, 0, 0,
];

const GLYPH_RPAREN: Glyph = [
    0, 0, 1, 0, 0, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 1, 0, //
    0, 0, 1, 0, 0,
];

const GLYPH_AMPERSAND: Glyph = [
    0, 1, 1, 0, 0, //
    1, 0, 0, 1, 0, //
    0, 1, 1, 0, 0, //
    1, 0, 0, 1, 0, //
    1, 0, 0, 1, 0, //
    1, 0, 1, 1, 0, //
    0, 1, 1, 0, 1,
];

const GLYPH_SLASH: Glyph = [
    0, 0, 0, 0, 1, //
    0, 0, 0, 1, 0, //
    0, 0, 0, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 1, 0, 0, 0, //
    0, 1, 0, 0, 0, //
    1, 0, 0, 0, 0,
];
