//! Parser and fingering-table tests — validate notation text handling
//! end to end, from tokenization through Song assembly.

use pretty_assertions::assert_eq;

use chartlib::{
    parse_text, validate_text, ChartError, ErrorKind, FingeringTable, NotationParser, NoteName,
    ParserOptions, WarningKind,
};

// ─── Fingering table ─────────────────────────────────────────────────

#[test]
fn patterns_match_the_canonical_table() {
    let table = FingeringTable::new();
    let expected: &[(&str, [bool; 4])] = &[
        ("F", [true, true, true, true]),
        ("G", [true, false, true, true]),
        ("A", [true, true, true, false]),
        ("Bb", [true, false, true, false]),
        ("C", [false, false, true, true]),
        ("D", [false, false, true, false]),
        ("E", [false, true, false, false]),
    ];

    for (name, holes) in expected {
        let pattern = table.pattern(name).unwrap_or_else(|| panic!("no pattern for {name}"));
        assert_eq!(&pattern.holes, holes, "holes for {name}");
        assert_eq!(pattern.note.as_str(), *name);
    }
}

#[test]
fn patterns_are_pairwise_distinct() {
    let table = FingeringTable::new();
    let notes = table.supported_notes();
    for a in &notes {
        for b in &notes {
            if a != b {
                assert_ne!(
                    table.pattern_of(*a).holes,
                    table.pattern_of(*b).holes,
                    "{a} and {b} share a hole vector"
                );
            }
        }
    }
}

#[test]
fn supported_notes_are_in_display_order() {
    let table = FingeringTable::new();
    let names: Vec<&str> = table.supported_notes().iter().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["F", "G", "A", "Bb", "C", "D", "E"]);
}

#[test]
fn table_lookup_is_case_sensitive_but_trims() {
    let table = FingeringTable::new();
    assert!(table.pattern(" F ").is_some());
    assert!(table.pattern("f").is_none());
    assert!(table.pattern("BB").is_none());
    assert!(table.pattern("bb").is_none());
    assert!(table.is_supported("Bb"));
    assert!(!table.is_supported("H"));
}

#[test]
fn validate_notes_reports_zero_based_positions() {
    let table = FingeringTable::new();
    let result = table.validate_notes(&["F", "X", "Bb", "Y"]);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0].position, Some(1));
    assert_eq!(result.errors[1].position, Some(3));
    assert_eq!(result.errors[0].kind, ErrorKind::UnsupportedNote);
}

#[test]
fn validate_notes_suggests_bb_for_b() {
    let table = FingeringTable::new();
    let result = table.validate_notes(&["b"]);
    assert_eq!(result.errors[0].suggestions, vec!["Bb".to_string()]);

    let result = table.validate_notes(&["B"]);
    assert_eq!(result.errors[0].suggestions, vec!["Bb".to_string()]);
}

#[test]
fn validate_notes_suggests_adjacent_notes_for_accidentals() {
    let table = FingeringTable::new();
    let cases: &[(&str, &[&str])] = &[
        ("Db", &["D", "C"]),
        ("Eb", &["E", "D"]),
        ("Gb", &["G", "F"]),
        ("Ab", &["A", "G"]),
    ];
    for (token, expected) in cases {
        let result = table.validate_notes(&[*token]);
        let suggestions: Vec<&str> =
            result.errors[0].suggestions.iter().map(String::as_str).collect();
        assert_eq!(&suggestions, expected, "suggestions for {token}");
    }

    // Anything else gets the full supported list.
    let result = table.validate_notes(&["Q"]);
    assert_eq!(result.errors[0].suggestions.len(), 7);
}

// ─── Parsing round-trips ─────────────────────────────────────────────

#[test]
fn parse_title_and_notes() {
    let song = parse_text("Title\nF G A").expect("should parse");
    assert_eq!(song.title, "Title");
    assert_eq!(song.lines, vec![vec![NoteName::F, NoteName::G, NoteName::A]]);
    assert_eq!(song.note_count(), 3);
    assert_eq!(song.metadata.note_count, 3);
    assert_eq!(song.metadata.original_input, "Title\nF G A");
}

#[test]
fn title_prefix_is_stripped() {
    assert_eq!(parse_text("Song: Foo\nF").unwrap().title, "Foo");
    assert_eq!(parse_text("TITLE:   Bar\nF").unwrap().title, "Bar");
    assert_eq!(parse_text("name:Baz\nF").unwrap().title, "Baz");
}

#[test]
fn empty_title_falls_back_to_default() {
    assert_eq!(parse_text("\nF").unwrap().title, "Untitled Song");
    assert_eq!(parse_text("Title:\nF").unwrap().title, "Untitled Song");
}

#[test]
fn windows_line_endings_are_accepted() {
    let song = parse_text("Tune\r\nF G\r\nA C").expect("should parse");
    assert_eq!(
        song.lines,
        vec![
            vec![NoteName::F, NoteName::G],
            vec![NoteName::A, NoteName::C],
        ]
    );
}

#[test]
fn case_is_normalized_to_canonical_form() {
    let song = parse_text("Tune\nf g bb BB e").expect("should parse");
    assert_eq!(
        song.lines,
        vec![vec![
            NoteName::F,
            NoteName::G,
            NoteName::Bb,
            NoteName::Bb,
            NoteName::E,
        ]]
    );
}

#[test]
fn separators_are_interchangeable() {
    let a = parse_text("T\nF,G|A-Bb").unwrap();
    let b = parse_text("T\nF G A Bb").unwrap();
    assert_eq!(a.lines, b.lines);
    assert_eq!(
        a.lines,
        vec![vec![NoteName::F, NoteName::G, NoteName::A, NoteName::Bb]]
    );
}

#[test]
fn blank_lines_are_skipped_with_a_warning() {
    let result = validate_text("T\nF\n\nG");
    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::EmptyLine);
    assert_eq!(result.warnings[0].line, Some(3));

    let song = parse_text("T\nF\n\nG").unwrap();
    assert_eq!(song.lines, vec![vec![NoteName::F], vec![NoteName::G]]);
}

// ─── B → Bb conversion ───────────────────────────────────────────────

#[test]
fn convert_notes_rewrites_b_with_warning() {
    let parser = NotationParser::default();
    let converted = parser.convert_notes(&["F", "B", "G"]);

    assert_eq!(converted.notes, vec!["F", "Bb", "G"]);
    assert_eq!(converted.warnings.len(), 1);
    assert_eq!(converted.warnings[0].kind, WarningKind::NoteConversion);
    assert_eq!(converted.warnings[0].position, Some(2));
}

#[test]
fn convert_notes_is_case_insensitive() {
    let parser = NotationParser::default();
    let converted = parser.convert_notes(&["b"]);
    assert_eq!(converted.notes, vec!["Bb"]);
    assert_eq!(converted.warnings.len(), 1);
}

#[test]
fn convert_notes_respects_disabled_auto_convert() {
    let parser = NotationParser::new(ParserOptions {
        auto_convert_b: false,
        ..ParserOptions::default()
    });
    let converted = parser.convert_notes(&["F", "B"]);
    assert_eq!(converted.notes, vec!["F", "B"]);
    assert!(converted.warnings.is_empty());
}

#[test]
fn parsed_b_becomes_bb() {
    let result = validate_text("T\nF B G");
    assert!(result.is_valid, "auto-converted B must not error");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].line, Some(2));
    assert_eq!(result.warnings[0].position, Some(2));

    let song = parse_text("T\nF B G").unwrap();
    assert_eq!(song.lines[0][1], NoteName::Bb);
}

#[test]
fn b_is_rejected_when_auto_convert_is_off() {
    let parser = NotationParser::new(ParserOptions {
        auto_convert_b: false,
        ..ParserOptions::default()
    });
    let result = parser.validate_input("T\nB");

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::UnsupportedNote);
    assert_eq!(
        result.errors[0].suggestions.first().map(String::as_str),
        Some("Use Bb instead of B")
    );
    assert!(result.warnings.is_empty());
}

// ─── Diagnostics ─────────────────────────────────────────────────────

#[test]
fn unsupported_notes_carry_line_and_position() {
    let result = validate_text("Test\nF G X A Y");

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 2);

    assert_eq!(result.errors[0].line, Some(2));
    assert_eq!(result.errors[0].position, Some(3));
    assert_eq!(
        result.errors[0].message,
        "Unsupported note 'X' at line 2, position 3"
    );
    assert_eq!(result.errors[0].suggestions.len(), 7);

    assert_eq!(result.errors[1].line, Some(2));
    assert_eq!(result.errors[1].position, Some(5));
}

#[test]
fn diagnostics_accumulate_across_lines() {
    let result = validate_text("T\nX\nY\nZ");
    assert_eq!(result.errors.len(), 3);
}

#[test]
fn empty_input_short_circuits() {
    for raw in ["", "   ", " \n \n "] {
        let result = validate_text(raw);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1, "input {raw:?}");
        assert_eq!(result.errors[0].kind, ErrorKind::EmptyInput);
        assert!(result.warnings.is_empty());
        assert!(!result.errors[0].suggestions.is_empty());
    }
}

#[test]
fn single_line_input_is_rejected() {
    let result = validate_text("just a title");
    assert!(!result.is_valid);
    assert_eq!(result.errors[0].kind, ErrorKind::Parsing);
    assert!(result.errors[0]
        .message
        .contains("must contain a title and at least one line of notes"));
}

#[test]
fn too_many_lines_is_rejected() {
    // Title plus 100 note lines = 101 lines total.
    let mut raw = String::from("T");
    for _ in 0..100 {
        raw.push_str("\nF");
    }
    let result = validate_text(&raw);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.message.contains("Too many lines")));
}

#[test]
fn too_many_notes_on_a_line_is_rejected() {
    let notes = vec!["F"; 51].join(" ");
    let result = validate_text(&format!("T\n{notes}"));
    assert!(!result.is_valid);
    assert!(result
        .errors
        .iter()
        .any(|e| e.message.contains("Too many notes on line 2")));
}

#[test]
fn validation_is_pure() {
    let parser = NotationParser::default();
    let raw = "Test\nF G X\n\nB b";
    assert_eq!(parser.validate_input(raw), parser.validate_input(raw));
}

#[test]
fn parse_song_is_all_or_nothing() {
    let err = parse_text("T\nF X").unwrap_err();
    match err {
        ChartError::Parsing(message) => {
            assert!(message.contains("Unsupported note 'X'"));
        }
        other => panic!("expected parsing error, got {other:?}"),
    }
}

#[test]
fn lenient_mode_drops_unsupported_tokens() {
    let parser = NotationParser::new(ParserOptions {
        strict_validation: false,
        ..ParserOptions::default()
    });

    let result = parser.validate_input("T\nF X G");
    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 1);

    let song = parser.parse_song("T\nF X G").unwrap();
    assert_eq!(song.lines, vec![vec![NoteName::F, NoteName::G]]);
}

// ─── JSON boundary ───────────────────────────────────────────────────

#[test]
fn song_and_validation_serialize_to_json() {
    let song = parse_text("Title\nF G A").unwrap();
    let json = chartlib::song_to_json(&song).unwrap();
    assert!(json.contains("\"title\""));
    assert!(json.contains("Title"));

    let result = validate_text("Test\nF G X");
    let json = chartlib::validation_to_json(&result).unwrap();
    assert!(json.contains("UnsupportedNote"));
    assert!(json.contains("\"position\": 3"));
}
