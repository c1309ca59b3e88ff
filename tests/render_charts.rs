//! Layout and rendering tests — compute geometry, draw charts, and
//! export PNGs for visual inspection.

use std::path::PathBuf;

use chrono::TimeZone;
use pretty_assertions::assert_eq;

use chartlib::{
    calculate_layout, generate_filename, generate_filename_at, parse_text, ChartConfig,
    ChartRenderer, FingeringTable, NoteName, Song, SongMetadata,
};

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn test_config() -> ChartConfig {
    ChartConfig {
        hole_radius: 12.0,
        spacing: 10.0,
        ..ChartConfig::default()
    }
}

fn song_without_lines() -> Song {
    Song {
        title: "Empty".to_string(),
        lines: Vec::new(),
        metadata: SongMetadata {
            original_input: String::new(),
            parse_timestamp: chrono::Utc::now(),
            note_count: 0,
        },
    }
}

// ─── Layout ──────────────────────────────────────────────────────────

#[test]
fn layout_matches_the_geometry_formulas() {
    let song = parse_text("T\nF G A Bb\nC D").unwrap();
    let info = calculate_layout(&song, &test_config());

    // hole_radius 12, spacing 10: pattern = 4*12 + 10 = 58.
    assert_eq!(info.pattern_width, 58.0);
    assert_eq!(info.pattern_height, 58.0);
    // line_height = pattern + 3 * spacing.
    assert_eq!(info.line_height, 88.0);
    // margins = 2 * spacing on all sides.
    assert_eq!(info.margins.top, 20.0);
    assert_eq!(info.margins.left, 20.0);
    // width = 4 slots * (58 + 20) + 40.
    assert_eq!(info.total_width, 352.0);
    // height = 2 lines * 88 + 40 + 20 (title row).
    assert_eq!(info.total_height, 236.0);
}

#[test]
fn layout_is_deterministic() {
    let song = parse_text("T\nF G A\nC D E").unwrap();
    let config = test_config();
    assert_eq!(
        calculate_layout(&song, &config),
        calculate_layout(&song, &config)
    );
}

#[test]
fn layout_never_degenerates_for_an_empty_song() {
    let info = calculate_layout(&song_without_lines(), &test_config());
    // One phantom line/slot keeps the canvas drawable.
    assert!(info.total_width > 0.0);
    assert!(info.total_height > 0.0);
    assert_eq!(info.total_width, (58.0 + 20.0) + 40.0);
}

#[test]
fn layout_grows_with_hole_radius_and_note_count() {
    let short = parse_text("T\nF G").unwrap();
    let long = parse_text("T\nF G A Bb C").unwrap();
    let config = test_config();

    let base = calculate_layout(&short, &config);

    let bigger_holes = ChartConfig {
        hole_radius: config.hole_radius + 4.0,
        ..config
    };
    let grown = calculate_layout(&short, &bigger_holes);
    assert!(grown.total_width > base.total_width);
    assert!(grown.total_height > base.total_height);

    let wider = calculate_layout(&long, &config);
    assert!(wider.total_width > base.total_width);
    assert_eq!(wider.total_height, base.total_height);
}

// ─── Rendering ───────────────────────────────────────────────────────

#[test]
fn render_fills_the_surface_and_resizes_to_fit() {
    let song = parse_text("Scale\nF G A Bb\nC D E").unwrap();
    let table = FingeringTable::new();
    let mut renderer = ChartRenderer::new(test_config(), 1.0).unwrap();

    let info = renderer.render_chart(&song, &table.patterns_by_note()).unwrap();

    // The renderer's own config tracks the computed canvas size.
    assert_eq!(renderer.config().canvas_width, info.total_width);
    assert_eq!(renderer.config().canvas_height, info.total_height);
    assert!(renderer.has_content());
}

#[test]
fn fresh_and_cleared_surfaces_have_no_content() {
    let mut renderer = ChartRenderer::new(test_config(), 1.0).unwrap();
    assert!(!renderer.has_content());

    let song = parse_text("T\nF").unwrap();
    let table = FingeringTable::new();
    renderer.render_chart(&song, &table.patterns_by_note()).unwrap();
    assert!(renderer.has_content());

    renderer.clear();
    assert!(!renderer.has_content());
}

#[test]
fn missing_patterns_are_skipped_silently() {
    let song = parse_text("T\nF G A").unwrap();
    let mut renderer = ChartRenderer::new(test_config(), 1.0).unwrap();

    // An empty map must not fail the render; the title still draws.
    let empty = std::collections::HashMap::new();
    renderer.render_chart(&song, &empty).unwrap();
    assert!(renderer.has_content());
}

#[test]
fn renderer_rejects_degenerate_surfaces() {
    let config = ChartConfig {
        canvas_width: 0.0,
        ..test_config()
    };
    assert!(ChartRenderer::new(config, 1.0).is_err());
    assert!(ChartRenderer::new(test_config(), 0.0).is_err());
}

#[test]
fn device_pixel_ratio_scales_the_backing_store() {
    let song = parse_text("T\nF G").unwrap();
    let table = FingeringTable::new();

    let mut renderer = ChartRenderer::new(test_config(), 2.0).unwrap();
    let info = renderer.render_chart(&song, &table.patterns_by_note()).unwrap();
    let png = renderer.encode_png().unwrap();

    let decoder = png::Decoder::new(png.as_slice());
    let reader = decoder.read_info().unwrap();
    let png_info = reader.info();
    assert_eq!(png_info.width, (info.total_width * 2.0).round() as u32);
    assert_eq!(png_info.height, (info.total_height * 2.0).round() as u32);
}

// ─── Export ──────────────────────────────────────────────────────────

#[test]
fn encoded_png_has_the_png_signature() {
    let png = chartlib::render_text_to_png("Scale\nF G A Bb\nC D E").unwrap();
    assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
}

#[test]
fn data_url_is_base64_png() {
    let song = parse_text("T\nF").unwrap();
    let table = FingeringTable::new();
    let mut renderer = ChartRenderer::new(test_config(), 1.0).unwrap();
    renderer.render_chart(&song, &table.patterns_by_note()).unwrap();

    let url = renderer.to_data_url().unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
    assert!(url.len() > 100);
}

#[test]
fn export_writes_a_chart_file() {
    let song = parse_text("Hot Cross Buns\nA G F\nA G F").unwrap();
    let table = FingeringTable::new();
    let mut renderer = ChartRenderer::new(test_config(), 1.0).unwrap();
    renderer.render_chart(&song, &table.patterns_by_note()).unwrap();

    let path = renderer.export_to_png(output_dir(), &song.title).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("hot-cross-buns-"), "got {name}");
    assert!(name.ends_with(".png"));

    let written = std::fs::read(&path).unwrap();
    assert_eq!(&written[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn filenames_are_slugged_and_stamped() {
    let ts = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

    assert_eq!(
        generate_filename_at("My Song!", ts),
        "my-song-20240301123000.png"
    );
    assert_eq!(
        generate_filename_at("  Fancy --- Name  ", ts),
        "fancy-name-20240301123000.png"
    );
    // A title of only special characters falls back.
    assert_eq!(
        generate_filename_at("!!!***", ts),
        "ocarina-chart-20240301123000.png"
    );

    // Long titles are truncated to 50 slug characters.
    let long = "x".repeat(80);
    let name = generate_filename_at(&long, ts);
    assert_eq!(name, format!("{}-20240301123000.png", "x".repeat(50)));

    // The convenience form stamps with the current time.
    let name = generate_filename("My Song!");
    assert!(name.starts_with("my-song-"));
    assert!(name.ends_with(".png"));
}

#[test]
fn render_charts_for_visual_inspection() {
    let notation = "Title: Mary Had a Little Lamb\nA G F G A A A\nG G G\nA C C";
    let png = chartlib::render_text_to_png(notation).unwrap();

    let out = output_dir().join("mary-had-a-little-lamb.png");
    std::fs::write(&out, &png).unwrap();
    println!("✓ Rendered chart ({} bytes)", png.len());
    println!("  Output: {}", out.display());
}
