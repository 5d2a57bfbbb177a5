// this_file: backends/vecfont-outline/tests/outline_font.rs

//! Tests against a real TrueType face.
//!
//! The face is taken from `VECFONT_TEST_FONT`, then `testdata/fonts` at the
//! workspace root, then a few common system locations. Tests return early
//! when none is found.

use std::path::PathBuf;

use vecfont_core::{
    FontFace, FontLoadError, OutlineOrientation, Point, RunPlacement, TextStyle, Vec2,
    VecfontError,
};
use vecfont_outline::{OutlineFont, SUBSCRIPT_SUPERSCRIPT_SIZE};

const CANDIDATES: [&str; 3] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
];

fn test_font_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("VECFONT_TEST_FONT") {
        return Some(PathBuf::from(path));
    }
    let testdata = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/fonts");
    if let Ok(entries) = std::fs::read_dir(&testdata) {
        let found = entries
            .flatten()
            .map(|e| e.path())
            .find(|p| p.extension().is_some_and(|ext| ext == "ttf"));
        if found.is_some() {
            return found;
        }
    }
    CANDIDATES.iter().map(PathBuf::from).find(|p| p.is_file())
}

fn test_font() -> Option<OutlineFont> {
    let _ = env_logger::builder().is_test(true).try_init();
    let Some(path) = test_font_path() else {
        eprintln!("no TrueType test font available, skipping");
        return None;
    };
    let data = std::fs::read(&path).unwrap();
    Some(OutlineFont::from_data(data, 0, false, false).unwrap())
}

fn unit_run(font: &OutlineFont, text: &str, style: TextStyle) -> vecfont_core::GlyphRun {
    let placement = RunPlacement::new(Vec2::new(1.0, 1.0), Point::ZERO);
    font.text_as_glyphs(text, &placement, style)
}

#[test]
fn test_garbage_is_rejected() {
    let err = OutlineFont::from_data(b"not a font".to_vec(), 0, false, false).unwrap_err();
    assert!(matches!(err, VecfontError::FontLoad(FontLoadError::InvalidData)));
}

#[test]
fn test_face_metadata() {
    let Some(font) = test_font() else { return };
    assert_eq!(font.orientation(), OutlineOrientation::TrueType);
    assert!(font.metrics().units_per_em > 0);
    assert!(font.metrics().ascent > 0.0);
    assert!(font.metrics().descent < 0.0);
    assert!(!font.is_stroke());
    assert!(font.is_outline());
    assert!(font.interline(1.0) > 1.0);
    assert!(font.underline_vertical_position(1.0) < 0.0);
}

#[test]
fn test_letters_become_outline_glyphs() {
    let Some(font) = test_font() else { return };
    let run = unit_run(&font, "AB", TextStyle::default());
    assert_eq!(run.glyphs.len(), 2);
    assert!(run.glyphs.iter().all(|g| g.is_outline()));

    let bbox = run.bounding_box.unwrap();
    // y-down world: letters rise above the baseline
    assert!(bbox.y0 < -0.5);
    assert!(bbox.y1 <= 0.05);
    assert!(run.next_position.x > bbox.x0);
}

#[test]
fn test_counter_is_a_hole() {
    let Some(font) = test_font() else { return };
    let run = unit_run(&font, "o", TextStyle::default());
    let outline = run.glyphs[0].as_outline().unwrap();
    assert!(outline.polygons().has_holes());

    let bbox = outline.bounding_box();
    assert!(!outline.polygons().contains_point(bbox.center()));
}

#[test]
fn test_contour_cache_fills_once() {
    let Some(font) = test_font() else { return };
    assert_eq!(font.cached_glyph_count(), 0);

    let first = unit_run(&font, "aaa", TextStyle::default());
    let cached = font.cached_glyph_count();
    assert_eq!(cached, 1);

    let second = unit_run(&font, "aaa", TextStyle::default());
    assert_eq!(font.cached_glyph_count(), cached);
    assert_eq!(first, second);
}

#[test]
fn test_shaping_cache_reuses_runs() {
    let Some(font) = test_font() else { return };
    assert_eq!(font.cached_run_count(), 0);
    assert_eq!(font.compute_text_line_size("", Vec2::new(2.0, 2.0), TextStyle::default()), Vec2::ZERO);
    assert_eq!(font.cached_run_count(), 0);

    let size = Vec2::new(2.0, 2.0);
    let measured = font.compute_text_line_size("Label", size, TextStyle::default());
    assert_eq!(font.cached_run_count(), 1);
    let advance = font.text_advance("Label", size, TextStyle::default());
    let run = font.text_as_glyphs("Label", &RunPlacement::new(size, Point::ZERO), TextStyle::default());
    assert_eq!(font.cached_run_count(), 1);
    assert!((advance - run.next_position.x).abs() < 1e-9);
    assert!((measured.x - advance).abs() < 1e-9);

    assert!(std::sync::Arc::ptr_eq(&font.shape("Label"), &font.shape("Label")));
    font.shape("Other");
    assert_eq!(font.cached_run_count(), 2);
}

#[test]
fn test_space_advances_without_glyph() {
    let Some(font) = test_font() else { return };
    let run = unit_run(&font, " ", TextStyle::default());
    assert!(run.glyphs.is_empty());
    assert!(run.bounding_box.is_none());
    assert!(run.next_position.x > 0.0);
}

#[test]
fn test_line_size_matches_run_advance() {
    let Some(font) = test_font() else { return };
    let size = Vec2::new(3.0, 3.0);
    let run = font.text_as_glyphs("Vecfont", &RunPlacement::new(size, Point::ZERO), TextStyle::default());
    let measured = font.compute_text_line_size("Vecfont", size, TextStyle::default());
    assert!((measured.x - run.next_position.x).abs() < 1e-9);
    assert_eq!(measured.y, 3.0);
}

#[test]
fn test_superscript_is_smaller_and_higher() {
    let Some(font) = test_font() else { return };
    let plain = unit_run(&font, "x", TextStyle::default()).bounding_box.unwrap();
    let sup = unit_run(&font, "x", TextStyle::default().with_superscript())
        .bounding_box
        .unwrap();
    assert!((sup.height() - plain.height() * SUBSCRIPT_SUPERSCRIPT_SIZE).abs() < 1e-6);
    assert!(sup.y1 < plain.y1);
}

#[test]
fn test_requested_italic_shears() {
    let Some(font) = test_font() else { return };
    let upright = unit_run(&font, "I", TextStyle::default()).bounding_box.unwrap();
    let style = TextStyle {
        italic: true,
        ..TextStyle::default()
    };
    let slanted = unit_run(&font, "I", style).bounding_box.unwrap();
    assert!(slanted.width() > upright.width());
}

#[test]
fn test_overbar_adds_a_rectangle_above() {
    let Some(font) = test_font() else { return };
    let run = unit_run(&font, "ab", TextStyle::default().with_overbar());
    assert_eq!(run.glyphs.len(), 3);
    let bar = run.glyphs[2].bounding_box();
    assert!(bar.y1 < -font.overbar_vertical_position(1.0) + 0.1);
}

#[test]
fn test_rotation_keeps_shape() {
    let Some(font) = test_font() else { return };
    let placement = RunPlacement::new(Vec2::new(1.0, 1.0), Point::ZERO).with_rotation(90.0, Point::ZERO);
    let flat = unit_run(&font, "W", TextStyle::default()).bounding_box.unwrap();
    let turned = font
        .text_as_glyphs("W", &placement, TextStyle::default())
        .bounding_box
        .unwrap();
    assert!((turned.width() - flat.height()).abs() < 1e-9);
    assert!((turned.height() - flat.width()).abs() < 1e-9);
}
