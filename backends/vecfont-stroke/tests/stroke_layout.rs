// this_file: backends/vecfont-stroke/tests/stroke_layout.rs

use proptest::prelude::*;
use vecfont_core::{FontFace, Glyph, Point, RunPlacement, TextStyle, Vec2, VecfontError};
use vecfont_fontdb::{FontConfig, FontLocator};
use vecfont_stroke::{StrokeFont, SPACE_WIDTH, SUPER_HEIGHT_OFFSET, SUPER_SUB_SIZE_MULTIPLIER};

fn font() -> StrokeFont {
    let _ = env_logger::builder().is_test(true).try_init();
    StrokeFont::load("", false, false).unwrap()
}

fn at(x: f64, y: f64, size: f64) -> RunPlacement {
    RunPlacement::new(Vec2::new(size, size), Point::new(x, y))
}

fn strokes(glyph: &Glyph) -> &[Vec<Point>] {
    glyph.as_stroke().unwrap().strokes()
}

#[test]
fn test_letters_sit_on_the_baseline() {
    let run = font().text_as_glyphs("L", &at(5.0, 20.0, 10.0), TextStyle::default());
    let bbox = run.bounding_box.unwrap();
    assert!((bbox.y1 - 20.0).abs() < 1e-9);
    assert!((bbox.y0 - 10.0).abs() < 1e-9);
    assert!((bbox.x0 - 5.0).abs() < 1e-9);
    assert!(run.next_position.x > 5.0);
    assert_eq!(run.next_position.y, 20.0);
}

#[test]
fn test_empty_text() {
    let placement = at(3.0, 4.0, 1.0);
    let run = font().text_as_glyphs("", &placement, TextStyle::default());
    assert!(run.glyphs.is_empty());
    assert!(run.bounding_box.is_none());
    assert_eq!(run.next_position, placement.position);
    let extent = font().compute_text_line_size("", Vec2::new(2.0, 2.0), TextStyle::default());
    assert_eq!(extent, Vec2::ZERO);
}

#[test]
fn test_unknown_character_is_a_blank() {
    let run = font().text_as_glyphs("\u{263a}", &at(0.0, 0.0, 2.0), TextStyle::default());
    assert!(run.glyphs.is_empty());
    assert!((run.next_position.x - 2.0 * SPACE_WIDTH).abs() < 1e-12);
}

#[test]
fn test_superscript_raises_and_shrinks() {
    let font = font();
    let style = TextStyle::default().with_superscript();
    let run = font.text_as_glyphs("L", &at(0.0, 0.0, 1.0), style);
    let bbox = run.bounding_box.unwrap();
    let baseline = -SUPER_SUB_SIZE_MULTIPLIER * SUPER_HEIGHT_OFFSET;
    assert!((bbox.y1 - baseline).abs() < 1e-9);
    assert!((bbox.height() - SUPER_SUB_SIZE_MULTIPLIER).abs() < 1e-9);
}

#[test]
fn test_overbar_is_trimmed_and_above() {
    let font = font();
    let style = TextStyle::default().with_overbar();
    let run = font.text_as_glyphs("HH", &at(0.0, 0.0, 1.0), style);

    let bar = run.glyphs.last().unwrap();
    let line = &strokes(bar)[0];
    assert_eq!(line.len(), 2);
    assert!((line[0].x - 0.1).abs() < 1e-9);
    assert!((line[1].x - (run.next_position.x - 0.1)).abs() < 1e-9);
    assert!((line[0].y + font.overbar_vertical_position(1.0)).abs() < 1e-9);
}

#[test]
fn test_underline_is_below() {
    let font = font();
    let style = TextStyle {
        underline: true,
        ..TextStyle::default()
    };
    let run = font.text_as_glyphs("AB", &at(0.0, 0.0, 1.0), style);
    let line = &strokes(run.glyphs.last().unwrap())[0];
    assert!(line[0].y > 0.0);
}

#[test]
fn test_quarter_turn_maps_to_column() {
    let font = font();
    let placement = at(0.0, 0.0, 1.0).with_rotation(90.0, Point::ZERO);
    let run = font.text_as_glyphs("HH", &placement, TextStyle::default());
    let bbox = run.bounding_box.unwrap();

    // Text runs up the screen with glyph tops pointing left
    assert!(bbox.y0 < -1.0);
    assert!(bbox.y1 <= 1e-9);
    assert!((bbox.x0 + 1.0).abs() < 1e-9);
    assert!(bbox.x1 <= 1e-9);
}

#[test]
fn test_mirror_flips_about_origin() {
    let font = font();
    let placement = at(0.0, 0.0, 1.0).with_mirror(true);
    let run = font.text_as_glyphs("HH", &placement, TextStyle::default());
    let bbox = run.bounding_box.unwrap();
    assert!(bbox.x1 <= 1e-9);
    assert!(bbox.x0 < -1.0);
}

#[test]
fn test_non_ascii_table_is_an_error() {
    for text in ["1234\u{e9}67JZ\n", "    1  2JZX\u{e9}\n"] {
        let err = StrokeFont::from_jhf("broken", text, false, false).unwrap_err();
        assert!(matches!(err, VecfontError::FontLoad(_)));
    }
}

#[test]
fn test_jhf_font_from_directory() {
    let dir = std::env::temp_dir().join(format!("vecfont-stroke-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    // Space, then '!' as a single vertical stroke
    std::fs::write(dir.join("tiny.jhf"), "12345  1JZ\n12346  3MWRGR\\\n").unwrap();

    let locator = FontLocator::new(
        FontConfig::default()
            .with_user_font_dir(&dir)
            .with_system_fonts(false),
    );
    let font = StrokeFont::load_with(&locator, "tiny", false, false).unwrap();
    assert_eq!(font.name(), "tiny");
    assert_eq!(font.glyph_count(), 2);

    let run = font.text_as_glyphs("!A", &at(0.0, 0.0, 1.0), TextStyle::default());
    assert_eq!(run.glyphs.len(), 1);

    let missing = StrokeFont::load_with(&locator, "absent", false, false);
    assert!(matches!(missing, Err(VecfontError::FontLoad(_))));
}

proptest! {
    #[test]
    fn prop_cursor_matches_measured_width(text in "[ -~]{0,24}") {
        let font = font();
        let size = Vec2::new(1.5, 1.5);
        let run = font.text_as_glyphs(&text, &RunPlacement::new(size, Point::ZERO), TextStyle::default());
        let measured = font.compute_text_line_size(&text, size, TextStyle::default());

        // The measured width only drops the trailing bearing
        prop_assert!(run.next_position.x + 1e-9 >= measured.x);
        prop_assert!(run.next_position.x - measured.x <= 0.2 * size.x + 1e-9);
    }

    #[test]
    fn prop_longer_text_never_narrower(text in "[A-Za-z]{1,16}", extra in "[A-Za-z ]{1,8}") {
        let font = font();
        let size = Vec2::new(1.0, 1.0);
        let base = font.text_as_glyphs(&text, &RunPlacement::new(size, Point::ZERO), TextStyle::default());
        let longer = format!("{text}{extra}");
        let grown = font.text_as_glyphs(&longer, &RunPlacement::new(size, Point::ZERO), TextStyle::default());
        prop_assert!(grown.next_position.x > base.next_position.x);
    }
}
