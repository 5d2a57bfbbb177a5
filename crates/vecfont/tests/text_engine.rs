// this_file: crates/vecfont/tests/text_engine.rs

//! End-to-end tests: registry, layout, markup and fill together.

use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;
use vecfont::prelude::*;
use vecfont::{fill_triangles, string_boundary_limits, text_as_glyphs};
use vecfont_core::{OutlineGlyph, PolygonSet};

const SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

fn offline() -> FontRegistry {
    let _ = env_logger::builder().is_test(true).try_init();
    FontRegistry::new(FontConfig::default().with_system_fonts(false))
}

fn unit_attrs() -> TextAttributes {
    TextAttributes::new(Vec2::new(1.0, 1.0)).with_align(HorizontalAlign::Left, VerticalAlign::Top)
}

#[test]
fn test_same_request_shares_one_font() {
    let registry = offline();
    let first = registry.get_font("no-such-font", false, false);
    let loads = registry.load_count();
    let second = registry.get_font("no-such-font", false, false);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.load_count(), loads);
}

#[test]
fn test_missing_font_falls_back_once() {
    let registry = offline();
    for _ in 0..5 {
        let font = registry.get_font("Definitely Missing Sans", true, false);
        assert!(font.is_stroke());
    }
    assert_eq!(registry.load_count(), 1);
}

#[test]
fn test_stroke_table_from_font_dir() {
    let dir = std::env::temp_dir().join(format!("vecfont-registry-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("tiny.jhf"), "12345  1JZ\n12346  3MWRGR\\\n").unwrap();

    let registry = FontRegistry::new(
        FontConfig::default()
            .with_system_fonts(false)
            .with_user_font_dir(&dir),
    );
    let font = registry.get_font("tiny", false, false);
    let stroke = font.as_stroke().unwrap();
    assert_eq!(stroke.glyph_count(), 2);
    assert!(!Arc::ptr_eq(&font, &registry.default_font()));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_outline_font_by_path() {
    if !PathBuf::from(SYSTEM_FONT).is_file() {
        eprintln!("{SYSTEM_FONT} not installed, skipping");
        return;
    }
    let registry = offline();
    let font = registry.get_font(SYSTEM_FONT, false, false);
    assert!(font.is_outline());

    let geometry = text_as_glyphs(font.as_ref(), "Ob", Point::ZERO, &unit_attrs(), false);
    let triangles = fill_triangles(&geometry.glyphs);
    assert!(!triangles.is_empty());
    assert!(triangles.iter().all(|t| t.outline < geometry.glyphs.len()));

    let covered: f64 = triangles.iter().map(|t| t.area()).sum();
    let expected: f64 = geometry
        .glyphs
        .iter()
        .filter_map(|g| g.as_outline())
        .map(|g| g.polygons().area())
        .sum();
    assert!((covered - expected).abs() < 1e-6 * expected.max(1.0));
}

#[test]
fn test_empty_text_is_empty_geometry() {
    let registry = offline();
    let font = registry.default_font();
    let anchor = Point::new(2.0, -1.0);
    let geometry = text_as_glyphs(font.as_ref(), "", anchor, &TextAttributes::default(), true);
    assert!(geometry.glyphs.is_empty());
    assert_eq!(geometry.bounding_box, Rect::from_origin_size(anchor, (0.0, 0.0)));
}

#[test]
fn test_spin_twice_restores_label() {
    let mut attrs = unit_attrs();
    attrs.spin();
    assert_eq!(attrs.orientation, Orientation::Angle90);
    assert_eq!(attrs.h_align, HorizontalAlign::Right);
    attrs.spin();
    assert_eq!(attrs.orientation, Orientation::Angle0);
    assert_eq!(attrs.h_align, HorizontalAlign::Left);
}

#[test]
fn test_square_with_hole_fills_the_ring() {
    let mut set = PolygonSet::new();
    let outer = set.add_outline(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
    ]);
    assert!(set.add_hole(
        vec![
            Point::new(1.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 1.0),
        ],
        outer,
    ));

    let triangles = fill_triangles(&[Glyph::Outline(OutlineGlyph::new(set))]);
    let area: f64 = triangles.iter().map(|t| t.area()).sum();
    assert!((area - 12.0).abs() < 1e-9);

    let (mut cx, mut cy) = (0.0, 0.0);
    for t in &triangles {
        let c = t.centroid();
        cx += c.x * t.area();
        cy += c.y * t.area();
        assert!(!(c.x > 1.0 && c.x < 3.0 && c.y > 1.0 && c.y < 3.0));
    }
    assert!((cx / area - 2.0).abs() < 1e-9);
    assert!((cy / area - 2.0).abs() < 1e-9);
}

#[test]
fn test_markup_variable_is_drawn_literally() {
    let registry = offline();
    let font = registry.default_font();
    let attrs = unit_attrs();
    let marked = text_as_glyphs(font.as_ref(), "${REF}", Point::ZERO, &attrs, true);
    let plain = text_as_glyphs(font.as_ref(), "${REF}", Point::ZERO, &attrs, false);
    assert_eq!(marked.glyphs.len(), plain.glyphs.len());
    assert_eq!(marked.bounding_box, plain.bounding_box);
}

#[test]
fn test_markup_overbar_and_scripts() {
    let registry = offline();
    let font = registry.default_font();
    let attrs = unit_attrs();

    let barred = text_as_glyphs(font.as_ref(), "~{RESET}", Point::ZERO, &attrs, true);
    assert_eq!(barred.glyphs.len(), 6);

    let plain = text_as_glyphs(font.as_ref(), "VCC", Point::ZERO, &attrs, true);
    let sub = text_as_glyphs(font.as_ref(), "V_{CC}", Point::ZERO, &attrs, true);
    assert_eq!(sub.glyphs.len(), 3);
    assert!(sub.bounding_box.width() < plain.bounding_box.width());
    assert!(sub.bounding_box.y1 > plain.bounding_box.y1);
}

#[test]
fn test_unbalanced_markup_matches_plain_text() {
    let registry = offline();
    let font = registry.default_font();
    let attrs = unit_attrs();
    let marked = text_as_glyphs(font.as_ref(), "A^{B", Point::ZERO, &attrs, true);
    let plain = text_as_glyphs(font.as_ref(), "A^{B", Point::ZERO, &attrs, false);
    assert_eq!(marked, plain);
}

#[test]
fn test_quarter_turn_swaps_extent() {
    let registry = offline();
    let font = registry.default_font();
    let flat = text_as_glyphs(font.as_ref(), "AB\nCD", Point::ZERO, &unit_attrs(), true);
    let turned_attrs = unit_attrs().with_orientation(Orientation::Angle90);
    let turned = text_as_glyphs(font.as_ref(), "AB\nCD", Point::ZERO, &turned_attrs, true);
    assert!((turned.bounding_box.width() - flat.bounding_box.height()).abs() < 1e-9);
    assert!((turned.bounding_box.height() - flat.bounding_box.width()).abs() < 1e-9);
}

#[test]
fn test_more_lines_are_taller() {
    let registry = offline();
    let font = registry.default_font();
    let one = string_boundary_limits(font.as_ref(), "AB", Vec2::new(1.0, 1.0), 0.1, false, false);
    let two = string_boundary_limits(font.as_ref(), "AB\nAB", Vec2::new(1.0, 1.0), 0.1, false, false);
    assert!((one.x - two.x).abs() < 1e-9);
    assert!(two.y - one.y > font.interline(1.0) * 0.99);
}

proptest! {
    #[test]
    fn prop_block_box_holds_every_glyph(
        text in "[A-Z0-9]{1,6}(\n[a-z]{1,6}){0,2}",
        h in 0usize..3,
        v in 0usize..3,
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
    ) {
        let registry = offline();
        let font = registry.default_font();
        let h_align = [HorizontalAlign::Left, HorizontalAlign::Center, HorizontalAlign::Right][h];
        let v_align = [VerticalAlign::Top, VerticalAlign::Center, VerticalAlign::Bottom][v];
        let attrs = TextAttributes::new(Vec2::new(1.5, 2.0)).with_align(h_align, v_align);

        let geometry = text_as_glyphs(font.as_ref(), &text, Point::new(x, y), &attrs, true);
        let bbox = geometry.bounding_box.inflate(1e-9, 1e-9);
        for glyph in &geometry.glyphs {
            let g = glyph.bounding_box();
            prop_assert!(bbox.contains(g.origin()));
            prop_assert!(bbox.contains(Point::new(g.x1, g.y1)));
        }
    }
}
