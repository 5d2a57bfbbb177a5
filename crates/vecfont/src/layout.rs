//! Multi-line text blocks
//!
//! A block is split into lines, each line measured, then the lines are
//! stacked by the font's interline pitch and shifted for alignment. All of
//! it happens in the unrotated frame; the orientation is applied as one
//! rotation about the anchor point when glyphs are generated.

use kurbo::{Point, Rect, Size, Vec2};
use vecfont_core::geometry::merge_boxes;
use vecfont_core::{
    FontFace, Glyph, HorizontalAlign, RunPlacement, TextAttributes, TextStyle, VerticalAlign,
};

use crate::markup::{draw_markup, layout_markup};

/// Height of the first line as a multiple of glyph height
pub const FIRST_LINE_HEIGHT_RATIO: f64 = 1.17;

/// Stroke text boxes grow by this many pen widths on every side
pub const STROKE_BOUNDARY_INFLATION: f64 = 1.5;

/// Where one line of a block starts, before rotation
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlacement {
    pub text: String,
    /// Baseline start of the line
    pub position: Point,
    /// Measured extent of the line
    pub extent: Vec2,
}

/// Glyphs of a laid-out block and the box around them
#[derive(Debug, Clone, PartialEq)]
pub struct TextGeometry {
    pub glyphs: Vec<Glyph>,
    pub bounding_box: Rect,
}

fn split_lines<'a>(text: &'a str, attrs: &TextAttributes) -> Vec<&'a str> {
    if attrs.multiline {
        text.split('\n').collect()
    } else {
        vec![text]
    }
}

fn measure_line(font: &dyn FontFace, line: &str, attrs: &TextAttributes, markup: bool) -> Vec2 {
    let style = attrs.style();
    if !markup {
        return font.compute_text_line_size(line, attrs.size, style);
    }
    match vecfont_markup::parse(line) {
        Ok(root) => {
            let layout = layout_markup(font, &root, Point::ZERO, attrs.size, style);
            Vec2::new(layout.width, attrs.size.y)
        }
        Err(_) => font.compute_text_line_size(line, attrs.size, style),
    }
}

/// Baseline start of every line of `text` anchored at `position`.
///
/// Empty text has no lines.
pub fn line_positions(
    font: &dyn FontFace,
    text: &str,
    position: Point,
    attrs: &TextAttributes,
) -> Vec<LinePlacement> {
    place_lines(font, text, position, attrs, false)
}

fn place_lines(
    font: &dyn FontFace,
    text: &str,
    position: Point,
    attrs: &TextAttributes,
    markup: bool,
) -> Vec<LinePlacement> {
    if text.is_empty() {
        return Vec::new();
    }
    let lines = split_lines(text, attrs);
    let extents: Vec<Vec2> = lines
        .iter()
        .map(|line| measure_line(font, line, attrs, markup))
        .collect();

    let interline = font.interline(attrs.size.y) * attrs.line_spacing;
    let height = attrs.size.y * FIRST_LINE_HEIGHT_RATIO + (lines.len() - 1) as f64 * interline;

    let mut offset_y = attrs.size.y;
    if font.is_stroke() {
        offset_y -= attrs.stroke_width;
    }
    match attrs.v_align {
        VerticalAlign::Top => {}
        VerticalAlign::Center => offset_y -= height / 2.0,
        VerticalAlign::Bottom => offset_y -= height,
    }

    lines
        .iter()
        .zip(extents)
        .enumerate()
        .map(|(i, (line, extent))| {
            let offset_x = match attrs.h_align {
                HorizontalAlign::Left => 0.0,
                HorizontalAlign::Center => -extent.x / 2.0,
                HorizontalAlign::Right => -extent.x,
            };
            LinePlacement {
                text: (*line).to_string(),
                position: position + Vec2::new(offset_x, offset_y + i as f64 * interline),
                extent,
            }
        })
        .collect()
}

/// Lay out a block of text and generate its glyphs.
///
/// With `markup` set, each line is parsed for super/subscripts, overbars
/// and escapes; lines that fail to parse are drawn as written.
pub fn text_as_glyphs(
    font: &dyn FontFace,
    text: &str,
    position: Point,
    attrs: &TextAttributes,
    markup: bool,
) -> TextGeometry {
    let empty = Rect::from_origin_size(position, Size::ZERO);
    if text.is_empty() {
        return TextGeometry {
            glyphs: Vec::new(),
            bounding_box: empty,
        };
    }

    let angle = attrs.upright_angle();
    let style = attrs.style();
    let mut glyphs = Vec::new();
    let mut bounding_box = None;

    for line in place_lines(font, text, position, attrs, markup) {
        let placement = RunPlacement::new(attrs.size, line.position)
            .with_rotation(angle, position)
            .with_mirror(attrs.mirrored);
        let run = if markup {
            draw_markup(font, &line.text, &placement, style)
        } else {
            font.text_as_glyphs(&line.text, &placement, style)
        };
        bounding_box = merge_boxes(bounding_box, run.bounding_box);
        glyphs.extend(run.glyphs);
    }

    TextGeometry {
        glyphs,
        bounding_box: bounding_box.unwrap_or(empty),
    }
}

/// Width and height of `text` once drawn, markup included.
///
/// Stroke fonts add a margin of one and a half pen widths on every side
/// for descenders and diacritics.
pub fn string_boundary_limits(
    font: &dyn FontFace,
    text: &str,
    size: Vec2,
    thickness: f64,
    bold: bool,
    italic: bool,
) -> Vec2 {
    if text.is_empty() {
        return Vec2::ZERO;
    }
    let attrs = TextAttributes::new(size)
        .with_align(HorizontalAlign::Left, VerticalAlign::Top)
        .with_bold(bold)
        .with_italic(italic)
        .with_stroke_width(thickness);

    let geometry = text_as_glyphs(font, text, Point::ZERO, &attrs, true);
    let mut bbox = geometry.bounding_box;
    if font.is_stroke() {
        bbox = bbox.inflate(thickness * STROKE_BOUNDARY_INFLATION, thickness * STROKE_BOUNDARY_INFLATION);
    }
    bbox.size().to_vec2()
}

/// Extent of one line without markup
pub fn compute_text_line_size(font: &dyn FontFace, text: &str, size: Vec2, style: TextStyle) -> Vec2 {
    font.compute_text_line_size(text, size, style)
}
