//! Drawing parsed markup
//!
//! Layout is a pure walk over the markup tree: every node reports the spans
//! it produces and how far it advanced the pen. Drawing turns those spans
//! into glyphs afterwards, so measuring only asks the font for advances and
//! never builds glyph geometry.

use kurbo::{Point, Vec2};
use vecfont_core::{
    FontFace, Glyph, GlyphRun, OutlineGlyph, PolygonSet, RunPlacement, StrokeGlyph, TextStyle,
    ITALIC_TILT,
};
use vecfont_core::geometry::{merge_boxes, mirror_point, rotate_point};
use vecfont_markup::{MarkupNode, NodeKind};
use vecfont_outline::{
    BAR_THICKNESS_RATIO, SUBSCRIPT_SUPERSCRIPT_SIZE, SUBSCRIPT_VERTICAL_OFFSET,
    SUPERSCRIPT_VERTICAL_OFFSET,
};
use vecfont_stroke::{SUB_HEIGHT_OFFSET, SUPER_HEIGHT_OFFSET, SUPER_SUB_SIZE_MULTIPLIER};

/// Overbars drawn for markup stop this much glyph width short of the text
const OVERBAR_TRIM: f64 = 0.1;

/// One piece of laid-out markup, in the unrotated frame
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedSpan {
    Text {
        text: String,
        position: Point,
        style: TextStyle,
    },
    Overbar {
        start: Point,
        end: Point,
        style: TextStyle,
    },
}

/// Result of laying out a markup tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkupLayout {
    pub spans: Vec<RenderedSpan>,
    /// Distance the pen moved, trailing bearing included
    pub advance: f64,
    /// Measured width, matching [`FontFace::compute_text_line_size`] for
    /// text without markup
    pub width: f64,
    pub next_position: Point,
}

/// Lay out `node` starting at `position` on the baseline.
pub fn layout_markup(
    font: &dyn FontFace,
    node: &MarkupNode,
    position: Point,
    size: Vec2,
    style: TextStyle,
) -> MarkupLayout {
    let mut spans = Vec::new();
    let end = layout_node(font, node, position, size, style, &mut spans);
    let advance = end.x - position.x;

    // Only the last text span can end the line, so only its bearing is dropped
    let last = spans.iter().rev().find_map(|span| match span {
        RenderedSpan::Text { text, style, .. } => Some((text.as_str(), *style)),
        RenderedSpan::Overbar { .. } => None,
    });
    let width = match last {
        Some((text, style)) => {
            let bearing =
                font.text_advance(text, size, style) - font.compute_text_line_size(text, size, style).x;
            advance - bearing
        }
        None => advance,
    };

    MarkupLayout {
        spans,
        advance,
        width,
        next_position: end,
    }
}

fn layout_node(
    font: &dyn FontFace,
    node: &MarkupNode,
    position: Point,
    size: Vec2,
    style: TextStyle,
    spans: &mut Vec<RenderedSpan>,
) -> Point {
    match &node.kind {
        NodeKind::Text(text) => layout_text(font, text, position, size, style, spans),
        NodeKind::Variable { namespace, name } => {
            let literal = match namespace {
                Some(namespace) => format!("${{{namespace}:{name}}}"),
                None => format!("${{{name}}}"),
            };
            layout_text(font, &literal, position, size, style, spans)
        }
        NodeKind::Root => layout_children(font, node, position, size, style, spans),
        NodeKind::Superscript => {
            layout_children(font, node, position, size, style.with_superscript(), spans)
        }
        NodeKind::Subscript => {
            layout_children(font, node, position, size, style.with_subscript(), spans)
        }
        NodeKind::Overbar => {
            let end = layout_children(font, node, position, size, style, spans);
            if end.x > position.x {
                spans.push(RenderedSpan::Overbar {
                    start: position,
                    end,
                    style,
                });
            }
            end
        }
    }
}

fn layout_children(
    font: &dyn FontFace,
    node: &MarkupNode,
    position: Point,
    size: Vec2,
    style: TextStyle,
    spans: &mut Vec<RenderedSpan>,
) -> Point {
    node.children.iter().fold(position, |cursor, child| {
        layout_node(font, child, cursor, size, style, spans)
    })
}

fn layout_text(
    font: &dyn FontFace,
    text: &str,
    position: Point,
    size: Vec2,
    style: TextStyle,
    spans: &mut Vec<RenderedSpan>,
) -> Point {
    if text.is_empty() {
        return position;
    }
    let advance = font.text_advance(text, size, style);
    spans.push(RenderedSpan::Text {
        text: text.to_string(),
        position,
        style,
    });
    position + Vec2::new(advance, 0.0)
}

/// Parse `text` as markup and draw it as one run.
///
/// Text that fails to parse is drawn as written.
pub fn draw_markup(
    font: &dyn FontFace,
    text: &str,
    placement: &RunPlacement,
    style: TextStyle,
) -> GlyphRun {
    let root = match vecfont_markup::parse(text) {
        Ok(root) => root,
        Err(err) => {
            log::warn!("drawing {:?} without markup: {}", text, err);
            return font.text_as_glyphs(text, placement, style);
        }
    };

    let layout = layout_markup(font, &root, placement.position, placement.size, style);
    let mut run = GlyphRun {
        glyphs: Vec::new(),
        bounding_box: None,
        next_position: layout.next_position,
    };

    for span in &layout.spans {
        match span {
            RenderedSpan::Text {
                text,
                position,
                style,
            } => {
                let at = RunPlacement {
                    position: *position,
                    ..*placement
                };
                let piece = font.text_as_glyphs(text, &at, *style);
                run.bounding_box = merge_boxes(run.bounding_box, piece.bounding_box);
                run.glyphs.extend(piece.glyphs);
            }
            RenderedSpan::Overbar { start, end, style } => {
                if let Some(bar) = overbar_glyph(font, *start, *end, *style, placement) {
                    run.bounding_box = merge_boxes(run.bounding_box, Some(bar.bounding_box()));
                    run.glyphs.push(bar);
                }
            }
        }
    }

    run
}

/// Glyph size and downward baseline shift of text drawn in `style`
fn span_metrics(font: &dyn FontFace, size: Vec2, style: TextStyle) -> (Vec2, f64) {
    if !style.is_script() {
        return (size, 0.0);
    }
    if font.is_stroke() {
        let scaled = size * SUPER_SUB_SIZE_MULTIPLIER;
        let drop = if style.subscript {
            scaled.y * SUB_HEIGHT_OFFSET
        } else {
            -scaled.y * SUPER_HEIGHT_OFFSET
        };
        (scaled, drop)
    } else {
        let drop = if style.superscript {
            -size.y * SUPERSCRIPT_VERTICAL_OFFSET
        } else {
            -size.y * SUBSCRIPT_VERTICAL_OFFSET
        };
        (size * SUBSCRIPT_SUPERSCRIPT_SIZE, drop)
    }
}

/// Bar over `start..end`, sized for the span it covers.
///
/// Stroke bars are trimmed at both ends; a bar too short to survive the
/// trim is not drawn.
fn overbar_glyph(
    font: &dyn FontFace,
    start: Point,
    end: Point,
    style: TextStyle,
    placement: &RunPlacement,
) -> Option<Glyph> {
    let (size, drop) = span_metrics(font, placement.size, style);
    let height = font.overbar_vertical_position(size.y);
    let shift = if style.italic || font.is_italic() {
        height * ITALIC_TILT
    } else {
        0.0
    };
    let y = start.y + drop - height;
    let place = |p: Point| {
        let p = if placement.mirror {
            mirror_point(p, placement.origin)
        } else {
            p
        };
        rotate_point(p, placement.origin, placement.angle)
    };

    if font.is_stroke() {
        let trim = size.x * OVERBAR_TRIM;
        if end.x - start.x <= 2.0 * trim {
            return None;
        }
        let line = vec![
            place(Point::new(start.x + shift + trim, y)),
            place(Point::new(end.x + shift - trim, y)),
        ];
        Some(Glyph::Stroke(StrokeGlyph::from_strokes(vec![line])))
    } else {
        let half = size.y * BAR_THICKNESS_RATIO / 2.0;
        let ring = [
            Point::new(start.x + shift, y - half),
            Point::new(end.x + shift, y - half),
            Point::new(end.x + shift, y + half),
            Point::new(start.x + shift, y + half),
        ]
        .map(place);
        let mut set = PolygonSet::new();
        set.add_outline(ring.to_vec());
        Some(Glyph::Outline(OutlineGlyph::new(set)))
    }
}
