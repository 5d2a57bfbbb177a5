//! The contract every font variant honours
//!
//! Stroke tables and outline faces look nothing alike inside, but layout
//! only needs a handful of answers from them: metrics for a given glyph
//! height, the width of a line, and the glyphs for a run of text.
//!
//! - [`FontFace`] - metrics and glyph generation
//! - [`GlyphRun`] - what a single line of text turns into

use kurbo::{Point, Rect, Vec2};

use crate::attributes::TextStyle;
use crate::glyph::Glyph;

/// The glyphs of one laid-out run plus where the next run starts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphRun {
    pub glyphs: Vec<Glyph>,
    /// Box covering every glyph, `None` for a run with nothing to draw
    pub bounding_box: Option<Rect>,
    /// Cursor after the last glyph on the unshifted baseline, unrotated frame
    pub next_position: Point,
}

/// Placement of a run in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunPlacement {
    /// Glyph width and height
    pub size: Vec2,
    /// Baseline start of the run
    pub position: Point,
    /// Rotation in degrees around `origin`
    pub angle: f64,
    pub mirror: bool,
    pub origin: Point,
}

impl RunPlacement {
    pub fn new(size: Vec2, position: Point) -> Self {
        Self {
            size,
            position,
            angle: 0.0,
            mirror: false,
            origin: position,
        }
    }

    pub fn with_rotation(mut self, angle: f64, origin: Point) -> Self {
        self.angle = angle;
        self.origin = origin;
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }
}

/// Anything that can turn text into glyph geometry
///
/// Implementations are immutable once loaded and shared between threads.
pub trait FontFace: Send + Sync {
    /// Name the font was loaded under
    fn name(&self) -> &str;

    fn is_stroke(&self) -> bool;

    fn is_outline(&self) -> bool {
        !self.is_stroke()
    }

    fn is_bold(&self) -> bool;

    fn is_italic(&self) -> bool;

    /// Distance between baselines for a glyph height
    fn interline(&self, glyph_height: f64) -> f64;

    /// Height of the overbar above the baseline
    fn overbar_vertical_position(&self, glyph_height: f64) -> f64;

    /// Offset of the underline from the baseline (negative is below)
    fn underline_vertical_position(&self, glyph_height: f64) -> f64;

    /// Extent of a single line of text, without markup processing
    fn compute_text_line_size(&self, text: &str, size: Vec2, style: TextStyle) -> Vec2;

    /// Horizontal pen advance of one line, equal to the distance
    /// [`FontFace::text_as_glyphs`] moves `next_position`
    ///
    /// Unlike [`FontFace::compute_text_line_size`] this keeps the trailing
    /// bearing and ignores italic lean. The default lays the text out and
    /// discards the geometry; fonts override it to measure directly.
    fn text_advance(&self, text: &str, size: Vec2, style: TextStyle) -> f64 {
        let placement = RunPlacement::new(size, Point::ZERO);
        self.text_as_glyphs(text, &placement, style).next_position.x
    }

    /// Lay out one line of text
    fn text_as_glyphs(&self, text: &str, placement: &RunPlacement, style: TextStyle) -> GlyphRun;
}
