//! Glyph geometry: pen strokes or filled outlines
//!
//! A [`Glyph`] is the visual shape of one character after layout. Stroke
//! fonts produce polylines drawn with a pen, outline fonts produce polygon
//! sets that must be filled.

use kurbo::{Point, Rect, Vec2};

use crate::geometry::{bounding_box, merge_boxes, mirror_point, rotate_point};
use crate::polygon::PolygonSet;

/// A glyph drawn with pen strokes
///
/// Each inner list is one continuous pen-down run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeGlyph {
    strokes: Vec<Vec<Point>>,
    pen_is_down: bool,
    bbox: Rect,
}

impl StrokeGlyph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a finalized glyph from ready-made strokes
    pub fn from_strokes(strokes: Vec<Vec<Point>>) -> Self {
        let mut glyph = Self {
            strokes,
            pen_is_down: false,
            bbox: Rect::ZERO,
        };
        glyph.finalize();
        glyph
    }

    /// Extend the current stroke, starting a new one if the pen is up
    pub fn add_point(&mut self, point: Point) {
        if !self.pen_is_down {
            self.strokes.push(Vec::with_capacity(16));
            self.pen_is_down = true;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(point);
        }
    }

    /// Lift the pen: the next point starts a new stroke
    pub fn raise_pen(&mut self) {
        if self.pen_is_down {
            if let Some(stroke) = self.strokes.last_mut() {
                stroke.shrink_to_fit();
            }
        }
        self.pen_is_down = false;
    }

    /// Close construction: drop empty strokes, trim capacity, recompute the box
    pub fn finalize(&mut self) {
        self.pen_is_down = false;
        self.strokes.retain(|stroke| !stroke.is_empty());
        for stroke in &mut self.strokes {
            stroke.shrink_to_fit();
        }
        self.strokes.shrink_to_fit();
        self.bbox = bounding_box(self.strokes.iter().flatten()).unwrap_or(Rect::ZERO);
    }

    /// Override the box, used by stroke fonts whose box is the advance cell
    pub fn with_bounding_box(mut self, bbox: Rect) -> Self {
        self.bbox = bbox;
        self
    }

    pub fn strokes(&self) -> &[Vec<Point>] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|s| s.is_empty())
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Vec::len).sum()
    }

    pub fn bounding_box(&self) -> Rect {
        self.bbox
    }

    /// Non-uniform scale about the coordinate origin
    pub fn resize(&mut self, size: Vec2) {
        self.map_points(|p| Point::new(p.x * size.x, p.y * size.y));
        self.bbox = Rect::new(
            self.bbox.x0 * size.x,
            self.bbox.y0 * size.y,
            self.bbox.x1 * size.x,
            self.bbox.y1 * size.y,
        )
        .abs();
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.map_points(|p| p + offset);
        self.bbox = self.bbox + offset;
    }

    /// Mirror about the vertical axis through `origin`
    pub fn mirror(&mut self, origin: Point) {
        self.map_points(|p| mirror_point(p, origin));
        self.bbox = Rect::from_points(
            mirror_point(self.bbox.origin(), origin),
            mirror_point(Point::new(self.bbox.x1, self.bbox.y1), origin),
        );
    }

    /// Italic shear: x moves left by `y * tilt`
    pub fn tilt(&mut self, tilt: f64) {
        if tilt == 0.0 {
            return;
        }
        let shear = |p: Point| Point::new(p.x - p.y * tilt, p.y);
        self.map_points(shear);
        let b = self.bbox;
        let corners = [
            shear(Point::new(b.x0, b.y0)),
            shear(Point::new(b.x1, b.y0)),
            shear(Point::new(b.x0, b.y1)),
            shear(Point::new(b.x1, b.y1)),
        ];
        self.bbox = bounding_box(&corners).unwrap_or(b);
    }

    pub fn rotate(&mut self, origin: Point, degrees: f64) {
        if degrees == 0.0 {
            return;
        }
        self.map_points(|p| rotate_point(p, origin, degrees));
        let b = self.bbox;
        let corners = [
            Point::new(b.x0, b.y0),
            Point::new(b.x1, b.y0),
            Point::new(b.x0, b.y1),
            Point::new(b.x1, b.y1),
        ]
        .map(|p| rotate_point(p, origin, degrees));
        self.bbox = bounding_box(&corners).unwrap_or(b);
    }

    /// Place a unit glyph: scale, shear, offset, mirror, rotate
    ///
    /// This is the order stroke fonts use when laying out a string.
    pub fn transform(
        &self,
        size: Vec2,
        offset: Vec2,
        tilt: f64,
        angle: f64,
        mirror: bool,
        origin: Point,
    ) -> StrokeGlyph {
        let mut glyph = self.clone();
        glyph.resize(size);
        glyph.tilt(tilt);
        glyph.translate(offset);
        if mirror {
            glyph.mirror(origin);
        }
        glyph.rotate(origin, angle);
        glyph
    }

    fn map_points(&mut self, mut f: impl FnMut(Point) -> Point) {
        for p in self.strokes.iter_mut().flatten() {
            *p = f(*p);
        }
    }
}

/// A glyph drawn as a filled polygon set
///
/// Built in one piece from decomposed font outlines; it has no notion of a
/// pen, so point-by-point construction is not available.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlineGlyph {
    polygons: PolygonSet,
}

impl OutlineGlyph {
    pub fn new(polygons: PolygonSet) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &PolygonSet {
        &self.polygons
    }

    pub fn into_polygons(self) -> PolygonSet {
        self.polygons
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn bounding_box(&self) -> Rect {
        self.polygons.bounding_box().unwrap_or(Rect::ZERO)
    }

    pub fn resize(&mut self, size: Vec2) {
        self.polygons.scale(size);
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.polygons.translate(offset);
    }

    pub fn mirror(&mut self, origin: Point) {
        self.polygons.mirror(origin);
    }

    pub fn rotate(&mut self, origin: Point, degrees: f64) {
        if degrees != 0.0 {
            self.polygons.rotate(origin, degrees);
        }
    }
}

/// Either kind of glyph
#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    Stroke(StrokeGlyph),
    Outline(OutlineGlyph),
}

impl Glyph {
    pub fn is_stroke(&self) -> bool {
        matches!(self, Glyph::Stroke(_))
    }

    pub fn is_outline(&self) -> bool {
        matches!(self, Glyph::Outline(_))
    }

    pub fn as_stroke(&self) -> Option<&StrokeGlyph> {
        match self {
            Glyph::Stroke(g) => Some(g),
            Glyph::Outline(_) => None,
        }
    }

    pub fn as_outline(&self) -> Option<&OutlineGlyph> {
        match self {
            Glyph::Outline(g) => Some(g),
            Glyph::Stroke(_) => None,
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Glyph::Stroke(g) => g.bounding_box(),
            Glyph::Outline(g) => g.bounding_box(),
        }
    }

    pub fn resize(&mut self, size: Vec2) {
        match self {
            Glyph::Stroke(g) => g.resize(size),
            Glyph::Outline(g) => g.resize(size),
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        match self {
            Glyph::Stroke(g) => g.translate(offset),
            Glyph::Outline(g) => g.translate(offset),
        }
    }

    pub fn mirror(&mut self, origin: Point) {
        match self {
            Glyph::Stroke(g) => g.mirror(origin),
            Glyph::Outline(g) => g.mirror(origin),
        }
    }

    pub fn rotate(&mut self, origin: Point, degrees: f64) {
        match self {
            Glyph::Stroke(g) => g.rotate(origin, degrees),
            Glyph::Outline(g) => g.rotate(origin, degrees),
        }
    }

    /// Append a point to a stroke glyph.
    ///
    /// # Panics
    ///
    /// Outline glyphs are built atomically; adding points to one is a
    /// programming error.
    pub fn add_point(&mut self, point: Point) {
        self.stroke_mut("add_point").add_point(point);
    }

    /// Raise the pen of a stroke glyph.
    ///
    /// # Panics
    ///
    /// Panics on outline glyphs, see [`Glyph::add_point`].
    pub fn raise_pen(&mut self) {
        self.stroke_mut("raise_pen").raise_pen();
    }

    /// Finalize a stroke glyph.
    ///
    /// # Panics
    ///
    /// Panics on outline glyphs, see [`Glyph::add_point`].
    pub fn finalize(&mut self) {
        self.stroke_mut("finalize").finalize();
    }

    #[allow(clippy::panic)]
    fn stroke_mut(&mut self, operation: &str) -> &mut StrokeGlyph {
        match self {
            Glyph::Stroke(g) => g,
            Glyph::Outline(_) => panic!("{operation} is not supported on outline glyphs"),
        }
    }
}

impl From<StrokeGlyph> for Glyph {
    fn from(glyph: StrokeGlyph) -> Self {
        Glyph::Stroke(glyph)
    }
}

impl From<OutlineGlyph> for Glyph {
    fn from(glyph: OutlineGlyph) -> Self {
        Glyph::Outline(glyph)
    }
}

/// Combined bounding box of a glyph run, `None` when there is nothing to draw
pub fn glyphs_bounding_box(glyphs: &[Glyph]) -> Option<Rect> {
    glyphs
        .iter()
        .fold(None, |acc, g| merge_boxes(acc, Some(g.bounding_box())))
}
