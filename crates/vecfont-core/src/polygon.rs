//! Polygon sets: outer outlines with holes
//!
//! Outline glyphs are stored as a polygon set. Each polygon owns one closed
//! outer ring and any number of hole rings. Rings are implicitly closed, the
//! first point is never repeated at the end.

use kurbo::{Point, Rect, Vec2};

use crate::geometry::{self, mirror_point, point_in_ring, ring_area, rotate_point};

/// One outer ring plus its holes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub outline: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

impl Polygon {
    pub fn new(outline: Vec<Point>) -> Self {
        Self {
            outline,
            holes: Vec::new(),
        }
    }

    /// Area of the outline minus the area of its holes
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| ring_area(h)).sum();
        ring_area(&self.outline) - holes
    }

    /// Is the point inside the outline and outside every hole?
    pub fn contains_point(&self, point: Point) -> bool {
        point_in_ring(point, &self.outline) && !self.holes.iter().any(|h| point_in_ring(point, h))
    }

    fn points_mut(&mut self) -> impl Iterator<Item = &mut Point> + '_ {
        self.outline
            .iter_mut()
            .chain(self.holes.iter_mut().flat_map(|h| h.iter_mut()))
    }
}

/// A collection of polygons with holes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSet {
    pub polygons: Vec<Polygon>,
}

impl PolygonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new outer ring, returning its index
    pub fn add_outline(&mut self, outline: Vec<Point>) -> usize {
        self.polygons.push(Polygon::new(outline));
        self.polygons.len() - 1
    }

    /// Attach a hole ring to an existing outline.
    ///
    /// Returns `false` when `outline_index` is out of range.
    pub fn add_hole(&mut self, hole: Vec<Point>, outline_index: usize) -> bool {
        match self.polygons.get_mut(outline_index) {
            Some(polygon) => {
                polygon.holes.push(hole);
                true
            }
            None => false,
        }
    }

    pub fn outline_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn has_holes(&self) -> bool {
        self.polygons.iter().any(|p| !p.holes.is_empty())
    }

    pub fn outline(&self, index: usize) -> Option<&[Point]> {
        self.polygons.get(index).map(|p| p.outline.as_slice())
    }

    /// Total filled area
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.polygons.iter().any(|p| p.contains_point(point))
    }

    /// Bounding box of every outline, `None` for an empty set
    pub fn bounding_box(&self) -> Option<Rect> {
        geometry::bounding_box(self.polygons.iter().flat_map(|p| p.outline.iter()))
    }

    /// Move every polygon of `other` into this set
    pub fn append(&mut self, other: PolygonSet) {
        self.polygons.extend(other.polygons);
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.for_each_point(|p| *p += offset);
    }

    /// Non-uniform scale about the coordinate origin
    pub fn scale(&mut self, factor: Vec2) {
        self.for_each_point(|p| *p = Point::new(p.x * factor.x, p.y * factor.y));
    }

    /// Mirror about the vertical axis through `origin`
    pub fn mirror(&mut self, origin: Point) {
        self.for_each_point(|p| *p = mirror_point(*p, origin));
    }

    pub fn rotate(&mut self, origin: Point, degrees: f64) {
        self.for_each_point(|p| *p = rotate_point(*p, origin, degrees));
    }

    pub fn for_each_point(&mut self, mut f: impl FnMut(&mut Point)) {
        for polygon in &mut self.polygons {
            for p in polygon.points_mut() {
                f(p);
            }
        }
    }
}
