//! Vecfont Tess: fill outline glyphs with triangles
//!
//! Outline glyphs arrive as polygon sets, outer rings with holes. The
//! [`Triangulator`] cuts each polygon into triangles by ear clipping after
//! stitching its holes into the outer ring.
//!
//! ```
//! use vecfont_core::{Point, PolygonSet};
//! use vecfont_tess::Triangulator;
//!
//! let mut set = PolygonSet::new();
//! set.add_outline(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(0.0, 4.0),
//! ]);
//!
//! let triangles = Triangulator::new().triangles(&set).unwrap();
//! assert_eq!(triangles.len(), 2);
//! ```

mod earclip;
mod ring;

use kurbo::Point;
use vecfont_core::{PolygonSet, TriangulationError};

/// One output triangle and the outline it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Index of the source polygon (see [`Triangulator::triangulate_with_background`])
    pub outline: usize,
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        ((b - a).cross(c - a) / 2.0).abs()
    }

    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }
}

/// Ear-clipping triangulator for polygon sets with holes
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangulator;

impl Triangulator {
    pub fn new() -> Self {
        Self
    }

    /// Triangulate every polygon of `set`.
    ///
    /// `emit(outline_index, a, b, c)` is called once per triangle. Every
    /// polygon is attempted; the first failure is returned after the rest
    /// of the set has been processed, so partial output is still delivered.
    pub fn triangulate<F>(&self, set: &PolygonSet, mut emit: F) -> Result<(), TriangulationError>
    where
        F: FnMut(usize, Point, Point, Point),
    {
        let mut first_error = None;
        for (index, polygon) in set.polygons.iter().enumerate() {
            if let Err(err) =
                self.triangulate_polygon(index, &polygon.outline, &polygon.holes, &mut emit)
            {
                log::warn!("triangulation of outline {}: {}", index, err);
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Triangulate a background with the set cut out of it, then the set itself.
    ///
    /// Triangles of the background are reported with index 0 and the
    /// polygons of `set` with `1 + i`, so a renderer can fill the gaps
    /// around glyphs and the glyphs with different colours.
    ///
    /// # Panics
    ///
    /// The background must be exactly one outline without holes.
    #[allow(clippy::panic)]
    pub fn triangulate_with_background<F>(
        &self,
        set: &PolygonSet,
        background: &PolygonSet,
        mut emit: F,
    ) -> Result<(), TriangulationError>
    where
        F: FnMut(usize, Point, Point, Point),
    {
        if background.outline_count() != 1 || background.has_holes() {
            panic!(
                "triangulation background must be a single outline without holes, got {} outlines",
                background.outline_count()
            );
        }

        let cutouts: Vec<Vec<Point>> = set.polygons.iter().map(|p| p.outline.clone()).collect();
        let background_result =
            self.triangulate_polygon(0, &background.polygons[0].outline, &cutouts, &mut emit);

        let filler_result = self.triangulate(set, |i, a, b, c| emit(i + 1, a, b, c));

        background_result?;
        filler_result.map_err(|err| match err {
            TriangulationError::DegenerateOutline(i) => TriangulationError::DegenerateOutline(i + 1),
            TriangulationError::EarClippingFailed(i) => TriangulationError::EarClippingFailed(i + 1),
        })
    }

    /// Collect the triangles of `set`
    pub fn triangles(&self, set: &PolygonSet) -> Result<Vec<Triangle>, TriangulationError> {
        let mut out = Vec::new();
        self.triangulate(set, |outline, a, b, c| {
            out.push(Triangle {
                outline,
                vertices: [a, b, c],
            })
        })?;
        Ok(out)
    }

    fn triangulate_polygon<F>(
        &self,
        index: usize,
        outline: &[Point],
        holes: &[Vec<Point>],
        emit: &mut F,
    ) -> Result<(), TriangulationError>
    where
        F: FnMut(usize, Point, Point, Point),
    {
        let mut outer = ring::dedup_ring(outline);
        if outer.len() < 3 || ring::signed_area(&outer) == 0.0 {
            return Err(TriangulationError::DegenerateOutline(index));
        }
        ring::orient(&mut outer, true);

        let holes: Vec<Vec<Point>> = holes
            .iter()
            .map(|h| ring::dedup_ring(h))
            .filter(|h| h.len() >= 3 && ring::signed_area(h) != 0.0)
            .map(|mut h| {
                ring::orient(&mut h, false);
                h
            })
            .collect();

        let (merged, skipped) = ring::bridge_holes(outer, holes);
        if skipped > 0 {
            log::debug!("outline {}: {} holes could not be bridged", index, skipped);
        }

        let result = earclip::clip(&merged, |a, b, c| emit(index, a, b, c));
        if result.remaining > 0 {
            log::warn!(
                "outline {}: ear clipping stopped with {} vertices left",
                index,
                result.remaining
            );
            return Err(TriangulationError::EarClippingFailed(index));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, side: f64) -> Vec<Point> {
        vec![
            Point::new(x0, y0),
            Point::new(x0 + side, y0),
            Point::new(x0 + side, y0 + side),
            Point::new(x0, y0 + side),
        ]
    }

    fn total_area(triangles: &[Triangle]) -> f64 {
        triangles.iter().map(Triangle::area).sum()
    }

    #[test]
    fn test_square_with_hole() {
        let mut set = PolygonSet::new();
        let idx = set.add_outline(square(0.0, 0.0, 10.0));
        set.add_hole(square(3.0, 3.0, 4.0), idx);

        let triangles = Triangulator::new().triangles(&set).unwrap();
        assert!((total_area(&triangles) - 84.0).abs() < 1e-9);

        for t in &triangles {
            let c = t.centroid();
            let in_hole = c.x > 3.0 && c.x < 7.0 && c.y > 3.0 && c.y < 7.0;
            assert!(!in_hole, "triangle {:?} lies in the hole", t);
            assert_eq!(t.outline, 0);
        }
    }

    #[test]
    fn test_either_winding_is_accepted() {
        let mut ring = square(0.0, 0.0, 2.0);
        ring.reverse();
        let mut set = PolygonSet::new();
        set.add_outline(ring);
        let triangles = Triangulator::new().triangles(&set).unwrap();
        assert!((total_area(&triangles) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_concave_outline() {
        // An L shape
        let mut set = PolygonSet::new();
        set.add_outline(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 4.0),
            Point::new(0.0, 4.0),
        ]);
        let triangles = Triangulator::new().triangles(&set).unwrap();
        assert_eq!(triangles.len(), 4);
        assert!((total_area(&triangles) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_points_are_tolerated() {
        let mut set = PolygonSet::new();
        set.add_outline(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ]);
        let triangles = Triangulator::new().triangles(&set).unwrap();
        assert!((total_area(&triangles) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_outline_is_reported() {
        let mut set = PolygonSet::new();
        set.add_outline(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        set.add_outline(square(5.0, 5.0, 1.0));

        let mut count = 0;
        let result = Triangulator::new().triangulate(&set, |i, _, _, _| {
            assert_eq!(i, 1);
            count += 1;
        });
        assert_eq!(result, Err(TriangulationError::DegenerateOutline(0)));
        assert_eq!(count, 2);
    }

    #[test]
    fn test_two_holes() {
        let mut set = PolygonSet::new();
        let idx = set.add_outline(square(0.0, 0.0, 10.0));
        set.add_hole(square(1.0, 1.0, 2.0), idx);
        set.add_hole(square(6.0, 6.0, 3.0), idx);

        let triangles = Triangulator::new().triangles(&set).unwrap();
        assert!((total_area(&triangles) - (100.0 - 4.0 - 9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_background_order_and_indices() {
        let mut set = PolygonSet::new();
        set.add_outline(square(2.0, 2.0, 2.0));
        set.add_outline(square(6.0, 2.0, 2.0));
        let mut background = PolygonSet::new();
        background.add_outline(square(0.0, 0.0, 10.0));

        let mut seen = Vec::new();
        let mut areas = [0.0f64; 3];
        Triangulator::new()
            .triangulate_with_background(&set, &background, |i, a, b, c| {
                seen.push(i);
                areas[i] += ((b - a).cross(c - a) / 2.0).abs();
            })
            .unwrap();

        let first_filler = seen.iter().position(|&i| i != 0).unwrap();
        assert!(seen[..first_filler].iter().all(|&i| i == 0));
        assert!(seen[first_filler..].iter().all(|&i| i >= 1));
        assert!((areas[0] - 92.0).abs() < 1e-9);
        assert!((areas[1] - 4.0).abs() < 1e-9);
        assert!((areas[2] - 4.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "single outline without holes")]
    fn test_background_with_hole_panics() {
        let mut background = PolygonSet::new();
        let idx = background.add_outline(square(0.0, 0.0, 10.0));
        background.add_hole(square(1.0, 1.0, 1.0), idx);
        let _ = Triangulator::new().triangulate_with_background(
            &PolygonSet::new(),
            &background,
            |_, _, _, _| {},
        );
    }
}
