//! From curve outlines to flat contours and polygon sets
//!
//! Font outlines mix straight lines with quadratic (TrueType) and cubic
//! (CFF) Béziers. Each curve is split in half with de Casteljau until its
//! control points lie within a fixed tolerance of the chord, then replaced by
//! its end point. The tolerance scales with units-per-em so every font
//! flattens to the same visual precision.
//!
//! Holes are told apart from ink by winding against the font's orientation
//! convention, then confirmed by nesting: a reversed loop floating outside
//! every solid loop is ink drawn the wrong way round.

use kurbo::Point;
use vecfont_core::geometry::{point_in_ring, signed_area2};
use vecfont_core::{Contour, DecomposeError, OutlineOrientation, PolygonSet, Winding};

use crate::outlines::OutlineCommand;

/// Flatness tolerance as a fraction of the em square
pub const FLATNESS_TOLERANCE_EM: f64 = 1.0 / 1024.0;

/// Recursion cap for curve subdivision
pub const MAX_SUBDIVISION_DEPTH: u32 = 16;

/// Flattens recorded outlines of one font
#[derive(Debug, Clone, Copy)]
pub struct Decomposer {
    orientation: OutlineOrientation,
    tolerance: f64,
}

impl Decomposer {
    pub fn new(orientation: OutlineOrientation, units_per_em: u16) -> Self {
        Self {
            orientation,
            tolerance: FLATNESS_TOLERANCE_EM * f64::from(units_per_em.max(1)),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Flatten `commands` into closed contours, in font units.
    ///
    /// Loops with fewer than three distinct points or no area are dropped.
    pub fn decompose(&self, commands: &[OutlineCommand]) -> Result<Vec<Contour>, DecomposeError> {
        let mut contours = Vec::new();
        let mut current: Option<Vec<Point>> = None;

        for command in commands {
            match *command {
                OutlineCommand::MoveTo(x, y) => {
                    self.close_contour(current.take(), &mut contours);
                    current = Some(vec![finite_point(x, y)?]);
                }
                OutlineCommand::LineTo(x, y) => {
                    let points = current.as_mut().ok_or(DecomposeError::MissingMoveTo)?;
                    points.push(finite_point(x, y)?);
                }
                OutlineCommand::QuadTo {
                    ctrl_x,
                    ctrl_y,
                    x,
                    y,
                } => {
                    let points = current.as_mut().ok_or(DecomposeError::MissingMoveTo)?;
                    let ctrl = finite_point(ctrl_x, ctrl_y)?;
                    let end = finite_point(x, y)?;
                    let start = last_point(points);
                    self.flatten_quad(start, ctrl, end, points, 0);
                }
                OutlineCommand::CurveTo {
                    ctrl1_x,
                    ctrl1_y,
                    ctrl2_x,
                    ctrl2_y,
                    x,
                    y,
                } => {
                    let points = current.as_mut().ok_or(DecomposeError::MissingMoveTo)?;
                    let c1 = finite_point(ctrl1_x, ctrl1_y)?;
                    let c2 = finite_point(ctrl2_x, ctrl2_y)?;
                    let end = finite_point(x, y)?;
                    let start = last_point(points);
                    self.flatten_cubic(start, c1, c2, end, points, 0);
                }
                OutlineCommand::Close => {
                    self.close_contour(current.take(), &mut contours);
                }
            }
        }
        self.close_contour(current, &mut contours);

        Ok(contours)
    }

    fn close_contour(&self, points: Option<Vec<Point>>, contours: &mut Vec<Contour>) {
        let Some(mut points) = points else {
            return;
        };
        points.dedup();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return;
        }
        let contour = Contour::new(points, self.orientation);
        if contour.winding == Winding::Indeterminate {
            log::trace!("dropping zero-area contour");
            return;
        }
        contours.push(contour);
    }

    fn flatten_quad(&self, p0: Point, p1: Point, p2: Point, out: &mut Vec<Point>, depth: u32) {
        if depth >= MAX_SUBDIVISION_DEPTH || distance_to_chord(p1, p0, p2) <= self.tolerance {
            out.push(p2);
            return;
        }
        let m01 = p0.midpoint(p1);
        let m12 = p1.midpoint(p2);
        let mid = m01.midpoint(m12);
        self.flatten_quad(p0, m01, mid, out, depth + 1);
        self.flatten_quad(mid, m12, p2, out, depth + 1);
    }

    fn flatten_cubic(
        &self,
        p0: Point,
        p1: Point,
        p2: Point,
        p3: Point,
        out: &mut Vec<Point>,
        depth: u32,
    ) {
        let flatness = distance_to_chord(p1, p0, p3).max(distance_to_chord(p2, p0, p3));
        if depth >= MAX_SUBDIVISION_DEPTH || flatness <= self.tolerance {
            out.push(p3);
            return;
        }
        let m01 = p0.midpoint(p1);
        let m12 = p1.midpoint(p2);
        let m23 = p2.midpoint(p3);
        let m012 = m01.midpoint(m12);
        let m123 = m12.midpoint(m23);
        let mid = m012.midpoint(m123);
        self.flatten_cubic(p0, m01, m012, mid, out, depth + 1);
        self.flatten_cubic(mid, m123, m23, p3, out, depth + 1);
    }
}

fn finite_point(x: f32, y: f32) -> Result<Point, DecomposeError> {
    if x.is_finite() && y.is_finite() {
        Ok(Point::new(f64::from(x), f64::from(y)))
    } else {
        Err(DecomposeError::NonFiniteCoordinate)
    }
}

fn last_point(points: &[Point]) -> Point {
    points.last().copied().unwrap_or(Point::ZERO)
}

/// Distance from `p` to the segment `a`-`b`
fn distance_to_chord(p: Point, a: Point, b: Point) -> f64 {
    let chord = b - a;
    let length = chord.hypot();
    if length < f64::EPSILON {
        return (p - a).hypot();
    }
    (chord.cross(p - a)).abs() / length
}

/// Index of the innermost solid containing the first point of `contour`
///
/// Nested solids (a ring around a shape with its own counter) all contain
/// the inner counter; the smallest of them owns it.
fn enclosing_solid(contour: &Contour, solids: &[&Contour]) -> Option<usize> {
    let first = *contour.points.first()?;
    solids
        .iter()
        .enumerate()
        .filter(|(_, solid)| point_in_ring(first, &solid.points))
        .map(|(index, solid)| (index, signed_area2(&solid.points).abs()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Assemble contours into outlines with holes, mapping every point through
/// `transform` (usually font units to world space).
///
/// Solid contours become outlines in order; each hole is attached to the
/// smallest solid contour containing its first point. A hole-wound contour that
/// no solid contains is promoted to an outline of its own.
pub fn contours_to_polygon_set(
    contours: &[Contour],
    mut transform: impl FnMut(Point) -> Point,
) -> PolygonSet {
    let solids: Vec<&Contour> = contours.iter().filter(|c| !c.has_hole_winding()).collect();
    let mut set = PolygonSet::new();
    for solid in &solids {
        set.add_outline(solid.points.iter().map(|p| transform(*p)).collect());
    }

    for contour in contours.iter().filter(|c| c.has_hole_winding()) {
        let ring: Vec<Point> = contour.points.iter().map(|p| transform(*p)).collect();
        match enclosing_solid(contour, &solids) {
            Some(index) => {
                set.add_hole(ring, index);
            }
            None => {
                log::debug!("reversed contour outside every outline kept as solid");
                set.add_outline(ring);
            }
        }
    }

    set
}
