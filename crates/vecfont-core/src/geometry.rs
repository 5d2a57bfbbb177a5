//! Small geometric helpers shared by every crate
//!
//! All world coordinates live in a y-down plane. Angles are in degrees and
//! positive angles turn counter-clockwise as seen on screen.

pub use kurbo::{Point, Rect, Vec2};

/// Rotate `point` around `origin` by `degrees` (counter-clockwise on screen).
///
/// Right angles are handled exactly so repeated 90 degree turns never drift.
pub fn rotate_point(point: Point, origin: Point, degrees: f64) -> Point {
    let d = point - origin;
    let normalized = degrees.rem_euclid(360.0);

    let (x, y) = if normalized == 0.0 {
        (d.x, d.y)
    } else if normalized == 90.0 {
        (d.y, -d.x)
    } else if normalized == 180.0 {
        (-d.x, -d.y)
    } else if normalized == 270.0 {
        (-d.y, d.x)
    } else {
        let (sin, cos) = normalized.to_radians().sin_cos();
        (d.x * cos + d.y * sin, d.y * cos - d.x * sin)
    };

    origin + Vec2::new(x, y)
}

/// Mirror `point` about the vertical axis through `origin.x`.
pub fn mirror_point(point: Point, origin: Point) -> Point {
    Point::new(origin.x - (point.x - origin.x), point.y)
}

/// Bounding box of a point cloud, `None` when empty.
pub fn bounding_box<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Rect> {
    let mut iter = points.into_iter();
    let first = *iter.next()?;
    Some(iter.fold(Rect::from_points(first, first), |bbox, p| bbox.union_pt(*p)))
}

/// Merge two optional boxes.
pub fn merge_boxes(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Twice the signed area of a ring (shoelace), positive for clockwise rings
/// in a y-up plane, which is counter-clockwise on a y-down screen.
pub fn signed_area2(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        sum += (p2.x - p1.x) * (p2.y + p1.y);
    }
    sum
}

/// Absolute area enclosed by a ring.
pub fn ring_area(points: &[Point]) -> f64 {
    signed_area2(points).abs() / 2.0
}

/// Even-odd point-in-ring test (ray cast towards +x).
pub fn point_in_ring(point: Point, ring: &[Point]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (pi, pj) = (ring[i], ring[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
