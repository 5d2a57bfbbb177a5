//! Ear clipping over a single simple ring with positive area

use kurbo::Point;

use crate::ring::{same_point, turn};

/// Turns smaller than this count as straight
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Outcome of clipping one ring
pub(crate) struct ClipResult {
    /// Vertices left over when no ear could be found
    pub remaining: usize,
}

/// Clip ears off `ring`, reporting each triangle.
///
/// An ear is a convex vertex whose triangle contains no other ring vertex.
/// When a full pass finds no ear, a vertex whose triangle is degenerate is
/// dropped instead; if there is none either, clipping stops.
pub(crate) fn clip(ring: &[Point], mut emit: impl FnMut(Point, Point, Point)) -> ClipResult {
    let mut idx: Vec<usize> = (0..ring.len()).collect();
    let mut cursor = 0;
    let mut misses = 0;

    while idx.len() > 3 {
        let n = idx.len();
        let i = cursor % n;
        let (a, b, c) = (
            ring[idx[(i + n - 1) % n]],
            ring[idx[i]],
            ring[idx[(i + 1) % n]],
        );

        if is_ear(ring, &idx, i, a, b, c) {
            emit(a, b, c);
            idx.remove(i);
            misses = 0;
            continue;
        }

        cursor = i + 1;
        misses += 1;
        if misses < n {
            continue;
        }

        match find_degenerate(ring, &idx) {
            Some(d) => {
                idx.remove(d);
                misses = 0;
            }
            None => return ClipResult { remaining: idx.len() },
        }
    }

    if idx.len() == 3 {
        let (a, b, c) = (ring[idx[0]], ring[idx[1]], ring[idx[2]]);
        if turn(a, b, c) > COLLINEAR_EPSILON {
            emit(a, b, c);
        }
    }

    ClipResult { remaining: 0 }
}

fn is_ear(ring: &[Point], idx: &[usize], i: usize, a: Point, b: Point, c: Point) -> bool {
    if turn(a, b, c) <= COLLINEAR_EPSILON {
        return false;
    }
    let n = idx.len();
    let neighbours = [(i + n - 1) % n, i, (i + 1) % n];

    idx.iter().enumerate().all(|(k, &vi)| {
        if neighbours.contains(&k) {
            return true;
        }
        let p = ring[vi];
        if same_point(p, a) || same_point(p, b) || same_point(p, c) {
            return true;
        }
        !in_triangle(p, a, b, c)
    })
}

/// Point in a counter-clockwise triangle, boundary included
fn in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    (b - a).cross(p - a) >= 0.0 && (c - b).cross(p - b) >= 0.0 && (a - c).cross(p - c) >= 0.0
}

fn find_degenerate(ring: &[Point], idx: &[usize]) -> Option<usize> {
    let n = idx.len();
    (0..n).find(|&i| {
        let a = ring[idx[(i + n - 1) % n]];
        let b = ring[idx[i]];
        let c = ring[idx[(i + 1) % n]];
        turn(a, b, c).abs() <= COLLINEAR_EPSILON || same_point(a, c)
    })
}
