//! Ring cleanup and hole bridging
//!
//! Ear clipping works on a single simple ring. Holes are stitched into the
//! outer ring with a zero-width bridge: outer vertex, hole ring starting and
//! ending at its rightmost vertex, back to the same outer vertex.

use kurbo::Point;
use vecfont_core::geometry::point_in_ring;

/// Points closer than this are treated as the same vertex
pub(crate) const VERTEX_EPSILON: f64 = 1e-9;

/// Standard shoelace area, positive when the ring turns from +x towards +y
pub(crate) fn signed_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Cross product of (b - a) and (c - b)
pub(crate) fn turn(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - b)
}

pub(crate) fn same_point(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= VERTEX_EPSILON && (a.y - b.y).abs() <= VERTEX_EPSILON
}

/// Drop repeated consecutive points and a repeated closing point
pub(crate) fn dedup_ring(ring: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(ring.len());
    for &p in ring {
        if out.last().is_some_and(|&q| same_point(p, q)) {
            continue;
        }
        out.push(p);
    }
    while out.len() >= 2 && same_point(out[0], out[out.len() - 1]) {
        out.pop();
    }
    out
}

/// Orient a ring so its signed area has the requested sign
pub(crate) fn orient(ring: &mut [Point], positive: bool) {
    if (signed_area(ring) > 0.0) != positive {
        ring.reverse();
    }
}

/// Do segments `a-b` and `c-d` cross at a point interior to both?
fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    let d1 = (b - a).cross(c - a);
    let d2 = (b - a).cross(d - a);
    let d3 = (d - c).cross(a - c);
    let d4 = (d - c).cross(b - c);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Is `p` on segment `a-b`, excluding the end points?
fn on_segment(p: Point, a: Point, b: Point) -> bool {
    if same_point(p, a) || same_point(p, b) {
        return false;
    }
    let cross = (b - a).cross(p - a);
    if cross.abs() > VERTEX_EPSILON * (b - a).hypot().max(1.0) {
        return false;
    }
    let dot = (p - a).dot(b - a);
    dot > 0.0 && dot < (b - a).hypot2()
}

fn ring_edges(ring: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    (0..ring.len()).map(move |i| (ring[i], ring[(i + 1) % ring.len()]))
}

/// Can `m` see `v` without crossing any edge of the given rings?
fn visible(m: Point, v: Point, rings: &[&[Point]]) -> bool {
    for ring in rings {
        for (a, b) in ring_edges(ring) {
            let shares_end = same_point(a, m) || same_point(b, m) || same_point(a, v) || same_point(b, v);
            if !shares_end && segments_cross(m, v, a, b) {
                return false;
            }
            if on_segment(a, m, v) {
                return false;
            }
        }
    }
    true
}

/// Merge holes into `outer`, returning one ring.
///
/// `outer` must have positive area and every hole negative area. Holes are
/// processed right to left by their maximum x, each bridged from its
/// rightmost vertex to the nearest visible vertex of the merged ring,
/// preferring vertices to its right. A hole with no visible vertex is
/// skipped and reported through the returned count.
pub(crate) fn bridge_holes(outer: Vec<Point>, mut holes: Vec<Vec<Point>>) -> (Vec<Point>, usize) {
    holes.sort_by(|a, b| max_x(b).total_cmp(&max_x(a)));

    let mut merged = outer;
    let mut skipped = 0;

    for h in 0..holes.len() {
        let hole = &holes[h];
        let Some(m_idx) = rightmost(hole) else {
            continue;
        };
        let m = hole[m_idx];

        let mut candidates: Vec<usize> = (0..merged.len()).collect();
        candidates.sort_by(|&a, &b| {
            let (pa, pb) = (merged[a], merged[b]);
            let right_a = pa.x < m.x;
            let right_b = pb.x < m.x;
            right_a
                .cmp(&right_b)
                .then((pa - m).hypot2().total_cmp(&(pb - m).hypot2()))
        });

        let mut others: Vec<&[Point]> = vec![merged.as_slice(), hole.as_slice()];
        others.extend(holes[h + 1..].iter().map(Vec::as_slice));

        let bridge = candidates.into_iter().find(|&vi| {
            let v = merged[vi];
            let mid = m.midpoint(v);
            visible(m, v, &others) && point_in_ring(mid, &merged) && !point_in_ring(mid, hole)
        });

        let Some(vi) = bridge else {
            log::warn!("hole with {} vertices has no visible bridge, skipping", hole.len());
            skipped += 1;
            continue;
        };

        let v = merged[vi];
        let mut spliced = Vec::with_capacity(merged.len() + hole.len() + 2);
        spliced.extend_from_slice(&merged[..=vi]);
        spliced.extend(hole[m_idx..].iter().chain(hole[..m_idx].iter()).copied());
        spliced.push(m);
        spliced.push(v);
        spliced.extend_from_slice(&merged[vi + 1..]);
        merged = spliced;
    }

    (merged, skipped)
}

fn max_x(ring: &[Point]) -> f64 {
    ring.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
}

fn rightmost(ring: &[Point]) -> Option<usize> {
    ring.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.x.total_cmp(&b.x).then(b.y.total_cmp(&a.y)))
        .map(|(i, _)| i)
}
