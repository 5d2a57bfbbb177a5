use proptest::prelude::*;
use vecfont_core::{Point, PolygonSet};
use vecfont_tess::Triangulator;

/// Star-shaped ring around `center`; such rings never self-intersect
fn star(center: Point, radii: &[f64], reverse: bool) -> Vec<Point> {
    let n = radii.len();
    let mut ring: Vec<Point> = radii
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let t = i as f64 / n as f64 * std::f64::consts::TAU;
            Point::new(center.x + r * t.cos(), center.y + r * t.sin())
        })
        .collect();
    if reverse {
        ring.reverse();
    }
    ring
}

proptest! {
    #[test]
    fn prop_triangle_area_matches_polygon_area(
        radii in prop::collection::vec(1.0f64..50.0, 3..40),
        reverse in any::<bool>(),
    ) {
        let mut set = PolygonSet::new();
        set.add_outline(star(Point::ZERO, &radii, reverse));

        let triangles = Triangulator::new().triangles(&set).unwrap();
        let total: f64 = triangles.iter().map(|t| t.area()).sum();
        prop_assert!((total - set.area()).abs() < 1e-6 * set.area().max(1.0));
        prop_assert_eq!(triangles.len(), radii.len() - 2);
    }

    #[test]
    fn prop_hole_area_is_removed(
        radii in prop::collection::vec(60.0f64..100.0, 3..24),
        hole_side in 1.0f64..20.0,
    ) {
        let mut set = PolygonSet::new();
        let idx = set.add_outline(star(Point::ZERO, &radii, false));
        let h = hole_side / 2.0;
        set.add_hole(
            vec![
                Point::new(-h, -h),
                Point::new(h, -h),
                Point::new(h, h),
                Point::new(-h, h),
            ],
            idx,
        );

        let triangles = Triangulator::new().triangles(&set).unwrap();
        let total: f64 = triangles.iter().map(|t| t.area()).sum();
        prop_assert!((total - set.area()).abs() < 1e-6 * set.area());
        for t in &triangles {
            let c = t.centroid();
            prop_assert!(!(c.x.abs() < h && c.y.abs() < h));
        }
    }
}
