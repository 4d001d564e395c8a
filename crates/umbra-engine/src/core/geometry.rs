//! Shared 2D geometry helpers for the shadow system and collision code.

use glam::Vec2;

/// Even-odd (ray casting) point-in-polygon test.
///
/// Walks each edge `(polygon[i], polygon[j])` with `j` trailing `i` and
/// counts a crossing when the point's y lies between the edge's y-extents
/// (one bound inclusive, one exclusive, so shared vertices are not counted
/// twice) and the point is left of the edge at that y. Odd crossing count
/// means inside.
///
/// Polygons with fewer than 3 points contain nothing.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let pi = polygon[i];
        let pj = polygon[j];

        let crosses = (pi.y > point.y) != (pj.y > point.y);
        if crosses && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Normalize a vector, returning `Vec2::ZERO` when the magnitude is zero.
///
/// Callers that extend points along light rays rely on the zero-vector
/// fallback: a light exactly on an occluder corner must not produce NaNs.
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    v.try_normalize().unwrap_or(Vec2::ZERO)
}

/// Axis-aligned overlap test for two center-anchored rectangles.
pub fn aabb_overlap(center_a: Vec2, size_a: Vec2, center_b: Vec2, size_b: Vec2) -> bool {
    (center_a.x - center_b.x).abs() < (size_a.x + size_b.x) / 2.0
        && (center_a.y - center_b.y).abs() < (size_a.y + size_b.y) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(-10.0, -10.0),
            Vec2::new(10.0, -10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(-10.0, 10.0),
        ]
    }

    #[test]
    fn point_inside_square() {
        assert!(point_in_polygon(Vec2::ZERO, &square()));
        assert!(point_in_polygon(Vec2::new(9.0, -9.0), &square()));
    }

    #[test]
    fn point_outside_square() {
        assert!(!point_in_polygon(Vec2::new(11.0, 0.0), &square()));
        assert!(!point_in_polygon(Vec2::new(0.0, -20.0), &square()));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        assert!(!point_in_polygon(Vec2::ZERO, &[]));
        assert!(!point_in_polygon(Vec2::ZERO, &[Vec2::ZERO]));
        assert!(!point_in_polygon(
            Vec2::ZERO,
            &[Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0)]
        ));
    }

    #[test]
    fn containment_invariant_under_cyclic_rotation() {
        let poly = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, 10.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(10.0, 60.0),
            Vec2::new(-20.0, 30.0),
        ];
        let probes = [
            Vec2::new(20.0, 30.0),
            Vec2::new(-30.0, 30.0),
            Vec2::new(45.0, 15.0),
            Vec2::new(0.0, 55.0),
        ];
        for probe in probes {
            let expected = point_in_polygon(probe, &poly);
            for shift in 1..poly.len() {
                let mut rotated = poly.clone();
                rotated.rotate_left(shift);
                assert_eq!(
                    point_in_polygon(probe, &rotated),
                    expected,
                    "probe {probe:?} changed containment at rotation {shift}"
                );
            }
        }
    }

    #[test]
    fn normalize_or_zero_handles_zero_vector() {
        assert_eq!(normalize_or_zero(Vec2::ZERO), Vec2::ZERO);
        let n = normalize_or_zero(Vec2::new(3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn aabb_overlap_detects_touching_and_separated() {
        let size = Vec2::new(20.0, 20.0);
        assert!(aabb_overlap(Vec2::ZERO, size, Vec2::new(15.0, 0.0), size));
        assert!(!aabb_overlap(Vec2::ZERO, size, Vec2::new(25.0, 0.0), size));
        // Edge contact is not overlap.
        assert!(!aabb_overlap(Vec2::ZERO, size, Vec2::new(20.0, 0.0), size));
    }
}
