//! Pixel-grid reframing between two axis-aligned images.
//!
//! A point `p` in the initial frame lands at
//! ```text
//! p' = p * initial_pixel_size / target_pixel_size + (c_target - c_initial) / target_pixel_size
//! ```
//! per axis, where `c` are the resolved physical centers. Rotation and
//! scale of the placement transforms are ignored here.

use log::trace;

use crate::frame::{resolve_center, ImageFrame};
use crate::geometry::{Point, Polygon, Vector};

/// Offset between the two frame centers, in target pixels.
pub fn center_difference(initial: &ImageFrame, target: &ImageFrame) -> Vector {
    let c0 = resolve_center(initial);
    let c1 = resolve_center(target);
    let ps = target.intrinsic_pixel_size;

    Vector::new((c1.x - c0.x) / ps.width, (c1.y - c0.y) / ps.height)
}

/// Map a point from initial pixel coordinates to target pixel coordinates.
pub fn map_point(p: Point, initial: &ImageFrame, target: &ImageFrame) -> Point {
    let d = center_difference(initial, target);
    trace!(
        "Reframing ({:.3}, {:.3}) from '{}' to '{}' (offset {:.3}, {:.3})",
        p.x,
        p.y,
        initial.location,
        target.location,
        d.x,
        d.y
    );
    reframe(p, initial, target, d)
}

/// Map every vertex of `poly` with [`map_point`], preserving order.
///
/// The empty polygon maps to the empty polygon.
pub fn map_polygon(poly: &Polygon, initial: &ImageFrame, target: &ImageFrame) -> Polygon {
    if poly.is_empty() {
        return Polygon::empty();
    }

    // The offset is the same for every vertex.
    let d = center_difference(initial, target);
    trace!(
        "Reframing {} vertices from '{}' to '{}' (offset {:.3}, {:.3})",
        poly.len(),
        initial.location,
        target.location,
        d.x,
        d.y
    );
    poly.map_vertices(|p| reframe(*p, initial, target, d))
}

#[inline]
fn reframe(p: Point, initial: &ImageFrame, target: &ImageFrame, d: Vector) -> Point {
    let from = initial.intrinsic_pixel_size;
    let to = target.intrinsic_pixel_size;

    Point::new(
        (from.width * p.x) / to.width + d.x,
        (from.height * p.y) / to.height + d.y,
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::mapping::test_frames::frame;
    use proptest::prelude::*;

    proptest! {
        /// Property: Mapping a frame onto itself is a no-op.
        #[test]
        fn prop_self_mapping_identity(
            (w, h) in (1u32..5000, 1u32..5000),
            pixel in 0.01f64..10.0,
            (x, y) in (-1e4f64..1e4, -1e4f64..1e4),
        ) {
            let f = frame(w, h, pixel);
            let p = Point::new(x, y);
            let q = map_point(p, &f, &f);
            prop_assert!((q.x - p.x).abs() < 1e-9 && (q.y - p.y).abs() < 1e-9);
        }

        /// Property: Mapping there and back returns the original point.
        #[test]
        fn prop_there_and_back(
            (wa, ha, wb, hb) in (1u32..5000, 1u32..5000, 1u32..5000, 1u32..5000),
            (pa, pb) in (0.05f64..10.0, 0.05f64..10.0),
            (x, y) in (-1e4f64..1e4, -1e4f64..1e4),
        ) {
            let a = frame(wa, ha, pa);
            let b = frame(wb, hb, pb);
            let p = Point::new(x, y);
            let back = map_point(map_point(p, &a, &b), &b, &a);
            prop_assert!((back.x - p.x).abs() < 1e-6, "x: {} vs {}", back.x, p.x);
            prop_assert!((back.y - p.y).abs() < 1e-6, "y: {} vs {}", back.y, p.y);
        }

        /// Property: Polygon mapping preserves vertex count.
        #[test]
        fn prop_vertex_count_preserved(n in 0usize..32, pixel in 0.1f64..4.0) {
            let a = frame(100, 100, 1.0);
            let b = frame(50, 70, pixel);
            let poly = Polygon::new((0..n).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect());
            prop_assert_eq!(map_polygon(&poly, &a, &b).len(), n);
        }
    }
}
