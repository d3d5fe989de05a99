//! Placement reconciliation on the target's as-displayed canvas.
//!
//! Both placement transforms are re-expressed in target pixel units and
//! rebuilt about the origin:
//!
//! ```text
//! T_initial' : scale s_i, rotation r_i, translation t_i / ps_target - (s_i - 1) * c_i
//! T_target'  : scale s_t, rotation r_t, translation t_t / ps_target
//! ```
//!
//! A vertex is first pulled back through `T_target'` and then pushed
//! forward through `T_initial'`. The `(s_i - 1) * c_i` term moves the
//! initial transform's scaling from its own center to the origin. The
//! target transform gets no such term, so the mapping is exact only when
//! `(s - 1) * c` vanishes for the frames involved.

use log::trace;

use crate::frame::ImageFrame;
use crate::geometry::{Point, Polygon, Vector};
use crate::transform::{AffineTransform, TransformDirection};

/// Reconcile `poly` from the initial placement onto the target's canvas.
///
/// `poly` is in target pixel coordinates (typically the output of
/// [`map_polygon`](super::map_polygon)). The empty polygon is returned
/// as-is without building any transform.
pub fn transform_polygon(poly: &Polygon, initial: &ImageFrame, target: &ImageFrame) -> Polygon {
    if poly.is_empty() {
        return Polygon::empty();
    }

    let initial_space = initial_in_target_units(initial, target);
    let target_space = target_in_target_units(target);
    trace!(
        "Placing {} vertices: initial {:?}, target {:?}",
        poly.len(),
        initial_space,
        target_space
    );

    let unplaced = target_space.apply_polygon(poly, TransformDirection::Inverse);
    initial_space.apply_polygon(&unplaced, TransformDirection::Forward)
}

fn initial_in_target_units(initial: &ImageFrame, target: &ImageFrame) -> AffineTransform {
    let tr = &initial.transform;
    let ps = target.intrinsic_pixel_size;

    let translation = Vector::new(
        tr.translation.x / ps.width - (tr.scale.x - 1.0) * tr.center.x,
        tr.translation.y / ps.height - (tr.scale.y - 1.0) * tr.center.y,
    );
    AffineTransform::new(translation, tr.scale, tr.rotation, Point::default())
}

fn target_in_target_units(target: &ImageFrame) -> AffineTransform {
    let tr = &target.transform;
    let ps = target.intrinsic_pixel_size;

    let translation = Vector::new(tr.translation.x / ps.width, tr.translation.y / ps.height);
    AffineTransform::new(translation, tr.scale, tr.rotation, Point::default())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
