//! Effective physical center of a frame.

use super::ImageFrame;
use crate::geometry::Point;

/// Resolve the physical center (µm) used when comparing two frames.
///
/// An explicit transform center is returned unchanged. The unset sentinel
/// `(0, 0)` is replaced by the physical midpoint of the image, i.e. the
/// image is assumed to be centered on itself.
pub fn resolve_center(frame: &ImageFrame) -> Point {
    let center = frame.transform.center;
    if !center.is_origin() {
        return center;
    }

    let (extent_x, extent_y) = frame.physical_extent();
    Point::new(extent_x / 2.0, extent_y / 2.0)
}
