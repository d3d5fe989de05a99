//! Rectangle outlines and frame footprint overlap.

use crate::frame::ImageFrame;
use crate::geometry::{Point, Polygon, Rect};

/// Convert a rectangle to its 4-vertex outline.
///
/// Vertices run `(x_min, y_max), (x_max, y_max), (x_max, y_min),
/// (x_min, y_min)`: bottom-left first in y-down pixel space, then
/// clockwise. An empty rectangle yields the empty polygon.
pub fn rect_to_polygon(r: &Rect) -> Polygon {
    if r.is_empty() {
        return Polygon::empty();
    }

    let (x_min, y_min, x_max, y_max) = (r.x, r.y, r.x_max(), r.y_max());
    Polygon::new(vec![
        Point::new(x_min, y_max),
        Point::new(x_max, y_max),
        Point::new(x_max, y_min),
        Point::new(x_min, y_min),
    ])
}

/// Intersect the full-extent rectangles of two frames.
///
/// Each footprint is taken in its own frame's pixel space; no cross-frame
/// mapping is applied. An empty result means the images do not overlap,
/// which callers handle as a normal outcome.
pub fn intersect_footprints(a: &ImageFrame, b: &ImageFrame) -> Rect {
    a.footprint().intersection(&b.footprint())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ImageSize, PixelSize};
    use crate::mapping::map_polygon;

    fn frame(width: u32, height: u32) -> ImageFrame {
        ImageFrame::new(ImageSize::new(width, height), PixelSize::default())
    }

    #[test]
    fn test_vertex_order() {
        let poly = rect_to_polygon(&Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(
            poly.vertices(),
            &[
                Point::new(0.0, 20.0),
                Point::new(10.0, 20.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_offset_rect() {
        let poly = rect_to_polygon(&Rect::new(5.0, -3.0, 2.0, 4.0));
        assert_eq!(
            poly.vertices(),
            &[
                Point::new(5.0, 1.0),
                Point::new(7.0, 1.0),
                Point::new(7.0, -3.0),
                Point::new(5.0, -3.0),
            ]
        );
    }

    #[test]
    fn test_empty_rect_gives_empty_polygon() {
        assert!(rect_to_polygon(&Rect::new(0.0, 0.0, 0.0, 10.0)).is_empty());
        assert!(rect_to_polygon(&Rect::new(3.0, 3.0, 10.0, -1.0)).is_empty());

        // And stays empty through mapping
        let empty = rect_to_polygon(&Rect::default());
        let a = frame(10, 10);
        let b = ImageFrame::new(ImageSize::new(5, 5), PixelSize::new(2.0, 2.0));
        assert!(map_polygon(&empty, &a, &b).is_empty());
    }

    #[test]
    fn test_polygon_bounds_round_trip() {
        let r = Rect::new(1.5, 2.5, 30.0, 40.0);
        assert_eq!(rect_to_polygon(&r).bounding_rect(), r);
    }

    #[test]
    fn test_identical_frames_intersect_fully() {
        let a = frame(640, 480);
        let b = frame(640, 480);
        assert_eq!(intersect_footprints(&a, &b), Rect::new(0.0, 0.0, 640.0, 480.0));
    }

    #[test]
    fn test_different_sizes_intersect_to_smaller() {
        let a = frame(640, 480);
        let b = frame(300, 900);
        assert_eq!(intersect_footprints(&a, &b), Rect::new(0.0, 0.0, 300.0, 480.0));
    }

    #[test]
    fn test_zero_size_frame_does_not_overlap() {
        let a = frame(640, 480);
        let b = frame(0, 480);
        assert!(intersect_footprints(&a, &b).is_empty());
        assert!(intersect_footprints(&b, &a).is_empty());
    }

    #[test]
    fn test_pixel_size_does_not_affect_footprint_overlap() {
        let a = ImageFrame::new(ImageSize::new(100, 100), PixelSize::new(0.25, 0.25));
        let b = ImageFrame::new(ImageSize::new(100, 100), PixelSize::new(4.0, 4.0));
        assert_eq!(intersect_footprints(&a, &b), Rect::new(0.0, 0.0, 100.0, 100.0));
    }
}
