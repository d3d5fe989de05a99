//! WASM bindings for cross-frame mapping.
//!
//! Each function mirrors the core operation of the same name and works on
//! flat coordinate arrays (see `types`). Mapping always runs from the
//! `initial` frame into the `target` frame.

use crate::types::{
    point_to_flat, polygon_from_flat, polygon_to_flat, rect_to_flat, vector_to_flat, JsImageFrame,
};
use framealign_core::{
    center_difference as core_center_difference, intersect_footprints as core_intersect,
    map_point as core_map_point, map_polygon as core_map_polygon,
    rect_to_polygon as core_rect_to_polygon, resolve_center as core_resolve_center,
    transform_polygon as core_transform_polygon, Point, Rect,
};
use wasm_bindgen::prelude::*;

/// Effective physical center of a frame as `[x, y]` in micrometres.
#[wasm_bindgen]
pub fn resolve_center(frame: &JsImageFrame) -> Vec<f64> {
    point_to_flat(core_resolve_center(frame.frame()))
}

/// Center offset from `initial` to `target` as `[dx, dy]` in target pixels.
#[wasm_bindgen]
pub fn center_difference(initial: &JsImageFrame, target: &JsImageFrame) -> Vec<f64> {
    vector_to_flat(core_center_difference(initial.frame(), target.frame()))
}

/// Map one point from initial pixel coordinates to target pixel coordinates.
///
/// # Example (TypeScript)
/// ```typescript
/// const [x, y] = map_point(120, 80, maskFrame, sourceFrame);
/// ```
#[wasm_bindgen]
pub fn map_point(x: f64, y: f64, initial: &JsImageFrame, target: &JsImageFrame) -> Vec<f64> {
    point_to_flat(core_map_point(Point::new(x, y), initial.frame(), target.frame()))
}

/// Map a flat polygon `[x0, y0, x1, y1, ...]` into target pixel coordinates.
///
/// # Errors
/// Returns error if the coordinate array has odd length
#[wasm_bindgen]
pub fn map_polygon(
    coords: &[f64],
    initial: &JsImageFrame,
    target: &JsImageFrame,
) -> Result<Vec<f64>, JsValue> {
    let poly = polygon_from_flat(coords).map_err(|e| JsValue::from_str(&e))?;
    let mapped = core_map_polygon(&poly, initial.frame(), target.frame());
    Ok(polygon_to_flat(&mapped))
}

/// Place a flat polygon on the target's as-displayed canvas.
///
/// # Errors
/// Returns error if the coordinate array has odd length
#[wasm_bindgen]
pub fn transform_polygon(
    coords: &[f64],
    initial: &JsImageFrame,
    target: &JsImageFrame,
) -> Result<Vec<f64>, JsValue> {
    let poly = polygon_from_flat(coords).map_err(|e| JsValue::from_str(&e))?;
    let placed = core_transform_polygon(&poly, initial.frame(), target.frame());
    Ok(polygon_to_flat(&placed))
}

/// Outline of a rectangle as a flat 4-vertex polygon (empty for an empty rect).
#[wasm_bindgen]
pub fn rect_to_polygon(x: f64, y: f64, width: f64, height: f64) -> Vec<f64> {
    polygon_to_flat(&core_rect_to_polygon(&Rect::new(x, y, width, height)))
}

/// Intersection of both frames' footprints as `[x, y, width, height]`.
///
/// A zero width or height means the images do not overlap.
#[wasm_bindgen]
pub fn intersect_footprints(a: &JsImageFrame, b: &JsImageFrame) -> Vec<f64> {
    rect_to_flat(core_intersect(a.frame(), b.frame()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_frame;

    #[test]
    fn test_resolve_center_default() {
        let frame = test_frame(200, 100, 0.5);
        assert_eq!(resolve_center(&frame), vec![50.0, 25.0]);
    }

    #[test]
    fn test_map_point_rescales() {
        let mut a = test_frame(100, 100, 1.0);
        let mut b = test_frame(100, 100, 2.0);
        a.set_transform(0.0, 0.0, 1.0, 1.0, 0.0, 40.0, 40.0).unwrap();
        b.set_transform(0.0, 0.0, 1.0, 1.0, 0.0, 40.0, 40.0).unwrap();
        assert_eq!(map_point(10.0, 10.0, &a, &b), vec![5.0, 5.0]);
        assert_eq!(center_difference(&a, &b), vec![0.0, 0.0]);
    }

    #[test]
    fn test_map_polygon_flat() {
        let a = test_frame(100, 50, 1.0);
        let b = test_frame(100, 100, 2.0);
        let out = map_polygon(&[10.0, 20.0, 0.0, 0.0], &a, &b).unwrap();
        assert_eq!(out, vec![30.0, 47.5, 25.0, 37.5]);
    }

    #[test]
    fn test_map_polygon_empty() {
        let a = test_frame(10, 10, 1.0);
        assert!(map_polygon(&[], &a, &a).unwrap().is_empty());
    }

    #[test]
    fn test_transform_polygon_translation() {
        let mut a = test_frame(100, 100, 1.0);
        a.set_transform(10.0, -4.0, 1.0, 1.0, 0.0, 0.0, 0.0).unwrap();
        let b = test_frame(100, 100, 2.0);
        let out = transform_polygon(&[0.0, 0.0, 10.0, 10.0], &a, &b).unwrap();
        assert_eq!(out, vec![5.0, -2.0, 15.0, 8.0]);
    }

    #[test]
    fn test_rect_to_polygon_order() {
        assert_eq!(
            rect_to_polygon(0.0, 0.0, 10.0, 20.0),
            vec![0.0, 20.0, 10.0, 20.0, 10.0, 0.0, 0.0, 0.0]
        );
        assert!(rect_to_polygon(0.0, 0.0, 0.0, 20.0).is_empty());
    }

    #[test]
    fn test_intersect_footprints() {
        let a = test_frame(640, 480, 1.0);
        let b = test_frame(300, 900, 0.5);
        assert_eq!(intersect_footprints(&a, &b), vec![0.0, 0.0, 300.0, 480.0]);

        let empty = test_frame(0, 10, 1.0);
        assert_eq!(intersect_footprints(&a, &empty), vec![0.0, 0.0, 0.0, 0.0]);
    }
}
