//! WASM-compatible wrapper types for frames and flat geometry.
//!
//! Geometry crosses the JS boundary as flat `Float64Array`s:
//! - points and vectors: `[x, y]`
//! - rectangles: `[x, y, width, height]`
//! - polygons: `[x0, y0, x1, y1, ...]`

use framealign_core::{
    AffineTransform, FrameMetadata, ImageFrame, PixelSize, Point, Polygon, Rect, Vector,
};
use wasm_bindgen::prelude::*;

/// An image frame handle for JavaScript.
///
/// Wraps the core `ImageFrame`. Build one per loaded image and pass pairs of
/// handles to the mapping functions.
///
/// # Example (TypeScript)
/// ```typescript
/// const source = new JsImageFrame(40000, 30000, 0.25, 0.25);
/// source.set_transform(120.0, -40.0, 1.0, 1.0, 3.5, 0.0, 0.0);
///
/// const mask = JsImageFrame.from_metadata({
///   location: 'mask.tif',
///   width: 10000,
///   height: 7500,
///   pixel_size_x: 1.0,
///   pixel_size_y: 1.0,
/// });
/// ```
#[wasm_bindgen]
pub struct JsImageFrame {
    inner: ImageFrame,
}

#[wasm_bindgen]
impl JsImageFrame {
    /// Create a frame with an identity placement transform.
    ///
    /// # Arguments
    /// * `width`, `height` - Image dimensions in pixels
    /// * `pixel_width`, `pixel_height` - Pixel size in micrometres
    ///
    /// # Errors
    /// Returns error if a pixel size is not strictly positive
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        pixel_width: f64,
        pixel_height: f64,
    ) -> Result<JsImageFrame, JsValue> {
        let meta = FrameMetadata {
            pixel_size_x: Some(pixel_width),
            pixel_size_y: Some(pixel_height),
            width,
            height,
            ..Default::default()
        };
        let inner = ImageFrame::from_metadata(meta).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsImageFrame { inner })
    }

    /// Create a frame from a loader metadata object.
    ///
    /// Missing pixel sizes and user spacing default to 1.0 µm.
    ///
    /// # Errors
    /// Returns error if the object cannot be deserialized or holds invalid
    /// values
    pub fn from_metadata(metadata: JsValue) -> Result<JsImageFrame, JsValue> {
        let meta: FrameMetadata = serde_wasm_bindgen::from_value(metadata)
            .map_err(|e| JsValue::from_str(&format!("Invalid frame metadata: {}", e)))?;
        let inner = ImageFrame::from_metadata(meta).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsImageFrame { inner })
    }

    /// Replace the placement transform.
    ///
    /// Translation and center are in micrometres, rotation in degrees.
    #[allow(clippy::too_many_arguments)]
    pub fn set_transform(
        &mut self,
        tx: f64,
        ty: f64,
        sx: f64,
        sy: f64,
        rotation: f64,
        cx: f64,
        cy: f64,
    ) -> Result<(), JsValue> {
        let transform = AffineTransform::new(
            Vector::new(tx, ty),
            Vector::new(sx, sy),
            rotation,
            Point::new(cx, cy),
        );
        let updated = self.inner.clone().with_transform(transform);
        self.replace(updated)
    }

    /// Replace the pixel spacing set in the viewer's transform control.
    pub fn set_user_pixel_spacing(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        let updated = self
            .inner
            .clone()
            .with_user_pixel_spacing(PixelSize::new(width, height));
        self.replace(updated)
    }

    pub fn set_location(&mut self, location: String) {
        self.inner.location = location;
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.pixel_dimensions.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.pixel_dimensions.height
    }

    #[wasm_bindgen(getter)]
    pub fn pixel_width(&self) -> f64 {
        self.inner.intrinsic_pixel_size.width
    }

    #[wasm_bindgen(getter)]
    pub fn pixel_height(&self) -> f64 {
        self.inner.intrinsic_pixel_size.height
    }

    #[wasm_bindgen(getter)]
    pub fn location(&self) -> String {
        self.inner.location.clone()
    }

    /// Full frame description as a plain JS object, for reporting.
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsImageFrame {
    /// Wrap an already validated core frame.
    pub fn from_frame(inner: ImageFrame) -> Self {
        Self { inner }
    }

    pub fn frame(&self) -> &ImageFrame {
        &self.inner
    }

    fn replace(&mut self, updated: ImageFrame) -> Result<(), JsValue> {
        updated
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner = updated;
        Ok(())
    }
}

pub(crate) fn point_to_flat(p: Point) -> Vec<f64> {
    vec![p.x, p.y]
}

pub(crate) fn vector_to_flat(v: Vector) -> Vec<f64> {
    vec![v.x, v.y]
}

pub(crate) fn rect_to_flat(r: Rect) -> Vec<f64> {
    vec![r.x, r.y, r.width, r.height]
}

pub(crate) fn polygon_to_flat(poly: &Polygon) -> Vec<f64> {
    poly.vertices().iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Parse `[x0, y0, x1, y1, ...]` into a polygon.
///
/// Returns an error message for odd-length input.
pub(crate) fn polygon_from_flat(coords: &[f64]) -> Result<Polygon, String> {
    if coords.len() % 2 != 0 {
        return Err(format!(
            "Polygon coordinates must come in x, y pairs (got {} values)",
            coords.len()
        ));
    }
    Ok(Polygon::new(
        coords
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect(),
    ))
}

/// Frame used by binding tests.
#[cfg(test)]
pub(crate) fn test_frame(width: u32, height: u32, pixel: f64) -> JsImageFrame {
    JsImageFrame::from_frame(ImageFrame::new(
        framealign_core::ImageSize::new(width, height),
        PixelSize::new(pixel, pixel),
    ))
}
