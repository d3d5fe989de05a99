//! WASM bindings for frame-pair alignment.

use crate::types::{polygon_to_flat, rect_to_flat, vector_to_flat, JsImageFrame};
use framealign_core::{format_storage_size, FrameAlignment};
use wasm_bindgen::prelude::*;

/// JavaScript-accessible alignment of an image pair.
///
/// Holds both outlines for overlay drawing and the footprint overlap used to
/// decide whether a crop can be exported.
///
/// # Example (TypeScript)
/// ```typescript
/// const alignment = new JsFrameAlignment(maskFrame, sourceFrame);
/// drawPolygon(alignment.initial_outline(), 'Mask image border');
/// drawPolygon(alignment.target_outline(), 'Source image border');
/// if (alignment.has_overlap) {
///   exportCrop(alignment.overlap());
/// }
/// ```
#[wasm_bindgen]
pub struct JsFrameAlignment {
    inner: FrameAlignment,
}

#[wasm_bindgen]
impl JsFrameAlignment {
    /// Align `initial` onto `target`.
    #[wasm_bindgen(constructor)]
    pub fn new(initial: &JsImageFrame, target: &JsImageFrame) -> JsFrameAlignment {
        JsFrameAlignment {
            inner: FrameAlignment::compute(initial.frame(), target.frame()),
        }
    }

    /// Target border as a flat polygon in target pixels.
    pub fn target_outline(&self) -> Vec<f64> {
        polygon_to_flat(&self.inner.target_outline)
    }

    /// Initial border as displayed over the target, as a flat polygon.
    pub fn initial_outline(&self) -> Vec<f64> {
        polygon_to_flat(&self.inner.initial_outline)
    }

    /// Footprint overlap as `[x, y, width, height]`.
    pub fn overlap(&self) -> Vec<f64> {
        rect_to_flat(self.inner.overlap)
    }

    /// Center offset as `[dx, dy]` in target pixels.
    pub fn center_offset(&self) -> Vec<f64> {
        vector_to_flat(self.inner.center_offset)
    }

    #[wasm_bindgen(getter)]
    pub fn has_overlap(&self) -> bool {
        self.inner.has_overlap()
    }

    #[wasm_bindgen(getter)]
    pub fn estimated_output_pixels(&self) -> f64 {
        self.inner.estimated_output_pixels()
    }

    #[wasm_bindgen(getter)]
    pub fn exceeds_output_threshold(&self) -> bool {
        self.inner.exceeds_output_threshold()
    }

    /// Approximate export size in bytes (4 bytes per pixel).
    #[wasm_bindgen(getter)]
    pub fn estimated_storage_bytes(&self) -> f64 {
        self.inner.estimated_storage_bytes()
    }

    /// Export size as display text, e.g. "381 MB".
    pub fn storage_estimate(&self) -> String {
        format_storage_size(self.inner.estimated_storage_bytes())
    }
}
