//! One-shot alignment of an image pair for overlay and crop decisions.
//!
//! Callers rebuild a [`FrameAlignment`] whenever a new frame pair is loaded;
//! nothing is cached between pairs.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::footprint::{intersect_footprints, rect_to_polygon};
use crate::frame::ImageFrame;
use crate::geometry::{Polygon, Rect, Vector};
use crate::mapping::{center_difference, map_polygon, transform_polygon};

/// Overlap area (in pixels) above which a crop export is considered large.
///
/// 1e8 pixels is roughly 400 MB of RGBA data.
pub const LARGE_OUTPUT_PIXELS: f64 = 1e8;

/// Bytes per output pixel assumed by storage estimates (8-bit RGBA).
pub const BYTES_PER_PIXEL: f64 = 4.0;

const STORAGE_UNITS: [&str; 5] = ["bytes", "kB", "MB", "GB", "TB"];

/// Geometry derived from an `(initial, target)` frame pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameAlignment {
    /// Border of the target image in its own pixel space.
    pub target_outline: Polygon,
    /// Border of the initial image as displayed over the target.
    pub initial_outline: Polygon,
    /// Intersection of both footprints. Empty when the images do not overlap.
    pub overlap: Rect,
    /// Center offset from initial to target, in target pixels.
    pub center_offset: Vector,
}

impl FrameAlignment {
    /// Align `initial` onto `target`.
    ///
    /// The initial border is reframed onto the target pixel grid and then
    /// placed using both frames' placement transforms.
    pub fn compute(initial: &ImageFrame, target: &ImageFrame) -> Self {
        let target_outline = rect_to_polygon(&target.footprint());

        let initial_border = rect_to_polygon(&initial.footprint());
        let reframed = map_polygon(&initial_border, initial, target);
        let initial_outline = transform_polygon(&reframed, initial, target);

        let overlap = intersect_footprints(initial, target);
        let center_offset = center_difference(initial, target);

        debug!(
            "Aligned '{}' onto '{}': center offset ({:.3}, {:.3}) px, overlap {}x{}",
            initial.location,
            target.location,
            center_offset.x,
            center_offset.y,
            overlap.width,
            overlap.height
        );

        let alignment = Self {
            target_outline,
            initial_outline,
            overlap,
            center_offset,
        };
        if alignment.exceeds_output_threshold() {
            warn!(
                "Overlap of {:.0} pixels (about {}) exceeds the large output threshold of {:.0}",
                alignment.estimated_output_pixels(),
                format_storage_size(alignment.estimated_storage_bytes()),
                LARGE_OUTPUT_PIXELS
            );
        }
        alignment
    }

    /// Check if the two footprints overlap at all.
    pub fn has_overlap(&self) -> bool {
        !self.overlap.is_empty()
    }

    /// Number of pixels a crop to the overlap would produce (0 if empty).
    pub fn estimated_output_pixels(&self) -> f64 {
        self.overlap.area()
    }

    pub fn exceeds_output_threshold(&self) -> bool {
        self.estimated_output_pixels() > LARGE_OUTPUT_PIXELS
    }

    /// Approximate size of a cropped export at [`BYTES_PER_PIXEL`].
    pub fn estimated_storage_bytes(&self) -> f64 {
        self.estimated_output_pixels() * BYTES_PER_PIXEL
    }
}

/// Format a byte count with 1024-based units and three significant digits,
/// e.g. `"381 MB"` or `"1.5 kB"`. Anything below one byte is `"0 bytes"`.
pub fn format_storage_size(bytes: f64) -> String {
    if bytes.is_nan() || bytes < 1.0 {
        return "0 bytes".to_string();
    }

    let power = ((bytes.ln() / 1024f64.ln()) as usize).min(STORAGE_UNITS.len() - 1);
    let value = bytes / 1024f64.powi(power as i32);
    let decimals = if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    };

    let text = format!("{:.*}", decimals, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    format!("{} {}", text, STORAGE_UNITS[power])
}
