//! Framealign Core - coordinate-frame reconciliation for image pairs
//!
//! This crate expresses geometry defined in one image's pixel space in the
//! pixel space of another image, when each image carries its own placement
//! transform, physical pixel size and pixel dimensions.
//!
//! # Module Structure
//!
//! - `geometry` - Points, vectors, sizes, rectangles and polygons
//! - `transform` - Placement transform (rotate, scale, translate about a center)
//! - `frame` - Image frame descriptors and center resolution
//! - `mapping` - Cross-frame point and polygon mapping
//! - `footprint` - Rectangle outlines and footprint intersection
//! - `align` - Per-pair alignment used for overlays and crop decisions
//!
//! All operations are pure functions over immutable values; nothing here
//! reads pixels or touches the filesystem.
//!
//! # Example
//!
//! ```ignore
//! use framealign_core::{map_point, ImageFrame, ImageSize, PixelSize, Point};
//!
//! let fine = ImageFrame::new(ImageSize::new(4000, 3000), PixelSize::new(0.25, 0.25));
//! let coarse = ImageFrame::new(ImageSize::new(1000, 750), PixelSize::new(1.0, 1.0));
//! let p = map_point(Point::new(2000.0, 1500.0), &fine, &coarse);
//! ```

pub mod align;
pub mod error;
pub mod footprint;
pub mod frame;
pub mod geometry;
pub mod mapping;
pub mod transform;

pub use align::{format_storage_size, FrameAlignment, BYTES_PER_PIXEL, LARGE_OUTPUT_PIXELS};
pub use error::{Axis, FrameError};
pub use footprint::{intersect_footprints, rect_to_polygon};
pub use frame::{resolve_center, ColorModel, FrameMetadata, ImageFrame, PixelType};
pub use geometry::{ImageSize, PixelSize, Point, Polygon, Rect, Vector};
pub use mapping::{center_difference, map_point, map_polygon, transform_polygon};
pub use transform::{AffineTransform, TransformDirection};
