//! Image frame descriptors.
//!
//! An [`ImageFrame`] bundles everything the mapping code needs to know
//! about one loaded image: its placement transform on the viewer canvas,
//! its two pixel spacings, and its pixel dimensions.
//!
//! # Units
//!
//! Every physical quantity is in micrometres (µm):
//! - `intrinsic_pixel_size` and `user_pixel_spacing` are µm per pixel
//! - transform `center` and `translation` are µm on the shared canvas
//!
//! Pixel coordinates are y-down with the origin at the top-left corner.
//!
//! # Lifecycle
//!
//! Frames are built once per image load, either directly or from raw
//! loader output via [`ImageFrame::from_metadata`], and are never mutated by
//! the mapping functions.

mod center;
mod types;

pub use center::resolve_center;
pub use types::{ColorModel, FrameMetadata, ImageFrame, PixelType};
