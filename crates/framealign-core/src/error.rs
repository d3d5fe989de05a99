//! Errors raised while building frames from loader metadata.

use std::fmt;
use thiserror::Error;

/// Image axis a rejected value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Error types for frame construction.
///
/// Mapping operations never fail; only the boundary where raw metadata turns
/// into an [`ImageFrame`](crate::ImageFrame) does.
#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    /// Pixel size from image metadata is zero, negative or not finite.
    #[error("Invalid pixel size on {axis} axis: {value}")]
    InvalidPixelSize { axis: Axis, value: f64 },

    /// User-set pixel spacing is zero, negative or not finite.
    #[error("Invalid pixel spacing on {axis} axis: {value}")]
    InvalidPixelSpacing { axis: Axis, value: f64 },

    /// Placement transform scale is zero, negative or not finite.
    #[error("Invalid transform scale on {axis} axis: {value}")]
    InvalidScale { axis: Axis, value: f64 },

    /// Placement transform has a NaN or infinite component.
    #[error("Transform contains a non-finite value")]
    NonFiniteTransform,
}
