//! Placement transform of an image on the shared viewer canvas.
//!
//! A transform is applied in this order:
//! 1. Rotate about `center` by `rotation` degrees
//! 2. Scale about `center` by `scale`
//! 3. Translate by `translation`
//!
//! Forward application to a point `p`:
//! ```text
//! q  = R(θ) * (p - c)
//! p' = S * q + c + t
//! ```
//! The inverse undoes the three steps in reverse order.
//!
//! Rotation is positive counter-clockwise in a y-up frame (the usual
//! `x cos - y sin`, `x sin + y cos` matrix).

use serde::{Deserialize, Serialize};

use crate::error::{Axis, FrameError};
use crate::geometry::{Point, Polygon, Vector};

/// Which way to apply a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransformDirection {
    #[default]
    Forward,
    Inverse,
}

/// Scale, rotation and translation about a center of rotation.
///
/// A `center` of exactly `(0, 0)` means the center was never set. Frame
/// center resolution replaces it with the image midpoint; the transform
/// itself still rotates and scales about the origin in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    /// Offset applied last.
    pub translation: Vector,
    /// Per-axis scale factor. Must be strictly positive.
    pub scale: Vector,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Center of rotation and scaling.
    pub center: Point,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn new(translation: Vector, scale: Vector, rotation: f64, center: Point) -> Self {
        Self {
            translation,
            scale,
            rotation,
            center,
        }
    }

    /// The transform that leaves every point unchanged.
    pub fn identity() -> Self {
        Self {
            translation: Vector::default(),
            scale: Vector::new(1.0, 1.0),
            rotation: 0.0,
            center: Point::default(),
        }
    }

    pub fn with_translation(mut self, translation: Vector) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_scale(mut self, scale: Vector) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Check if the transform moves no point.
    ///
    /// The center is irrelevant when there is no rotation or scaling.
    pub fn is_identity(&self) -> bool {
        self.translation == Vector::default()
            && self.scale == Vector::new(1.0, 1.0)
            && self.rotation % 360.0 == 0.0
    }

    /// Check if the center still holds the unset `(0, 0)` sentinel.
    #[inline]
    pub fn has_unset_center(&self) -> bool {
        self.center.is_origin()
    }

    /// Reject non-finite components and non-positive scale.
    pub fn validate(&self) -> Result<(), FrameError> {
        let finite = [
            self.translation.x,
            self.translation.y,
            self.scale.x,
            self.scale.y,
            self.rotation,
            self.center.x,
            self.center.y,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(FrameError::NonFiniteTransform);
        }
        if self.scale.x <= 0.0 {
            return Err(FrameError::InvalidScale {
                axis: Axis::X,
                value: self.scale.x,
            });
        }
        if self.scale.y <= 0.0 {
            return Err(FrameError::InvalidScale {
                axis: Axis::Y,
                value: self.scale.y,
            });
        }
        Ok(())
    }

    /// Apply the transform to a point.
    pub fn apply(&self, p: Point) -> Point {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;

        let rx = dx * cos - dy * sin;
        let ry = dx * sin + dy * cos;

        Point::new(
            rx * self.scale.x + self.center.x + self.translation.x,
            ry * self.scale.y + self.center.y + self.translation.y,
        )
    }

    /// Undo [`apply`](Self::apply).
    ///
    /// Scale must be non-zero on both axes.
    pub fn apply_inverse(&self, p: Point) -> Point {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let sx = (p.x - self.translation.x - self.center.x) / self.scale.x;
        let sy = (p.y - self.translation.y - self.center.y) / self.scale.y;

        // R(-θ)
        let dx = sx * cos + sy * sin;
        let dy = -sx * sin + sy * cos;

        Point::new(dx + self.center.x, dy + self.center.y)
    }

    pub fn apply_direction(&self, p: Point, direction: TransformDirection) -> Point {
        match direction {
            TransformDirection::Forward => self.apply(p),
            TransformDirection::Inverse => self.apply_inverse(p),
        }
    }

    /// Apply the transform to every vertex, keeping count and order.
    pub fn apply_polygon(&self, poly: &Polygon, direction: TransformDirection) -> Polygon {
        poly.map_vertices(|p| self.apply_direction(*p, direction))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
