//! Frame descriptor and loader metadata types.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Axis, FrameError};
use crate::geometry::{ImageSize, PixelSize, Rect};
use crate::transform::AffineTransform;

/// Color model reported by the image source.
///
/// Carried through for reporting only; geometry never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorModel {
    #[default]
    Unknown,
    Gray,
    Rgb,
    Rgba,
    Bgra,
}

/// Storage type of a single channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelType {
    #[default]
    Unknown,
    U8,
    U16,
    U32,
    F32,
}

/// Raw description of a loaded image as handed over by the image loader.
///
/// Pixel size and user spacing are optional because slide metadata and
/// session files frequently omit them. Other omitted fields take the same
/// values as [`ImageFrame::new`]: visible, fully opaque, one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameMetadata {
    /// Path or URI of the image.
    pub location: String,
    /// Placement transform from the viewer.
    pub transform: AffineTransform,
    /// Metadata pixel size along x (µm).
    pub pixel_size_x: Option<f64>,
    /// Metadata pixel size along y (µm).
    pub pixel_size_y: Option<f64>,
    /// Spacing from the user-editable transform control (µm).
    pub user_pixel_spacing: Option<PixelSize>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of pyramid levels.
    pub level_count: u32,
    /// Display opacity (0 to 100).
    pub opacity: i32,
    /// Whether the image is shown in the viewer.
    pub visible: bool,
    pub color_model: ColorModel,
    pub pixel_type: PixelType,
}

impl Default for FrameMetadata {
    fn default() -> Self {
        Self {
            location: String::new(),
            transform: AffineTransform::identity(),
            pixel_size_x: None,
            pixel_size_y: None,
            user_pixel_spacing: None,
            width: 0,
            height: 0,
            level_count: 1,
            opacity: 100,
            visible: true,
            color_model: ColorModel::Unknown,
            pixel_type: PixelType::Unknown,
        }
    }
}

/// Immutable description of one image's pixel frame and canvas placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFrame {
    /// Path or URI of the image. Opaque to the geometry code.
    pub location: String,
    /// Placement transform on the shared viewer canvas.
    pub transform: AffineTransform,
    /// Spacing set by the user in the transform control (µm per pixel).
    pub user_pixel_spacing: PixelSize,
    /// Spacing read from image metadata (µm per pixel). Strictly positive.
    pub intrinsic_pixel_size: PixelSize,
    /// Image dimensions in pixels.
    pub pixel_dimensions: ImageSize,
    pub level_count: u32,
    pub opacity: i32,
    pub visible: bool,
    pub color_model: ColorModel,
    pub pixel_type: PixelType,
}

impl Default for ImageFrame {
    fn default() -> Self {
        Self::new(ImageSize::default(), PixelSize::default())
    }
}

impl ImageFrame {
    /// Create a frame with an identity transform and unit user spacing.
    ///
    /// `intrinsic_pixel_size` must be strictly positive on both axes.
    pub fn new(pixel_dimensions: ImageSize, intrinsic_pixel_size: PixelSize) -> Self {
        Self {
            location: String::new(),
            transform: AffineTransform::identity(),
            user_pixel_spacing: PixelSize::default(),
            intrinsic_pixel_size,
            pixel_dimensions,
            level_count: 1,
            opacity: 100,
            visible: true,
            color_model: ColorModel::Unknown,
            pixel_type: PixelType::Unknown,
        }
    }

    pub fn with_transform(mut self, transform: AffineTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_user_pixel_spacing(mut self, spacing: PixelSize) -> Self {
        self.user_pixel_spacing = spacing;
        self
    }

    /// Build a frame from loader output.
    ///
    /// Missing pixel-size axes and missing user spacing default to 1.0 µm.
    /// Values that are present but zero, negative or non-finite are
    /// rejected, as is an invalid transform.
    pub fn from_metadata(meta: FrameMetadata) -> Result<Self, FrameError> {
        meta.transform.validate()?;

        let intrinsic_pixel_size = PixelSize::new(
            resolve_pixel_size(&meta.location, Axis::X, meta.pixel_size_x)?,
            resolve_pixel_size(&meta.location, Axis::Y, meta.pixel_size_y)?,
        );

        let user_pixel_spacing = meta.user_pixel_spacing.unwrap_or_default();
        check_spacing(Axis::X, user_pixel_spacing.width)?;
        check_spacing(Axis::Y, user_pixel_spacing.height)?;

        Ok(Self {
            location: meta.location,
            transform: meta.transform,
            user_pixel_spacing,
            intrinsic_pixel_size,
            pixel_dimensions: ImageSize::new(meta.width, meta.height),
            level_count: meta.level_count,
            opacity: meta.opacity,
            visible: meta.visible,
            color_model: meta.color_model,
            pixel_type: meta.pixel_type,
        })
    }

    /// Check the invariants `from_metadata` establishes.
    ///
    /// Useful after a frame has been edited field by field.
    pub fn validate(&self) -> Result<(), FrameError> {
        self.transform.validate()?;
        let ps = self.intrinsic_pixel_size;
        for (axis, value) in [(Axis::X, ps.width), (Axis::Y, ps.height)] {
            if !is_valid_spacing(value) {
                return Err(FrameError::InvalidPixelSize { axis, value });
            }
        }
        check_spacing(Axis::X, self.user_pixel_spacing.width)?;
        check_spacing(Axis::Y, self.user_pixel_spacing.height)
    }

    /// The full-extent rectangle of this frame in its own pixel space.
    pub fn footprint(&self) -> Rect {
        Rect::from_size(self.pixel_dimensions)
    }

    /// Physical width and height of the whole image (µm).
    pub fn physical_extent(&self) -> (f64, f64) {
        (
            self.pixel_dimensions.width as f64 * self.intrinsic_pixel_size.width,
            self.pixel_dimensions.height as f64 * self.intrinsic_pixel_size.height,
        )
    }
}

fn is_valid_spacing(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn resolve_pixel_size(location: &str, axis: Axis, value: Option<f64>) -> Result<f64, FrameError> {
    match value {
        Some(v) if is_valid_spacing(v) => Ok(v),
        Some(v) => Err(FrameError::InvalidPixelSize { axis, value: v }),
        None => {
            warn!(
                "No {} pixel size in metadata for '{}', assuming 1.0 um",
                axis, location
            );
            Ok(1.0)
        }
    }
}

fn check_spacing(axis: Axis, value: f64) -> Result<(), FrameError> {
    if is_valid_spacing(value) {
        Ok(())
    } else {
        Err(FrameError::InvalidPixelSpacing { axis, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Vector};

    fn metadata() -> FrameMetadata {
        FrameMetadata {
            location: "slides/he_stain.svs".to_string(),
            pixel_size_x: Some(0.25),
            pixel_size_y: Some(0.5),
            width: 4000,
            height: 3000,
            level_count: 4,
            opacity: 80,
            visible: true,
            color_model: ColorModel::Rgb,
            pixel_type: PixelType::U8,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_defaults() {
        let frame = ImageFrame::new(ImageSize::new(200, 100), PixelSize::new(0.5, 0.5));
        assert_eq!(frame.transform, AffineTransform::identity());
        assert_eq!(frame.user_pixel_spacing, PixelSize::new(1.0, 1.0));
        assert_eq!(frame.pixel_dimensions, ImageSize::new(200, 100));
        assert!(frame.location.is_empty());
    }

    #[test]
    fn test_builders() {
        let t = AffineTransform::identity().with_rotation(12.0);
        let frame = ImageFrame::default()
            .with_location("a.tif")
            .with_transform(t)
            .with_user_pixel_spacing(PixelSize::new(2.0, 3.0));
        assert_eq!(frame.location, "a.tif");
        assert_eq!(frame.transform, t);
        assert_eq!(frame.user_pixel_spacing, PixelSize::new(2.0, 3.0));
    }

    #[test]
    fn test_from_metadata_complete() {
        let frame = ImageFrame::from_metadata(metadata()).unwrap();
        assert_eq!(frame.location, "slides/he_stain.svs");
        assert_eq!(frame.intrinsic_pixel_size, PixelSize::new(0.25, 0.5));
        assert_eq!(frame.user_pixel_spacing, PixelSize::new(1.0, 1.0));
        assert_eq!(frame.pixel_dimensions, ImageSize::new(4000, 3000));
        assert_eq!(frame.level_count, 4);
        assert_eq!(frame.opacity, 80);
        assert_eq!(frame.color_model, ColorModel::Rgb);
        assert_eq!(frame.pixel_type, PixelType::U8);
    }

    #[test]
    fn test_from_metadata_missing_pixel_size_defaults_to_one() {
        let mut meta = metadata();
        meta.pixel_size_x = None;
        meta.pixel_size_y = None;
        let frame = ImageFrame::from_metadata(meta).unwrap();
        assert_eq!(frame.intrinsic_pixel_size, PixelSize::new(1.0, 1.0));
    }

    #[test]
    fn test_from_metadata_sparse_matches_new() {
        let meta = FrameMetadata {
            location: "overlay.png".to_string(),
            width: 10,
            height: 10,
            ..Default::default()
        };
        let frame = ImageFrame::from_metadata(meta).unwrap();
        let fresh = ImageFrame::new(ImageSize::new(10, 10), PixelSize::default());

        assert_eq!(frame.visible, fresh.visible);
        assert_eq!(frame.opacity, fresh.opacity);
        assert_eq!(frame.level_count, fresh.level_count);
        assert_eq!(frame, fresh.with_location("overlay.png"));
    }

    #[test]
    fn test_from_metadata_keeps_user_spacing() {
        let mut meta = metadata();
        meta.user_pixel_spacing = Some(PixelSize::new(0.3, 0.3));
        let frame = ImageFrame::from_metadata(meta).unwrap();
        assert_eq!(frame.user_pixel_spacing, PixelSize::new(0.3, 0.3));
    }

    #[test]
    fn test_from_metadata_rejects_zero_pixel_size() {
        let mut meta = metadata();
        meta.pixel_size_y = Some(0.0);
        assert_eq!(
            ImageFrame::from_metadata(meta),
            Err(FrameError::InvalidPixelSize {
                axis: Axis::Y,
                value: 0.0
            })
        );
    }

    #[test]
    fn test_from_metadata_rejects_bad_user_spacing() {
        let mut meta = metadata();
        meta.user_pixel_spacing = Some(PixelSize::new(-1.0, 1.0));
        assert_eq!(
            ImageFrame::from_metadata(meta),
            Err(FrameError::InvalidPixelSpacing {
                axis: Axis::X,
                value: -1.0
            })
        );
    }

    #[test]
    fn test_from_metadata_rejects_bad_transform() {
        let mut meta = metadata();
        meta.transform = AffineTransform::identity().with_scale(Vector::new(0.0, 1.0));
        assert!(matches!(
            ImageFrame::from_metadata(meta),
            Err(FrameError::InvalidScale { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_from_metadata_keeps_transform() {
        let mut meta = metadata();
        meta.transform = AffineTransform::identity()
            .with_translation(Vector::new(100.0, -40.0))
            .with_center(Point::new(500.0, 750.0));
        let frame = ImageFrame::from_metadata(meta.clone()).unwrap();
        assert_eq!(frame.transform, meta.transform);
    }

    #[test]
    fn test_validate() {
        let frame = ImageFrame::from_metadata(metadata()).unwrap();
        assert!(frame.validate().is_ok());

        let mut bad = frame.clone();
        bad.intrinsic_pixel_size = PixelSize::new(f64::NAN, 1.0);
        assert!(matches!(
            bad.validate(),
            Err(FrameError::InvalidPixelSize { axis: Axis::X, .. })
        ));

        let bad = frame.with_user_pixel_spacing(PixelSize::new(1.0, 0.0));
        assert_eq!(
            bad.validate(),
            Err(FrameError::InvalidPixelSpacing {
                axis: Axis::Y,
                value: 0.0
            })
        );
    }

    #[test]
    fn test_footprint_and_extent() {
        let frame = ImageFrame::new(ImageSize::new(200, 100), PixelSize::new(0.5, 2.0));
        assert_eq!(frame.footprint(), Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(frame.physical_extent(), (100.0, 200.0));
    }
}
