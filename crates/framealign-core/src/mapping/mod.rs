//! Cross-frame mapping of points and polygons.
//!
//! Every function maps *from* the `initial` frame's pixel space *into* the
//! `target` frame's pixel space. Two different questions are answered:
//!
//! - [`map_point`] / [`map_polygon`]: where does a pixel location sit on the
//!   target's pixel grid, assuming both images are axis-aligned? Only pixel
//!   sizes and frame centers are used.
//! - [`transform_polygon`]: how does a polygon look on the target's
//!   *as-displayed* canvas once both placement transforms (rotation, scale,
//!   translation) are taken into account?
//!
//! The two are not interchangeable. A typical overlay applies
//! `map_polygon` first and `transform_polygon` second.

mod placement;
mod reframe;

pub use placement::transform_polygon;
pub use reframe::{center_difference, map_point, map_polygon};
