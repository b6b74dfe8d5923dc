//! Coordinate types shared by the draw list and renderers.
//!
//! Canonical CPU space is *scene space*:
//! - the square `[-1, 1] x [-1, 1]` is always fully visible
//! - origin at the window center
//! - +X right, +Y up
//!
//! The vertex shader fits the square to the shorter window side using a
//! viewport uniform, so geometry keeps its aspect ratio on resize.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
