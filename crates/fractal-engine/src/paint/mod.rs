//! Color model shared between the viewer and renderers.
//!
//! Colors are linear premultiplied alpha; geometry types live in `coords`.

pub mod color;

pub use color::Color;
