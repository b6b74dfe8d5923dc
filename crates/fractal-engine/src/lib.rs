//! Fractal engine crate.
//!
//! Owns the platform + GPU runtime pieces the viewer draws through: a single
//! winit window, a wgpu surface, keyboard input, frame timing, and renderers
//! for colored lines and triangles.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
