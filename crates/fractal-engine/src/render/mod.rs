//! GPU rendering subsystem.
//!
//! Renderers consume a `scene::DrawList` and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipeline, buffers).
//!
//! Convention:
//! - CPU geometry is in scene space (`[-1, 1]^2`, +Y up).
//! - The vertex shader applies an aspect-fit scale from a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
