//! GPU device + surface management.
//!
//! `Gpu` owns the wgpu device, queue and the window surface. Each frame is
//! acquired as a `GpuFrame`, recorded into, then submitted and presented.

mod context;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use frame::GpuFrame;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
