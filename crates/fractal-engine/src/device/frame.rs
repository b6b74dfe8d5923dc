/// One acquired swapchain image with the encoder recording into it.
///
/// Hand it back to `Gpu::submit` promptly; the next image cannot be acquired
/// while this one is held.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
