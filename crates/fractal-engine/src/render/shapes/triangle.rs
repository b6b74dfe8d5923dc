use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::common::{MeshPipeline, MeshVertex};

/// Filled triangle-list renderer for `DrawCmd::Triangle`.
pub struct TriangleRenderer {
    mesh: MeshPipeline,
    scratch: Vec<MeshVertex>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self {
            mesh: MeshPipeline::new("fractal triangle pipeline", wgpu::PrimitiveTopology::TriangleList),
            scratch: Vec::new(),
        }
    }

    /// Renders the triangle commands of `draw_list` into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        self.mesh.prepare(ctx);

        if !self.mesh.is_current(draw_list.revision()) {
            self.scratch.clear();
            for tri in draw_list.triangles() {
                self.scratch
                    .extend(tri.points.iter().map(|&p| MeshVertex::new(p, tri.color)));
            }
            self.mesh.upload(ctx, &self.scratch, draw_list.revision());
        }

        self.mesh.draw(ctx, target);
    }
}

impl Default for TriangleRenderer {
    fn default() -> Self {
        Self::new()
    }
}
