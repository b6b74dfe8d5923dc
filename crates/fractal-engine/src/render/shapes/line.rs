use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::common::{MeshPipeline, MeshVertex};

/// Line-list renderer for `DrawCmd::Line`.
///
/// Lines are rasterized one physical pixel wide.
pub struct LineRenderer {
    mesh: MeshPipeline,
    scratch: Vec<MeshVertex>,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self {
            mesh: MeshPipeline::new("fractal line pipeline", wgpu::PrimitiveTopology::LineList),
            scratch: Vec::new(),
        }
    }

    /// Renders the line commands of `draw_list` into `target`.
    ///
    /// Vertex data is re-uploaded only when the list revision changed.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        self.mesh.prepare(ctx);

        if !self.mesh.is_current(draw_list.revision()) {
            self.scratch.clear();
            for line in draw_list.lines() {
                self.scratch.push(MeshVertex::new(line.from, line.color));
                self.scratch.push(MeshVertex::new(line.to, line.color));
            }
            self.mesh.upload(ctx, &self.scratch, draw_list.revision());
        }

        self.mesh.draw(ctx, target);
    }
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self::new()
    }
}
