use fractal_engine::core::{App, AppControl, FrameCtx};
use fractal_engine::paint::Color;
use fractal_engine::render::shapes::line::LineRenderer;
use fractal_engine::render::shapes::triangle::TriangleRenderer;
use fractal_engine::scene::DrawList;
use fractal_geometry::Mesh;

use crate::bridge;
use crate::config::ViewerConfig;
use crate::keymap;
use crate::state::{Outcome, Viewer};

/// Engine-facing application: input dispatch, mesh rebuild, and drawing.
pub struct ViewerApp {
    viewer: Viewer,
    mesh: Mesh,
    draw_list: DrawList,

    triangles: TriangleRenderer,
    lines: LineRenderer,

    clear: Color,
    spin_speed: f32,
    base_title: String,
    shown_title: String,
}

impl ViewerApp {
    pub fn new(config: &ViewerConfig) -> Self {
        let viewer = match config.start {
            Some(kind) => Viewer::showing(kind, config.start_level),
            None => Viewer::new(),
        }
        .with_animation(config.animate);

        Self {
            viewer,
            mesh: Mesh::new(),
            draw_list: DrawList::new(),
            triangles: TriangleRenderer::new(),
            lines: LineRenderer::new(),
            clear: config.clear,
            spin_speed: config.spin_speed,
            base_title: config.title.clone(),
            shown_title: config.title.clone(),
        }
    }

    fn rebuild(&mut self) {
        self.viewer.rebuild(&mut self.mesh);
        bridge::fill_draw_list(&self.mesh, &mut self.draw_list);
        log::debug!(
            "mesh rebuilt: {} lines, {} triangles, {} vertices",
            self.mesh.line_count(),
            self.mesh.triangle_count(),
            self.mesh.vertex_count(),
        );
    }
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // ── Input ────────────────────────────────────────────────────────
        for key in ctx.input_frame.key_presses() {
            let Some(cmd) = keymap::command_for(key) else {
                continue;
            };
            if self.viewer.apply(cmd) == Outcome::Quit {
                log::info!("quit requested");
                return AppControl::Exit;
            }
        }

        self.viewer.advance(ctx.time.dt, self.spin_speed);

        if self.viewer.is_dirty() {
            self.rebuild();
        }

        let title = self.viewer.title(&self.base_title);
        if title != self.shown_title {
            ctx.window.set_title(&title);
            self.shown_title = title;
        }

        // ── Render ───────────────────────────────────────────────────────
        let list = &self.draw_list;
        let tris = &mut self.triangles;
        let lines = &mut self.lines;

        let control = ctx.render(self.clear, |rctx, target| {
            tris.render(rctx, target, list);
            lines.render(rctx, target, list);
        });

        if self.viewer.is_animating() {
            ctx.runtime.request_redraw();
        }

        control
    }
}
