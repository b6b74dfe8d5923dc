use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// What the runtime should do after an app callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Implemented by the application driven by `window::Runtime`.
pub trait App {
    /// Sees every raw window event before the runtime acts on it.
    fn on_window_event(&mut self, _event: &WindowEvent) -> AppControl {
        AppControl::Continue
    }

    /// One call per redraw. Input collected since the previous frame is in
    /// `ctx.input_frame`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
