/// Window size in logical pixels.
///
/// Renderers upload this so the vertex shader can fit scene space to the
/// shorter side of the window.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Per-axis factors mapping scene space to NDC with the aspect ratio kept.
    ///
    /// The shorter side gets `1.0`; the longer side is shrunk so a unit in x
    /// and a unit in y cover the same number of pixels.
    pub fn aspect_fit(self) -> [f32; 2] {
        if !self.is_valid() {
            return [1.0, 1.0];
        }
        let side = self.width.min(self.height);
        [side / self.width, side / self.height]
    }
}
