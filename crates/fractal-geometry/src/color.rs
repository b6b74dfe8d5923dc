/// Straight (non-premultiplied) opaque RGB color.
///
/// Channels are clamped to `[0, 1]` on construction, so figures may compute
/// ramps that overshoot without producing out-of-range output.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    #[inline]
    pub fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Component-wise interpolation between two colors.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = clamp_unit(t);
        // Weighted form: t == 0 and t == 1 reproduce the endpoints exactly.
        let s = 1.0 - t;
        Rgb::new(
            self.r * s + other.r * t,
            self.g * s + other.g * t,
            self.b * s + other.b * t,
        )
    }
}

// NaN maps to 0 so a bad ramp never poisons the vertex buffer.
#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
