use crate::color::Rgb;
use crate::figure::{Figure, Level};
use crate::lsystem::{fit_to_box, LSystem, Turtle};
use crate::mesh::Mesh;

const HEIGHWAY: LSystem = LSystem {
    axiom: "FX",
    rules: &[('X', "X+YF+"), ('Y', "-FX-Y")],
    angle_deg: 90.0,
};

/// Heighway dragon curve; level `n` has `2^n` segments.
#[derive(Debug, Copy, Clone, Default)]
pub struct Dragon;

impl Figure for Dragon {
    fn name(&self) -> &'static str {
        "Dragon curve"
    }

    fn max_level(&self) -> u32 {
        16
    }

    fn build(&self, level: Level, _phase: f32, out: &mut Mesh) {
        let level = level.clamped(self.max_level());
        let commands = HEIGHWAY.expand(level.get());

        let mut points = Turtle::trace(&commands, HEIGHWAY.angle_deg, 0.0);
        fit_to_box(&mut points, 0.9);

        super::push_polyline_ramp(out, &points, Rgb::new(0.9, 0.2, 0.1), Rgb::new(0.1, 0.2, 0.9));
    }
}
