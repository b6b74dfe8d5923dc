use std::f32::consts::TAU;

use crate::color::Rgb;
use crate::figure::{Figure, Level};
use crate::mesh::Mesh;
use crate::point::Point;

/// Parameter step between consecutive spiral samples, in radians.
pub const STEP: f32 = 0.01;

/// Archimedean spiral; the level is the number of full rotations.
///
/// The curve is normalized so its outer end sits on the unit circle regardless
/// of the rotation count. `phase` spins the whole curve.
#[derive(Debug, Copy, Clone, Default)]
pub struct Spiral;

impl Spiral {
    fn sample(t: f32, max: f32, phase: f32) -> Point {
        let a = t + phase;
        Point::new(t * a.cos() / max, -t * a.sin() / max)
    }
}

impl Figure for Spiral {
    fn name(&self) -> &'static str {
        "Spiral"
    }

    fn max_level(&self) -> u32 {
        40
    }

    fn is_dynamic(&self) -> bool {
        true
    }

    fn build(&self, level: Level, phase: f32, out: &mut Mesh) {
        let level = level.clamped(self.max_level());
        let max = level.get() as f32 * TAU;

        // Index-based stepping avoids accumulating float error over long spirals.
        let mut k = 0u32;
        loop {
            let t = k as f32 * STEP;
            if t >= max {
                break;
            }
            let from = Self::sample(t, max, phase);
            // The last segment ends one step past `max`, just outside the unit circle.
            let to = Self::sample(t + STEP, max, phase);
            out.push_line(from, to, Rgb::new(0.0, 0.0, t / max));
            k += 1;
        }
    }
}
