use crate::color::Rgb;
use crate::figure::{Figure, Level};
use crate::mesh::Mesh;
use crate::point::Point;

const BASE_GRAY: f32 = 0.41;
const RAMP_START: f32 = 0.4;
const RAMP_STEP: f32 = 0.009;

/// Which corner sub-triangle a branch descends from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Branch {
    Left,
    Upper,
    Right,
}

/// Per-branch color intensity, advanced once per emitted leaf.
#[derive(Debug, Copy, Clone)]
struct Ramp {
    red: f32,
    green: f32,
    blue: f32,
}

impl Ramp {
    fn new() -> Self {
        Self { red: RAMP_START, green: RAMP_START, blue: RAMP_START }
    }

    fn next(&mut self, branch: Branch) -> Rgb {
        match branch {
            Branch::Left => {
                self.red += RAMP_STEP;
                Rgb::new(self.red, 0.0, 0.0)
            }
            Branch::Right => {
                self.green += RAMP_STEP;
                Rgb::new(0.0, self.green, 0.0)
            }
            Branch::Upper => {
                self.blue += RAMP_STEP;
                Rgb::new(0.0, 0.0, self.blue)
            }
        }
    }
}

/// Sierpinski triangle, filled.
///
/// Level 1 is the gray base triangle. Deeper levels split it into the left,
/// upper and right corner triangles, colored red, blue and green per branch.
#[derive(Debug, Copy, Clone, Default)]
pub struct Sierpinski;

impl Sierpinski {
    /// Base triangle: bottom-left, apex, bottom-right.
    pub fn base_triangle() -> [Point; 3] {
        [Point::new(-0.5, -0.5), Point::new(0.0, 0.5), Point::new(0.5, -0.5)]
    }

    /// Splits `[a, b, c]` into its left, upper and right corner triangles.
    pub fn subdivide([a, b, c]: [Point; 3]) -> [[Point; 3]; 3] {
        let ab = a.midpoint(b);
        let bc = b.midpoint(c);
        let ca = c.midpoint(a);
        [[a, ab, ca], [ab, b, bc], [ca, bc, c]]
    }

    fn descend(depth: u32, tri: [Point; 3], branch: Branch, ramp: &mut Ramp, out: &mut Mesh) {
        if depth == 0 {
            let [a, b, c] = tri;
            out.push_triangle(a, b, c, ramp.next(branch));
            return;
        }
        for child in Self::subdivide(tri) {
            Self::descend(depth - 1, child, branch, ramp, out);
        }
    }
}

impl Figure for Sierpinski {
    fn name(&self) -> &'static str {
        "Sierpinski triangle"
    }

    fn max_level(&self) -> u32 {
        10
    }

    fn build(&self, level: Level, _phase: f32, out: &mut Mesh) {
        let level = level.clamped(self.max_level());
        let base = Self::base_triangle();

        if level == Level::MIN {
            let [a, b, c] = base;
            out.push_triangle(a, b, c, Rgb::gray(BASE_GRAY));
            return;
        }

        // Fresh ramp per build so repeated rebuilds render identically.
        let mut ramp = Ramp::new();
        let [left, upper, right] = Self::subdivide(base);
        let depth = level.get() - 2;
        Self::descend(depth, left, Branch::Left, &mut ramp, out);
        Self::descend(depth, upper, Branch::Upper, &mut ramp, out);
        Self::descend(depth, right, Branch::Right, &mut ramp, out);
    }
}
