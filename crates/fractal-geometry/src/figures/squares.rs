use crate::color::Rgb;
use crate::figure::{Figure, Level};
use crate::mesh::Mesh;
use crate::point::Point;

const HALF_EXTENT: f32 = 0.9;
const COLOR_STEP: f32 = 0.1;

/// Nested squares and diamonds.
///
/// Each nested shape joins the edge midpoints of the previous one, so squares
/// and diamonds alternate. One level is one square plus the diamond inside it.
#[derive(Debug, Copy, Clone, Default)]
pub struct SquaresAndDiamonds;

impl SquaresAndDiamonds {
    /// Corners of the outermost square: bottom-left, top-left, top-right, bottom-right.
    pub fn base_square() -> [Point; 4] {
        [
            Point::new(-HALF_EXTENT, -HALF_EXTENT),
            Point::new(-HALF_EXTENT, HALF_EXTENT),
            Point::new(HALF_EXTENT, HALF_EXTENT),
            Point::new(HALF_EXTENT, -HALF_EXTENT),
        ]
    }

    /// The shape formed by the midpoints of each edge of `corners`.
    pub fn nested(corners: [Point; 4]) -> [Point; 4] {
        core::array::from_fn(|i| corners[i].midpoint(corners[(i + 1) % 4]))
    }
}

impl Figure for SquaresAndDiamonds {
    fn name(&self) -> &'static str {
        "Squares and diamonds"
    }

    fn max_level(&self) -> u32 {
        12
    }

    fn build(&self, level: Level, _phase: f32, out: &mut Mesh) {
        let level = level.clamped(self.max_level());
        let mut shape = Self::base_square();

        for i in 0..level.get() {
            let d = i as f32 * COLOR_STEP + COLOR_STEP;

            out.push_closed_outline(&shape, Rgb::gray(d));
            shape = Self::nested(shape);

            // Diamonds darken toward the center as squares lighten.
            out.push_closed_outline(&shape, Rgb::new(0.001, 0.001, 1.0 - d - 0.01));
            shape = Self::nested(shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Primitive;

    fn build(level: u32) -> Mesh {
        let mut mesh = Mesh::new();
        SquaresAndDiamonds.build(Level::new(level), 0.0, &mut mesh);
        mesh
    }

    #[test]
    fn eight_lines_per_level() {
        for level in 1..=5 {
            let mesh = build(level);
            assert_eq!(mesh.line_count(), 8 * level as usize);
            assert_eq!(mesh.triangle_count(), 0);
        }
    }

    #[test]
    fn first_diamond_touches_square_midpoints() {
        let diamond = SquaresAndDiamonds::nested(SquaresAndDiamonds::base_square());
        assert_eq!(diamond[0], Point::new(-0.9, 0.0));
        assert_eq!(diamond[1], Point::new(0.0, 0.9));
        assert_eq!(diamond[2], Point::new(0.9, 0.0));
        assert_eq!(diamond[3], Point::new(0.0, -0.9));
    }

    #[test]
    fn nested_twice_halves_the_square() {
        let inner = SquaresAndDiamonds::nested(SquaresAndDiamonds::nested(
            SquaresAndDiamonds::base_square(),
        ));
        assert!((inner[0].x + 0.45).abs() < 1e-6);
        assert!((inner[0].y + 0.45).abs() < 1e-6);
        assert!((inner[2].x - 0.45).abs() < 1e-6);
    }

    fn approx(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
    }

    #[test]
    fn colors_follow_level_ramp() {
        let mesh = build(2);
        let colors: Vec<Rgb> = mesh.iter().map(Primitive::color).collect();

        assert!(approx(colors[0], Rgb::gray(0.1)));
        assert!(approx(colors[4], Rgb::new(0.001, 0.001, 0.89)));
        assert!(approx(colors[8], Rgb::gray(0.2)));
        assert!(approx(colors[12], Rgb::new(0.001, 0.001, 0.79)));
    }

    #[test]
    fn level_is_clamped_to_max() {
        assert_eq!(build(100).line_count(), 8 * 12);
    }
}
