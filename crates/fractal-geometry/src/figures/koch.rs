use crate::color::Rgb;
use crate::figure::{Figure, Level};
use crate::lsystem::{fit_to_box, LSystem, Turtle};
use crate::mesh::Mesh;

const SNOWFLAKE: LSystem = LSystem {
    axiom: "F--F--F",
    rules: &[('F', "F+F--F+F")],
    angle_deg: 60.0,
};

/// Koch snowflake outline. Level 1 is the plain triangle.
#[derive(Debug, Copy, Clone, Default)]
pub struct Koch;

impl Figure for Koch {
    fn name(&self) -> &'static str {
        "Koch snowflake"
    }

    fn max_level(&self) -> u32 {
        8
    }

    fn build(&self, level: Level, _phase: f32, out: &mut Mesh) {
        let level = level.clamped(self.max_level());
        let commands = SNOWFLAKE.expand(level.get() - 1);

        let mut points = Turtle::trace(&commands, SNOWFLAKE.angle_deg, 0.0);
        fit_to_box(&mut points, 0.9);

        super::push_polyline_ramp(out, &points, Rgb::new(0.1, 0.3, 0.9), Rgb::new(0.6, 0.1, 0.8));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Primitive;
    use crate::point::Point;

    fn build(level: u32) -> Mesh {
        let mut mesh = Mesh::new();
        Koch.build(Level::new(level), 0.0, &mut mesh);
        mesh
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn segment_count_quadruples() {
        for level in 1..=5u32 {
            assert_eq!(build(level).line_count(), 3 * 4usize.pow(level - 1));
        }
    }

    #[test]
    fn outline_is_closed_and_connected() {
        let mesh = build(3);
        let lines: Vec<(Point, Point)> = mesh
            .iter()
            .map(|p| match *p {
                Primitive::Line { from, to, .. } => (from, to),
                Primitive::Triangle { .. } => panic!("unexpected triangle"),
            })
            .collect();

        for pair in lines.windows(2) {
            assert!(close(pair[0].1, pair[1].0));
        }
        assert!(close(lines[0].0, lines[lines.len() - 1].1));
    }

    #[test]
    fn fits_inside_scene_box() {
        let b = build(4).bounds().unwrap();
        let span = (b.max.x - b.min.x).max(b.max.y - b.min.y);
        assert!((span - 1.8).abs() < 1e-4);
        assert!(b.min.x >= -0.9001 && b.max.x <= 0.9001);
        assert!(b.min.y >= -0.9001 && b.max.y <= 0.9001);
    }

    #[test]
    fn level_one_is_the_fitted_triangle() {
        let mesh = build(1);
        let from: Vec<Point> = mesh
            .iter()
            .map(|p| match *p {
                Primitive::Line { from, .. } => from,
                Primitive::Triangle { .. } => panic!("unexpected triangle"),
            })
            .collect();
        let h = 0.9 * 3f32.sqrt() / 2.0;
        let expected = [Point::new(-0.9, h), Point::new(0.9, h), Point::new(0.0, -h)];
        assert_eq!(from.len(), 3);
        for (got, want) in from.iter().zip(expected) {
            assert!(close(*got, want), "{got:?} != {want:?}");
        }
    }

    #[test]
    fn ramp_runs_blue_to_violet() {
        let mesh = build(3);
        assert_eq!(mesh.primitives()[0].color(), Rgb::new(0.1, 0.3, 0.9));
        assert_eq!(mesh.primitives()[mesh.len() - 1].color(), Rgb::new(0.6, 0.1, 0.8));
    }

    #[test]
    fn axiom_expands_once_per_level_above_one() {
        assert_eq!(SNOWFLAKE.expand(0), "F--F--F");
        assert_eq!(SNOWFLAKE.expand(1).matches('F').count(), 12);
    }
}
