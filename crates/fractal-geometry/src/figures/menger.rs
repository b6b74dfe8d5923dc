use crate::color::Rgb;
use crate::figure::{Figure, Level};
use crate::mesh::Mesh;
use crate::point::Point;

const HALF_EXTENT: f32 = 0.9;
const MAX_LEVEL: u32 = 6;

/// Menger sponge stub: its 2D face, the Sierpinski carpet.
///
/// Each level splits every filled square into a 3x3 grid and drops the center.
/// Squares are emitted as two triangles.
#[derive(Debug, Copy, Clone, Default)]
pub struct Menger;

impl Menger {
    /// Lower-left corners and side length of every filled cell, depth-first.
    ///
    /// `level` is clamped to the figure's maximum.
    pub fn cells(level: Level) -> Vec<(Point, f32)> {
        let level = level.clamped(MAX_LEVEL);
        let mut cells = Vec::new();
        let origin = Point::new(-HALF_EXTENT, -HALF_EXTENT);
        Self::collect(level.get() - 1, origin, 2.0 * HALF_EXTENT, &mut cells);
        cells
    }

    fn collect(depth: u32, min: Point, size: f32, cells: &mut Vec<(Point, f32)>) {
        if depth == 0 {
            cells.push((min, size));
            return;
        }
        let third = size / 3.0;
        for row in 0..3 {
            for col in 0..3 {
                if row == 1 && col == 1 {
                    continue;
                }
                let child = Point::new(min.x + col as f32 * third, min.y + row as f32 * third);
                Self::collect(depth - 1, child, third, cells);
            }
        }
    }
}

impl Figure for Menger {
    fn name(&self) -> &'static str {
        "Menger sponge (carpet)"
    }

    fn max_level(&self) -> u32 {
        MAX_LEVEL
    }

    fn build(&self, level: Level, _phase: f32, out: &mut Mesh) {
        let cells = Self::cells(level);

        let dark = Rgb::new(0.0, 0.35, 0.4);
        let light = Rgb::new(0.5, 0.85, 0.85);
        let last = cells.len().saturating_sub(1).max(1) as f32;

        for (i, (min, size)) in cells.into_iter().enumerate() {
            let color = dark.lerp(light, i as f32 / last);
            let max = Point::new(min.x + size, min.y + size);
            let top_left = Point::new(min.x, max.y);
            let bottom_right = Point::new(max.x, min.y);
            out.push_triangle(min, bottom_right, max, color);
            out.push_triangle(min, max, top_left, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Primitive;

    fn build(level: u32) -> Mesh {
        let mut mesh = Mesh::new();
        Menger.build(Level::new(level), 0.0, &mut mesh);
        mesh
    }

    fn area([a, b, c]: [Point; 3]) -> f32 {
        ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
    }

    #[test]
    fn two_triangles_per_cell() {
        for level in 1..=4u32 {
            assert_eq!(build(level).triangle_count(), 2 * 8usize.pow(level - 1));
        }
    }

    #[test]
    fn level_one_covers_the_full_square() {
        let b = build(1).bounds().unwrap();
        assert_eq!(b.min, Point::new(-0.9, -0.9));
        assert_eq!(b.max, Point::new(0.9, 0.9));
    }

    #[test]
    fn center_cell_is_removed() {
        let cells = Menger::cells(Level::new(2));
        assert_eq!(cells.len(), 8);
        for (min, size) in cells {
            let cx = min.x + size / 2.0;
            let cy = min.y + size / 2.0;
            assert!(cx.abs() > 0.1 || cy.abs() > 0.1, "center cell present");
        }
    }

    #[test]
    fn filled_area_shrinks_by_eight_ninths() {
        let total = |level: u32| -> f32 {
            build(level)
                .iter()
                .map(|p| match *p {
                    Primitive::Triangle { points, .. } => area(points),
                    Primitive::Line { .. } => 0.0,
                })
                .sum()
        };
        let full = 1.8f32 * 1.8;
        assert!((total(1) - full).abs() < 1e-4);
        assert!((total(3) - full * 64.0 / 81.0).abs() < 1e-3);
    }

    #[test]
    fn cells_clamp_oversized_levels() {
        assert_eq!(Menger::cells(Level::new(40)).len(), 8usize.pow(MAX_LEVEL - 1));
    }

    #[test]
    fn cells_are_listed_depth_first() {
        let cells = Menger::cells(Level::new(3));
        assert_eq!(cells[0].0, Point::new(-0.9, -0.9));
        // The lower-left third is filled before the walk moves right.
        for (min, size) in &cells[..8] {
            assert!(min.x + size <= -0.3 + 1e-4 && min.y + size <= -0.3 + 1e-4);
        }
        assert!(cells[8].0.x > -0.3 - 1e-4);
    }

    #[test]
    fn ramp_runs_dark_teal_to_light_teal() {
        let mesh = build(3);
        let cells: Vec<Rgb> = mesh.iter().step_by(2).map(|p| p.color()).collect();
        assert_eq!(cells[0], Rgb::new(0.0, 0.35, 0.4));
        assert_eq!(cells[cells.len() - 1], Rgb::new(0.5, 0.85, 0.85));
        for pair in cells.windows(2) {
            assert!(pair[1].g > pair[0].g);
        }
    }
}
