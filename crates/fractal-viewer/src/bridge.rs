//! Mesh to draw-list conversion.

use fractal_engine::coords::Vec2;
use fractal_engine::paint::Color;
use fractal_engine::scene::DrawList;
use fractal_geometry::{Mesh, Point, Primitive, Rgb};

#[inline]
fn vec2(p: Point) -> Vec2 {
    Vec2::new(p.x, p.y)
}

#[inline]
fn color(c: Rgb) -> Color {
    Color::opaque(c.r, c.g, c.b)
}

/// Replaces the content of `list` with the primitives of `mesh`, in mesh order.
pub fn fill_draw_list(mesh: &Mesh, list: &mut DrawList) {
    list.clear();
    for primitive in mesh.iter() {
        match *primitive {
            Primitive::Line { from, to, color: c } => {
                list.push_line(vec2(from), vec2(to), color(c));
            }
            Primitive::Triangle { points: [a, b, c], color: fill } => {
                list.push_triangle(vec2(a), vec2(b), vec2(c), color(fill));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fractal_engine::scene::DrawCmd;

    use super::*;

    #[test]
    fn converts_every_primitive_in_order() {
        let mut mesh = Mesh::new();
        mesh.push_line(Point::new(-1.0, 0.0), Point::new(1.0, 0.0), Rgb::new(1.0, 0.0, 0.0));
        mesh.push_triangle(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Rgb::gray(0.5),
        );

        let mut list = DrawList::new();
        fill_draw_list(&mesh, &mut list);

        assert_eq!(list.len(), 2);
        match &list.items()[0] {
            DrawCmd::Line(line) => {
                assert_eq!(line.from.to_array(), [-1.0, 0.0]);
                assert_eq!(line.color.to_array(), [1.0, 0.0, 0.0, 1.0]);
            }
            other => panic!("expected line, got {other:?}"),
        }
        match &list.items()[1] {
            DrawCmd::Triangle(tri) => {
                assert_eq!(tri.points[2].to_array(), [0.0, 1.0]);
                assert_eq!(tri.color.to_array(), [0.5, 0.5, 0.5, 1.0]);
            }
            other => panic!("expected triangle, got {other:?}"),
        }
    }

    #[test]
    fn refill_replaces_content_and_bumps_revision() {
        let mut mesh = Mesh::new();
        mesh.push_line(Point::origin(), Point::new(0.5, 0.5), Rgb::gray(0.0));

        let mut list = DrawList::new();
        fill_draw_list(&mesh, &mut list);
        let first = list.revision();

        fill_draw_list(&mesh, &mut list);
        assert_eq!(list.len(), 1);
        assert_ne!(list.revision(), first);
    }
}
