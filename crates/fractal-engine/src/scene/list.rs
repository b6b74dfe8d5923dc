use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawCmd, LineCmd, TriangleCmd};

/// Recorded draw stream.
///
/// Unlike a per-frame immediate list, a `DrawList` may be kept across frames and
/// only rebuilt when its content changes. Every mutation bumps [`revision`], which
/// renderers compare against the last uploaded revision.
///
/// Paint order is insertion order.
///
/// [`revision`]: DrawList::revision
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    revision: u64,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Monotonic content revision; changes whenever the list is mutated.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
        self.touch();
    }

    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.push(DrawCmd::Line(LineCmd { from, to, color }));
    }

    #[inline]
    pub fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.push(DrawCmd::Triangle(TriangleCmd { points: [a, b, c], color }));
    }

    /// Iterates line commands in paint order.
    pub fn lines(&self) -> impl Iterator<Item = &LineCmd> {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::Line(line) => Some(line),
            DrawCmd::Triangle(_) => None,
        })
    }

    /// Iterates triangle commands in paint order.
    pub fn triangles(&self) -> impl Iterator<Item = &TriangleCmd> {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::Triangle(tri) => Some(tri),
            DrawCmd::Line(_) => None,
        })
    }

    #[inline]
    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn filters_preserve_paint_order() {
        let mut dl = DrawList::new();
        dl.push_line(v(0.0, 0.0), v(1.0, 0.0), Color::BLACK);
        dl.push_triangle(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), Color::WHITE);
        dl.push_line(v(0.0, 0.0), v(0.0, 1.0), Color::WHITE);

        let lines: Vec<_> = dl.lines().map(|l| l.to).collect();
        assert_eq!(lines, vec![v(1.0, 0.0), v(0.0, 1.0)]);
        assert_eq!(dl.triangles().count(), 1);
        assert_eq!(dl.len(), 3);
    }

    #[test]
    fn every_mutation_bumps_revision() {
        let mut dl = DrawList::new();
        let r0 = dl.revision();
        dl.push_line(v(0.0, 0.0), v(1.0, 1.0), Color::BLACK);
        let r1 = dl.revision();
        dl.clear();
        let r2 = dl.revision();

        assert_ne!(r0, r1);
        assert_ne!(r1, r2);
        assert!(dl.is_empty());
    }
}
