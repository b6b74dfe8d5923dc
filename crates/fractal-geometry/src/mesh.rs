use crate::color::Rgb;
use crate::point::Point;

/// A single drawable primitive in scene space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point, color: Rgb },
    Triangle { points: [Point; 3], color: Rgb },
}

impl Primitive {
    /// Number of vertices this primitive contributes to a vertex buffer.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        match self {
            Primitive::Line { .. } => 2,
            Primitive::Triangle { .. } => 3,
        }
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        match self {
            Primitive::Line { color, .. } | Primitive::Triangle { color, .. } => *color,
        }
    }

    fn for_each_point(&self, mut f: impl FnMut(Point)) {
        match self {
            Primitive::Line { from, to, .. } => {
                f(*from);
                f(*to);
            }
            Primitive::Triangle { points, .. } => points.iter().copied().for_each(f),
        }
    }
}

/// Axis-aligned bounds of a mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

/// Ordered list of primitives produced by a figure.
///
/// Draw order is insertion order; later primitives paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    primitives: Vec<Primitive>,
}

impl Mesh {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all primitives, keeping the allocation for the next rebuild.
    #[inline]
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    #[inline]
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    #[inline]
    pub fn push_line(&mut self, from: Point, to: Point, color: Rgb) {
        self.push(Primitive::Line { from, to, color });
    }

    #[inline]
    pub fn push_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgb) {
        self.push(Primitive::Triangle { points: [a, b, c], color });
    }

    /// Pushes a closed outline through `corners` (last corner joins the first).
    pub fn push_closed_outline(&mut self, corners: &[Point], color: Rgb) {
        if corners.len() < 2 {
            return;
        }
        for (i, &from) in corners.iter().enumerate() {
            let to = corners[(i + 1) % corners.len()];
            self.push_line(from, to, color);
        }
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.iter().filter(|p| matches!(p, Primitive::Line { .. })).count()
    }

    pub fn triangle_count(&self) -> usize {
        self.iter().filter(|p| matches!(p, Primitive::Triangle { .. })).count()
    }

    pub fn vertex_count(&self) -> usize {
        self.iter().map(Primitive::vertex_count).sum()
    }

    /// Returns the bounds of every vertex, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for prim in &self.primitives {
            prim.for_each_point(|p| {
                let b = bounds.get_or_insert(Bounds { min: p, max: p });
                b.min = Point::new(b.min.x.min(p.x), b.min.y.min(p.y));
                b.max = Point::new(b.max.x.max(p.x), b.max.y.max(p.y));
            });
        }
        bounds
    }
}
