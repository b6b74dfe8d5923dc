//! Lindenmayer systems and a turtle interpreter.
//!
//! Curve figures (Koch snowflake, dragon curve) are described as an axiom plus
//! rewrite rules. The expanded string is walked by [`Turtle`] to produce a
//! polyline, which is then fitted into scene space with [`fit_to_box`].

use crate::point::Point;

/// A deterministic, context-free L-system.
#[derive(Debug, Clone, PartialEq)]
pub struct LSystem {
    pub axiom: &'static str,
    pub rules: &'static [(char, &'static str)],
    /// Turn angle applied by `+` and `-`, in degrees.
    pub angle_deg: f64,
}

impl LSystem {
    /// Rewrites the axiom `iterations` times.
    ///
    /// All symbols are rewritten in parallel; symbols without a rule are copied.
    pub fn expand(&self, iterations: u32) -> String {
        let mut current = self.axiom.to_string();
        for _ in 0..iterations {
            let mut next = String::with_capacity(current.len() * 2);
            for sym in current.chars() {
                match self.rule_for(sym) {
                    Some(replacement) => next.push_str(replacement),
                    None => next.push(sym),
                }
            }
            current = next;
        }
        current
    }

    fn rule_for(&self, sym: char) -> Option<&'static str> {
        self.rules
            .iter()
            .find_map(|&(from, to)| (from == sym).then_some(to))
    }
}

/// Turtle-graphics interpreter for expanded L-system strings.
///
/// Symbols:
/// - `F`, `G`: move one unit forward, drawing
/// - `+`: turn left (counter-clockwise) by the angle
/// - `-`: turn right (clockwise) by the angle
/// - anything else: ignored
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Turtle {
    x: f64,
    y: f64,
    heading_deg: f64,
}

impl Turtle {
    pub fn new(heading_deg: f64) -> Self {
        Self { x: 0.0, y: 0.0, heading_deg }
    }

    /// Walks `commands` and returns every visited vertex, starting at the origin.
    ///
    /// Accumulates in `f64`; long dragon paths drift visibly in `f32`.
    pub fn trace(commands: &str, angle_deg: f64, start_heading_deg: f64) -> Vec<Point> {
        let mut turtle = Turtle::new(start_heading_deg);
        let mut points = vec![turtle.position()];
        for sym in commands.chars() {
            match sym {
                'F' | 'G' => {
                    turtle.forward();
                    points.push(turtle.position());
                }
                '+' => turtle.heading_deg += angle_deg,
                '-' => turtle.heading_deg -= angle_deg,
                _ => {}
            }
        }
        points
    }

    fn forward(&mut self) {
        let rad = self.heading_deg.to_radians();
        self.x += rad.cos();
        self.y += rad.sin();
    }

    fn position(&self) -> Point {
        Point::new(self.x as f32, self.y as f32)
    }
}

/// Uniformly scales and centers `points` to fit inside `[-half_extent, half_extent]^2`.
///
/// Aspect ratio is preserved; the longer side spans the full box.
pub fn fit_to_box(points: &mut [Point], half_extent: f32) {
    let Some(first) = points.first().copied() else { return };

    let (mut min, mut max) = (first, first);
    for p in points.iter() {
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }

    let center = min.midpoint(max);
    let span = (max.x - min.x).max(max.y - min.y);
    let scale = if span > 0.0 { 2.0 * half_extent / span } else { 1.0 };

    for p in points.iter_mut() {
        *p = (*p - center) * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAGON: LSystem = LSystem {
        axiom: "FX",
        rules: &[('X', "X+YF+"), ('Y', "-FX-Y")],
        angle_deg: 90.0,
    };

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn zero_iterations_is_axiom() {
        assert_eq!(DRAGON.expand(0), "FX");
    }

    #[test]
    fn dragon_rewrites_in_parallel() {
        assert_eq!(DRAGON.expand(1), "FX+YF+");
        assert_eq!(DRAGON.expand(2), "FX+YF++-FX-YF+");
    }

    #[test]
    fn unruled_symbols_are_copied() {
        let sys = LSystem { axiom: "A+B", rules: &[('A', "AB")], angle_deg: 0.0 };
        assert_eq!(sys.expand(2), "ABB+B");
    }

    #[test]
    fn turtle_traces_unit_square() {
        let pts = Turtle::trace("F+F+F+F", 90.0, 0.0);
        let expected = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(pts.len(), expected.len());
        for (got, want) in pts.iter().zip(expected) {
            assert!(close(*got, want), "{got:?} != {want:?}");
        }
    }

    #[test]
    fn turtle_ignores_non_drawing_symbols() {
        let pts = Turtle::trace("XFYF", 90.0, 90.0);
        assert_eq!(pts.len(), 3);
        assert!(close(pts[2], Point::new(0.0, 2.0)));
    }

    #[test]
    fn fit_centers_and_preserves_aspect() {
        let mut pts = vec![Point::new(2.0, 1.0), Point::new(6.0, 3.0)];
        fit_to_box(&mut pts, 0.9);
        assert!(close(pts[0], Point::new(-0.9, -0.45)));
        assert!(close(pts[1], Point::new(0.9, 0.45)));
    }

    #[test]
    fn fit_handles_degenerate_input() {
        let mut single = vec![Point::new(3.0, 4.0)];
        fit_to_box(&mut single, 0.9);
        assert_eq!(single[0], Point::origin());

        let mut empty: Vec<Point> = Vec::new();
        fit_to_box(&mut empty, 0.9);
        assert!(empty.is_empty());
    }
}
