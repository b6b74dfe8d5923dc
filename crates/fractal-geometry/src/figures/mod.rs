//! Figure generators.
//!
//! One file per figure. Each exposes a unit struct implementing
//! [`Figure`](crate::Figure); [`FigureKind`](crate::FigureKind) maps the closed
//! set of figures onto them.

mod dragon;
mod koch;
mod menger;
mod sierpinski;
mod spiral;
mod squares;

pub use dragon::Dragon;
pub use koch::Koch;
pub use menger::Menger;
pub use sierpinski::Sierpinski;
pub use spiral::{Spiral, STEP as SPIRAL_STEP};
pub use squares::SquaresAndDiamonds;

use crate::color::Rgb;
use crate::mesh::Mesh;
use crate::point::Point;

/// Emits a polyline as consecutive line segments, coloring along a ramp.
///
/// The first segment gets `start` and the last gets `end`; a single segment is `start`.
pub(crate) fn push_polyline_ramp(out: &mut Mesh, points: &[Point], start: Rgb, end: Rgb) {
    let segments = points.len().saturating_sub(1);
    if segments == 0 {
        return;
    }
    let last = segments.saturating_sub(1).max(1) as f32;
    for (i, pair) in points.windows(2).enumerate() {
        out.push_line(pair[0], pair[1], start.lerp(end, i as f32 / last));
    }
}
