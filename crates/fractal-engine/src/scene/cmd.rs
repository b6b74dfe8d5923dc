use crate::coords::Vec2;
use crate::paint::Color;

/// Single line segment with a uniform color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

/// Filled triangle with a uniform color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub color: Color,
}

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new variant here
/// - add a push helper on `DrawList`
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Triangle(TriangleCmd),
}
