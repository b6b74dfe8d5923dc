use std::fmt;
use std::str::FromStr;

use crate::error::UnknownFigure;
use crate::figures::{Dragon, Koch, Menger, Sierpinski, Spiral, SquaresAndDiamonds};
use crate::mesh::Mesh;

/// Recursion level of a figure. Always at least 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Level(u32);

impl Level {
    pub const MIN: Level = Level(1);

    /// Creates a level; `0` is raised to `1`.
    #[inline]
    pub const fn new(v: u32) -> Self {
        if v == 0 { Self::MIN } else { Self(v) }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Clamps to `[1, max]`.
    #[inline]
    pub fn clamped(self, max: u32) -> Self {
        Level::new(self.0.min(max.max(1)))
    }

    #[inline]
    pub fn up(self, max: u32) -> Self {
        Level::new(self.0.saturating_add(1)).clamped(max)
    }

    #[inline]
    pub fn down(self) -> Self {
        Level::new(self.0.saturating_sub(1))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A procedurally generated figure.
///
/// Implementations append primitives to `out` and never clear it; callers own
/// the mesh lifecycle.
pub trait Figure {
    /// Human-readable name, used in the window title and logs.
    fn name(&self) -> &'static str;

    /// Highest level the figure accepts; larger levels are clamped.
    fn max_level(&self) -> u32;

    /// True when the output depends on `phase` (animated figures).
    fn is_dynamic(&self) -> bool {
        false
    }

    /// Appends the figure at `level` to `out`.
    ///
    /// `phase` is an angle in radians; static figures ignore it.
    fn build(&self, level: Level, phase: f32, out: &mut Mesh);
}

/// The closed set of figures, in cycling order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FigureKind {
    SquaresAndDiamonds,
    Spiral,
    Sierpinski,
    Koch,
    Menger,
    Dragon,
}

impl FigureKind {
    pub const ALL: [FigureKind; 6] = [
        FigureKind::SquaresAndDiamonds,
        FigureKind::Spiral,
        FigureKind::Sierpinski,
        FigureKind::Koch,
        FigureKind::Menger,
        FigureKind::Dragon,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        match self {
            FigureKind::SquaresAndDiamonds => 0,
            FigureKind::Spiral => 1,
            FigureKind::Sierpinski => 2,
            FigureKind::Koch => 3,
            FigureKind::Menger => 4,
            FigureKind::Dragon => 5,
        }
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Next figure in cycling order, wrapping after the last.
    #[inline]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// Previous figure in cycling order, wrapping before the first.
    #[inline]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    /// Generator for this figure.
    pub fn figure(self) -> &'static dyn Figure {
        match self {
            FigureKind::SquaresAndDiamonds => &SquaresAndDiamonds,
            FigureKind::Spiral => &Spiral,
            FigureKind::Sierpinski => &Sierpinski,
            FigureKind::Koch => &Koch,
            FigureKind::Menger => &Menger,
            FigureKind::Dragon => &Dragon,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.figure().name()
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FigureKind {
    type Err = UnknownFigure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "squares" | "diamonds" | "squares-and-diamonds" => FigureKind::SquaresAndDiamonds,
            "spiral" => FigureKind::Spiral,
            "sierpinski" | "triangle" => FigureKind::Sierpinski,
            "koch" | "snowflake" => FigureKind::Koch,
            "menger" | "carpet" | "sponge" => FigureKind::Menger,
            "dragon" => FigureKind::Dragon,
            _ => return Err(UnknownFigure::new(s)),
        };
        Ok(kind)
    }
}
