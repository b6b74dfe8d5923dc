//! Procedural generators for 2D fractal-like figures.
//!
//! This crate is dependency-free: it produces plain geometry in scene space
//! and knows nothing about windows or GPUs. The viewer translates a [`Mesh`]
//! into engine draw commands.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`point`] | `Point` |
//! | [`color`] | `Rgb` |
//! | [`mesh`] | `Primitive`, `Mesh`, `Bounds` |
//! | [`figure`] | `Figure`, `FigureKind`, `Level` |
//! | [`figures`] | one generator per figure |
//! | [`lsystem`] | `LSystem`, `Turtle`, `fit_to_box` |
//! | [`error`] | `UnknownFigure` |
//!
//! # Quick start
//!
//! ```rust
//! use fractal_geometry::{FigureKind, Level, Mesh};
//!
//! let mut mesh = Mesh::new();
//! FigureKind::Sierpinski.figure().build(Level::new(3), 0.0, &mut mesh);
//! assert_eq!(mesh.triangle_count(), 9);
//! ```

pub mod color;
pub mod error;
pub mod figure;
pub mod figures;
pub mod lsystem;
pub mod mesh;
pub mod point;

pub use color::Rgb;
pub use error::UnknownFigure;
pub use figure::{Figure, FigureKind, Level};
pub use mesh::{Bounds, Mesh, Primitive};
pub use point::Point;
