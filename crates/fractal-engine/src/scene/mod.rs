//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - expose a revision counter so renderers can skip redundant uploads

mod cmd;
mod list;

pub use cmd::{DrawCmd, LineCmd, TriangleCmd};
pub use list::DrawList;
