//! Shape renderers.
//!
//! Both renderers share one vertex format and shader; they differ only in
//! primitive topology and in which draw commands they collect.

mod common;

pub mod line;
pub mod triangle;
