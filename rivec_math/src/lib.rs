//! Planar vector arithmetic: a `Vector2` value type and the geometric
//! operations over it.
//!
//! Operations that produce a vector always return a new value. The only
//! in-place mutations are [`Vector2::set`] and the compound assignment
//! operators (`+=`, `-=`, `*=`, `/=`).
//!
//! Degenerate input is not trapped: normalizing a zero vector, reflecting about
//! a zero normal and similar cases yield NaN or infinite components exactly as
//! IEEE-754 single precision arithmetic produces them.

pub use damp::*;
pub use ops::*;
pub use vec2::*;

mod compare;
mod damp;
mod ops;
mod vec2;
