//! Leaf stages with no predecessor.
//!
//! - [`range(start, end)`](range) - integers from `start` up to, not including, `end`
//! - [`slice(items)`](slice) - references into a borrowed slice
//! - [`chunks(items, stride)`](chunks) - consecutive sub-slices of `stride` elements
//! - [`from_fn(f)`](from_fn) / [`from_fn_with(context, f)`](from_fn_with) - caller-supplied generators

mod func;
mod range;
mod slice;

pub use func::{FromFn, FromFnWith, from_fn, from_fn_with};
pub use range::{Range, range};
pub use slice::{Chunks, SliceCursor, chunks, slice};
