//! # Pull: allocation-free lazy pipelines
//!
//! Compose sources, transforms and sinks into one concrete pipeline type.
//! Every combinator call wraps the previous stage by value, so a chain of any
//! length is a single nested value with no heap allocation and no dynamic
//! dispatch. Nothing runs until a sink pulls.
//!
//! ## Core Traits
//!
//! - **[`Producer`]**: yields items on demand through `next()`
//! - **[`Sink`]**: owns a producer and drives it to one result
//!
//! ## Example
//!
//! ```
//! use pull::prelude::*;
//!
//! let total = range(1, 25)?
//!     .filter(|x: &i32| x % 11 == 0) // 11, 22
//!     .map(|x| -x * 2)               // -22, -44
//!     .reduce(|x, acc| x + acc, 0)
//!     .drive();
//! assert_eq!(total, -66);
//! # Ok::<(), pull::Error>(())
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`range(start, end)`](range) - integers up to an exclusive end
//! - [`slice(items)`](slice) - references into a borrowed slice
//! - [`chunks(items, stride)`](chunks) - fixed-stride sub-slices
//! - [`from_fn(f)`](from_fn), [`from_fn_with(context, f)`](from_fn_with) - generator functions
//! - [`from_iter(iterable)`](from_iter) - any standard iterator
//!
//! **Transforms:** `filter`, `map`, `step_by`, `take`, `skip`,
//! `adjacent_pairs`, `chunked_pairs`, `pack`, `fuse`
//!
//! **Sinks:** `reduce`, `collect`, `collect_into`, `count`

mod error;
pub mod iter;
pub mod prelude;
mod producer;
pub mod sink;
pub mod source;
pub mod transform;
pub mod types;

pub use error::{Error, Result};
pub use iter::{IterSource, from_iter};
pub use producer::Producer;
pub use sink::Sink;
pub use source::*;
