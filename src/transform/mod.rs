//! Stages that wrap exactly one predecessor producer.
//!
//! Each stage is created through the matching method on
//! [`Producer`](crate::Producer) and owns its predecessor by value.

mod fuse;
mod map;
mod pack;
mod step;
mod window;

pub use fuse::Fuse;
pub use map::{Filter, Map};
pub use pack::Pack;
pub use step::{Skip, StepBy, Take};
pub use window::{AdjacentPairs, ChunkedPairs};
