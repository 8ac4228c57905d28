//! Commonly used imports
//!
//! Use `use pull::prelude::*;` for the traits and every source constructor.

// Core traits
pub use crate::{Producer, Sink};

// Sources
pub use crate::iter::from_iter;
pub use crate::source::{chunks, from_fn, from_fn_with, range, slice};

// Destinations for `collect_into`
pub use crate::sink::Append;
