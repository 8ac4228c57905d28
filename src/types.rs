//! Aliases for naming stage types from their inputs.
//!
//! Pipelines are deeply nested generic types. These aliases let signatures
//! talk about the item a stage yields or the value a sink returns without
//! spelling out the projection.
//!
//! ```rust
//! use pull::prelude::*;
//! use pull::types::Returned;
//!
//! fn first_len<P>(mut p: P) -> Option<Returned<fn(&str) -> usize, &'static str>>
//! where
//!     P: Producer<Out = &'static str>,
//! {
//!     p.next().map(str::len)
//! }
//!
//! assert_eq!(first_len(slice(&["four"]).map(|w: &&'static str| *w)), Some(4));
//! ```

use crate::{Producer, Sink};

/// Item type yielded by producer `P`.
pub type Item<P> = <P as Producer>::Out;

/// Functions callable with a `T`, keyed by what they return.
///
/// Implemented for every `FnOnce(T) -> U`; [`Returned`] projects through it.
pub trait Returns<T> {
    type Output;
}

impl<F, T, U> Returns<T> for F
where
    F: FnOnce(T) -> U,
{
    type Output = U;
}

/// Return type of `F` when called with a `T`, i.e. the item type of `map(f)`.
pub type Returned<F, T> = <F as Returns<T>>::Output;

/// Result type of sink `S`.
pub type Output<S> = <S as Sink>::Output;
