//! Bridges between producers and standard iterators.
//!
//! [`Iter`] lets a finished pipeline be consumed by anything that takes an
//! [`Iterator`]; [`from_iter`] goes the other way and turns any iterator into
//! a source.
//!
//! # Examples
//!
//! ```rust
//! use pull::prelude::*;
//!
//! let squares: Vec<_> = range(0, 4)?.map(|x| x * x).into_iter().collect();
//! assert_eq!(squares, vec![0, 1, 4, 9]);
//!
//! let letters = from_iter("pull".chars()).skip(2).count();
//! assert_eq!(letters, 2);
//! # Ok::<(), pull::Error>(())
//! ```

use std::iter::FusedIterator;

use crate::{Producer, transform::Fuse};

/// Iterator adapter for a [`Producer`].
///
/// Created via [`Producer::into_iter`]. Both `Iter` and `&mut Iter` implement
/// `Iterator`, so the producer can be recovered with
/// [`into_inner`](Iter::into_inner) after a partial drain.
#[derive(Clone)]
pub struct Iter<P>(P);

impl<P> Iter<P> {
    pub(crate) fn new(producer: P) -> Self {
        Iter(producer)
    }

    /// Give back the wrapped producer.
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> Iterator for Iter<P>
where
    P: Producer,
{
    type Item = P::Out;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<P> FusedIterator for Iter<Fuse<P>> where P: Producer {}

/// Source pulling from a standard iterator.
///
/// Created via [`from_iter`].
#[derive(Clone)]
pub struct IterSource<I>(I);

/// Create a source from anything that can be iterated.
pub fn from_iter<I>(iterable: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator,
{
    IterSource(iterable.into_iter())
}

impl<I> Producer for IterSource<I>
where
    I: Iterator,
{
    type Out = I::Item;

    fn next(&mut self) -> Option<Self::Out> {
        self.0.next()
    }
}
