//! Core trait for pull-based stages.
//!
//! A [`Producer`] is anything that can be asked, repeatedly, for its next item.
//! Sources have no predecessor; transforms own exactly one predecessor by value.
//! Every combinator method takes `self` and returns a new concrete stage type,
//! so a whole pipeline is one nested value living wherever the caller put it.
//!
//! # Examples
//!
//! ```rust
//! use pull::prelude::*;
//!
//! let total = range(1, 25)?
//!     .filter(|x: &i32| x % 11 == 0)
//!     .map(|x| -x * 2)
//!     .reduce(|x, acc| x + acc, 0)
//!     .drive();
//! assert_eq!(total, -66);
//! # Ok::<(), pull::Error>(())
//! ```

use crate::{
    error::Result,
    iter::Iter,
    sink::{Append, Collect, CollectInto, Reduce, Sink},
    transform::{AdjacentPairs, ChunkedPairs, Filter, Fuse, Map, Pack, Skip, StepBy, Take},
};

/// A stage that yields items on demand.
///
/// Once `next` has returned `None`, well-behaved producers keep returning
/// `None`. Every stage in this crate upholds that as long as its predecessor
/// does; wrap a producer of unknown behaviour in [`fuse`](Producer::fuse) to
/// enforce it.
pub trait Producer {
    /// Type of item handed to the next stage
    type Out;

    /// Pull the next item, or `None` once exhausted.
    fn next(&mut self) -> Option<Self::Out>;

    /// Keep only the items for which `predicate` holds.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Out) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transform every item with `f`. The item type becomes `f`'s return type.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Out) -> U,
    {
        Map::new(self, f)
    }

    /// Sample every `amount`-th item, starting with the first.
    ///
    /// Each call returns the first item of a run and silently discards the
    /// `amount - 1` items after it. The stream is not limited: sampling goes on
    /// until the predecessor is exhausted. Use [`take`](Producer::take) to cap
    /// the number of items instead.
    ///
    /// ```rust
    /// use pull::prelude::*;
    ///
    /// let mut p = range(1, 10)?.skip(3).step_by(2)?;
    /// assert_eq!(p.next(), Some(4));
    /// assert_eq!(p.next(), Some(6));
    /// assert_eq!(p.next(), Some(8));
    /// assert_eq!(p.next(), None);
    /// # Ok::<(), pull::Error>(())
    /// ```
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
    /// `amount` is zero.
    fn step_by(self, amount: usize) -> Result<StepBy<Self>>
    where
        Self: Sized,
    {
        StepBy::new(self, amount)
    }

    /// Yield at most `n` items.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Discard the first `amount` items, then forward the rest unchanged.
    fn skip(self, amount: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, amount)
    }

    /// Yield `(previous, current)` for every item after the first.
    fn adjacent_pairs(self) -> AdjacentPairs<Self>
    where
        Self: Sized,
        Self::Out: Copy,
    {
        AdjacentPairs::new(self)
    }

    /// Yield non-overlapping `(first, second)` pairs. A trailing odd item is dropped.
    fn chunked_pairs(self) -> ChunkedPairs<Self>
    where
        Self: Sized,
    {
        ChunkedPairs::new(self)
    }

    /// Copy each slice-like item into a fixed-width array, padding with `fill`.
    ///
    /// ```rust
    /// use pull::prelude::*;
    ///
    /// let data = [1u8, 2, 3, 4, 5];
    /// let mut lanes = chunks(&data, 3)?.pack::<4, u8>(0);
    /// assert_eq!(lanes.next(), Some([1, 2, 3, 0]));
    /// assert_eq!(lanes.next(), Some([4, 5, 0, 0]));
    /// assert_eq!(lanes.next(), None);
    /// # Ok::<(), pull::Error>(())
    /// ```
    fn pack<const N: usize, T>(self, fill: T) -> Pack<Self, T, N>
    where
        Self: Sized,
        Self::Out: AsRef<[T]>,
        T: Copy,
    {
        Pack::new(self, fill)
    }

    /// Guarantee that `None` is returned forever after the first `None`.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Borrow this producer so combinators can be applied without consuming it.
    ///
    /// ```rust
    /// use pull::prelude::*;
    ///
    /// let mut p = range(0u32, 6)?;
    /// assert_eq!(p.by_ref().take(2).count(), 2);
    /// assert_eq!(p.next(), Some(2));
    /// # Ok::<(), pull::Error>(())
    /// ```
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Adapt into a standard [`Iterator`].
    fn into_iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Fold every item into an accumulator with `f(item, accumulator)`.
    ///
    /// Returns a sink; nothing runs until [`drive`](Sink::drive) is called.
    fn reduce<A, F>(self, f: F, initial: A) -> Reduce<Self, F, A>
    where
        Self: Sized,
        F: FnMut(Self::Out, A) -> A,
    {
        Reduce::new(self, f, initial)
    }

    /// Hand every item to `callback` together with `destination`.
    ///
    /// The first error returned by `callback` stops the drive and is returned.
    ///
    /// ```rust
    /// use pull::prelude::*;
    ///
    /// let mut out = Vec::new();
    /// slice(&[3, 1, 4])
    ///     .map(|x: &i32| x * 10)
    ///     .collect(|x, out: &mut Vec<i32>| { out.push(x); Ok::<(), pull::Error>(()) }, &mut out)
    ///     .drive()?;
    /// assert_eq!(out, [30, 10, 40]);
    /// # Ok::<(), pull::Error>(())
    /// ```
    fn collect<'d, D, E, F>(self, callback: F, destination: &'d mut D) -> Collect<'d, Self, F, D>
    where
        Self: Sized,
        D: ?Sized,
        F: FnMut(Self::Out, &mut D) -> Result<(), E>,
    {
        Collect::new(self, callback, destination)
    }

    /// Append every item to `destination`, reserving space for all of them up front.
    ///
    /// The item count is found by driving a clone of this pipeline first, so
    /// caller functions inside it run twice per item.
    fn collect_into<'d, D>(self, destination: &'d mut D) -> CollectInto<'d, Self, D>
    where
        Self: Sized + Clone,
        D: Append<Self::Out> + ?Sized,
    {
        CollectInto::new(self, destination)
    }

    /// Drain the producer and return how many items it yielded.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.reduce(|_, n: usize| n + 1, 0).drive()
    }
}

impl<P> Producer for &mut P
where
    P: Producer + ?Sized,
{
    type Out = P::Out;

    fn next(&mut self) -> Option<Self::Out> {
        (**self).next()
    }
}

/// `None` is an exhausted stage. `Option`'s own `map`/`filter`/`take` shadow the
/// combinators, so reach for them through a generic `P: Producer` or `Producer::map`.
impl<P> Producer for Option<P>
where
    P: Producer,
{
    type Out = P::Out;

    fn next(&mut self) -> Option<Self::Out> {
        self.as_mut()?.next()
    }
}

impl<L, R> Producer for either::Either<L, R>
where
    L: Producer,
    R: Producer<Out = L::Out>,
{
    type Out = L::Out;

    fn next(&mut self) -> Option<Self::Out> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }
}
