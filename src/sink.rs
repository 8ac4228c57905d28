//! Terminal stages that drive a producer to exhaustion.
//!
//! A [`Sink`] owns its producer and turns the whole stream into one result.
//! [`drive`](Sink::drive) consumes the sink, so every sink runs at most once.

use std::collections::{TryReserveError, VecDeque};

use crate::{Producer, error::Result};

/// A terminal stage.
pub trait Sink {
    /// Result of driving the pipeline to completion
    type Output;

    /// Pull every item from the owned producer and produce the result.
    fn drive(self) -> Self::Output;
}

/// Folds every item into an accumulator.
///
/// Created via [`Producer::reduce`]. Items are folded strictly in source
/// order: `[a, b, c]` gives `f(c, f(b, f(a, initial)))`.
#[derive(Clone)]
pub struct Reduce<P, F, A> {
    producer: P,
    f: F,
    acc: A,
}

impl<P, F, A> Reduce<P, F, A> {
    pub(crate) fn new(producer: P, f: F, initial: A) -> Self {
        Reduce {
            producer,
            f,
            acc: initial,
        }
    }
}

impl<P, F, A> Sink for Reduce<P, F, A>
where
    P: Producer,
    F: FnMut(P::Out, A) -> A,
{
    type Output = A;

    fn drive(self) -> Self::Output {
        let Reduce {
            mut producer,
            mut f,
            mut acc,
        } = self;
        let mut folded = 0usize;
        while let Some(item) = producer.next() {
            acc = f(item, acc);
            folded += 1;
        }
        log::trace!("reduce folded {folded} items");
        acc
    }
}

/// Hands every item to a callback along with a destination.
///
/// Created via [`Producer::collect`]. The drive stops at the first error the
/// callback returns; items already handed over stay in the destination.
pub struct Collect<'d, P, F, D: ?Sized> {
    producer: P,
    callback: F,
    destination: &'d mut D,
}

impl<'d, P, F, D: ?Sized> Collect<'d, P, F, D> {
    pub(crate) fn new(producer: P, callback: F, destination: &'d mut D) -> Self {
        Collect {
            producer,
            callback,
            destination,
        }
    }
}

impl<P, F, D, E> Sink for Collect<'_, P, F, D>
where
    P: Producer,
    D: ?Sized,
    F: FnMut(P::Out, &mut D) -> Result<(), E>,
{
    type Output = Result<(), E>;

    fn drive(self) -> Self::Output {
        let Collect {
            mut producer,
            mut callback,
            destination,
        } = self;
        let mut collected = 0usize;
        while let Some(item) = producer.next() {
            callback(item, &mut *destination)?;
            collected += 1;
        }
        log::trace!("collect handed over {collected} items");
        Ok(())
    }
}

/// A container that can take items one at a time.
pub trait Append<T> {
    /// Make room for at least `additional` more items.
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let _ = additional;
        Ok(())
    }

    /// Push one item onto the end.
    fn append(&mut self, item: T);
}

impl<T> Append<T> for Vec<T> {
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        Vec::try_reserve_exact(self, additional)
    }

    fn append(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Append<T> for VecDeque<T> {
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        VecDeque::try_reserve_exact(self, additional)
    }

    fn append(&mut self, item: T) {
        self.push_back(item);
    }
}

/// Appends every item to a destination after reserving room for all of them.
///
/// Created via [`Producer::collect_into`]. Counting happens on a clone of the
/// pipeline and only sizes the reservation; the drive returns the number of
/// items actually appended. Stages sharing state between clones can make the
/// two differ.
pub struct CollectInto<'d, P, D: ?Sized> {
    producer: P,
    destination: &'d mut D,
}

impl<'d, P, D: ?Sized> CollectInto<'d, P, D> {
    pub(crate) fn new(producer: P, destination: &'d mut D) -> Self {
        CollectInto {
            producer,
            destination,
        }
    }
}

impl<P, D> Sink for CollectInto<'_, P, D>
where
    P: Producer + Clone,
    D: Append<P::Out> + ?Sized,
{
    type Output = Result<usize>;

    fn drive(self) -> Self::Output {
        let CollectInto {
            mut producer,
            destination,
        } = self;
        let count = producer.clone().count();
        destination.try_reserve(count)?;
        log::trace!("collect_into reserved {count} items");

        let mut appended = 0usize;
        while let Some(item) = producer.next() {
            destination.append(item);
            appended += 1;
        }
        Ok(appended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::source::{from_fn, from_fn_with, range, slice};
    use std::cell::Cell;

    #[test]
    fn test_reduce_fold_order() {
        let trace = slice(&["a", "b", "c"])
            .reduce(|item: &&str, acc: String| format!("f({item}, {acc})"), "init".to_string())
            .drive();
        assert_eq!(trace, "f(c, f(b, f(a, init)))");
    }

    #[test]
    fn test_reduce_of_empty_is_initial() {
        let total = range(4, 4).unwrap().reduce(|x, acc| x + acc, 42).drive();
        assert_eq!(total, 42);
    }

    #[test]
    fn test_collect_in_source_order() {
        let mut out = VecDeque::new();
        range(0, 4)
            .unwrap()
            .map(|x| x * x)
            .collect(
                |x, out: &mut VecDeque<i32>| {
                    out.push_front(x);
                    Ok::<_, Error>(())
                },
                &mut out,
            )
            .drive()
            .unwrap();
        assert_eq!(out, [9, 4, 1, 0]);
    }

    #[test]
    fn test_collect_stops_at_first_error() {
        #[derive(Debug, PartialEq)]
        struct Full;

        let mut out = Vec::new();
        let result = range(0, 10)
            .unwrap()
            .collect(
                |x, out: &mut Vec<i32>| {
                    if out.len() == 2 {
                        return Err(Full);
                    }
                    out.push(x);
                    Ok(())
                },
                &mut out,
            )
            .drive();
        assert_eq!(result, Err(Full));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_collect_into_reserves_once() {
        let mut out = Vec::new();
        let n = range(0u32, 100)
            .unwrap()
            .filter(|x: &u32| x % 7 == 0)
            .collect_into(&mut out)
            .drive()
            .unwrap();
        assert_eq!(n, 15);
        assert_eq!(out.len(), 15);
        assert_eq!(out.capacity(), 15);
        assert_eq!(out[14], 98);
    }

    #[test]
    fn test_collect_into_surfaces_reserve_failure() {
        struct Bounded {
            items: Vec<u8>,
            limit: usize,
        }

        impl Append<u8> for Bounded {
            fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
                if self.items.len() + additional > self.limit {
                    // an impossible request makes the allocator refuse
                    return self.items.try_reserve(usize::MAX);
                }
                self.items.try_reserve(additional)
            }

            fn append(&mut self, item: u8) {
                self.items.push(item);
            }
        }

        let mut dest = Bounded {
            items: Vec::new(),
            limit: 3,
        };
        let err = range(0u8, 10)
            .unwrap()
            .collect_into(&mut dest)
            .drive()
            .unwrap_err();
        assert!(matches!(err, Error::Alloc(_)));
        assert!(dest.items.is_empty());
    }

    #[test]
    fn test_collect_into_reruns_a_cloned_generator() {
        let mut out = Vec::new();
        let n = from_fn_with(0u8, |n: &mut u8| {
            *n += 1;
            (*n <= 3).then_some(*n)
        })
        .collect_into(&mut out)
        .drive()
        .unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, [1, 2, 3]);
    }

    #[test]
    fn test_collect_into_counts_appends_with_shared_state() {
        let left = Cell::new(3u32);
        let countdown = from_fn(|| {
            let n = left.get();
            if n == 0 {
                return None;
            }
            left.set(n - 1);
            Some(n)
        });

        let mut out = Vec::new();
        let n = countdown.collect_into(&mut out).drive().unwrap();
        // the counting clone already drained the shared cell
        assert_eq!(n, 0);
        assert!(out.is_empty());
        assert_eq!(left.get(), 0);
    }
}
