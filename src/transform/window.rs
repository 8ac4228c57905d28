//! Windowing over two consecutive items.

use crate::Producer;

/// Yields each item paired with the one before it.
///
/// Created via [`Producer::adjacent_pairs`]. `[a, b, c]` becomes
/// `[(a, b), (b, c)]`. Only the previous item is buffered.
pub struct AdjacentPairs<P: Producer> {
    producer: P,
    prev: Option<P::Out>,
    done: bool,
}

impl<P: Producer> AdjacentPairs<P> {
    pub(crate) fn new(producer: P) -> Self {
        AdjacentPairs {
            producer,
            prev: None,
            done: false,
        }
    }
}

impl<P> Clone for AdjacentPairs<P>
where
    P: Producer + Clone,
    P::Out: Clone,
{
    fn clone(&self) -> Self {
        AdjacentPairs {
            producer: self.producer.clone(),
            prev: self.prev.clone(),
            done: self.done,
        }
    }
}

impl<P> Producer for AdjacentPairs<P>
where
    P: Producer,
    P::Out: Copy,
{
    type Out = (P::Out, P::Out);

    fn next(&mut self) -> Option<Self::Out> {
        if self.done {
            return None;
        }
        let pair = match self.prev.or_else(|| self.producer.next()) {
            Some(prev) => self.producer.next().map(|cur| (prev, cur)),
            None => None,
        };
        match pair {
            Some((_, cur)) => self.prev = Some(cur),
            None => {
                self.prev = None;
                self.done = true;
            }
        }
        pair
    }
}

/// Yields items two at a time.
///
/// Created via [`Producer::chunked_pairs`]. `[a, b, c, d, e]` becomes
/// `[(a, b), (c, d)]`; the unpaired `e` is discarded.
#[derive(Clone)]
pub struct ChunkedPairs<P> {
    producer: P,
    done: bool,
}

impl<P> ChunkedPairs<P> {
    pub(crate) fn new(producer: P) -> Self {
        ChunkedPairs {
            producer,
            done: false,
        }
    }
}

impl<P> Producer for ChunkedPairs<P>
where
    P: Producer,
{
    type Out = (P::Out, P::Out);

    fn next(&mut self) -> Option<Self::Out> {
        if self.done {
            return None;
        }
        let pair = self
            .producer
            .next()
            .and_then(|first| self.producer.next().map(|second| (first, second)));
        self.done = pair.is_none();
        pair
    }
}
