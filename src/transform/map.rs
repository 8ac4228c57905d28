use crate::Producer;

/// Forwards only the items accepted by a predicate.
///
/// Created via [`Producer::filter`]. A single call to `next` may pull many
/// items from the predecessor.
#[derive(Clone)]
pub struct Filter<P, F> {
    producer: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub(crate) fn new(producer: P, predicate: F) -> Self {
        Filter {
            producer,
            predicate,
        }
    }
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Out) -> bool,
{
    type Out = P::Out;

    fn next(&mut self) -> Option<Self::Out> {
        while let Some(item) = self.producer.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

/// Transforms each item with a function.
///
/// Created via [`Producer::map`]. The item type is whatever the function
/// returns, see [`Returned`](crate::types::Returned).
#[derive(Clone)]
pub struct Map<P, F> {
    producer: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub(crate) fn new(producer: P, f: F) -> Self {
        Map { producer, f }
    }
}

impl<P, F, U> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Out) -> U,
{
    type Out = U;

    fn next(&mut self) -> Option<Self::Out> {
        self.producer.next().map(&mut self.f)
    }
}
