use crate::Producer;

/// Copies slice-like items into fixed-width arrays.
///
/// Created via [`Producer::pack`]. Up to `N` elements of each item are copied;
/// lanes beyond the item's length hold the fill value and longer items are
/// truncated.
#[derive(Clone)]
pub struct Pack<P, T, const N: usize> {
    producer: P,
    fill: T,
}

impl<P, T, const N: usize> Pack<P, T, N> {
    pub(crate) fn new(producer: P, fill: T) -> Self {
        Pack { producer, fill }
    }
}

impl<P, T, const N: usize> Producer for Pack<P, T, N>
where
    P: Producer,
    P::Out: AsRef<[T]>,
    T: Copy,
{
    type Out = [T; N];

    fn next(&mut self) -> Option<Self::Out> {
        let item = self.producer.next()?;
        let src = item.as_ref();
        let len = src.len().min(N);

        let mut lanes = [self.fill; N];
        lanes[..len].copy_from_slice(&src[..len]);
        Some(lanes)
    }
}
