use crate::Producer;

/// Keeps returning `None` once the predecessor has returned `None`.
///
/// Created via [`Producer::fuse`]. The predecessor is dropped as soon as it is
/// exhausted.
#[derive(Clone)]
pub struct Fuse<P>(Option<P>);

impl<P> Fuse<P> {
    pub(crate) fn new(producer: P) -> Self {
        Fuse(Some(producer))
    }
}

impl<P> Producer for Fuse<P>
where
    P: Producer,
{
    type Out = P::Out;

    fn next(&mut self) -> Option<Self::Out> {
        let item = self.0.as_mut()?.next();
        if item.is_none() {
            self.0 = None; // exhausted for good
        }
        item
    }
}
