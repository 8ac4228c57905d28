use num_traits::PrimInt;

use crate::{
    Producer,
    error::{Error, Result},
};

/// Counts up from a start value to an exclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    next: T,
    end: T,
}

/// Create a source yielding `start, start + 1, ..` up to but excluding `end`.
///
/// `start > end` is rejected rather than wrapped around.
///
/// ```rust
/// use pull::prelude::*;
///
/// let mut r = range(3u8, 6)?;
/// assert_eq!(r.next(), Some(3));
/// assert_eq!(r.next(), Some(4));
/// assert_eq!(r.next(), Some(5));
/// assert_eq!(r.next(), None);
///
/// assert!(range(6u8, 3).is_err());
/// # Ok::<(), pull::Error>(())
/// ```
pub fn range<T: PrimInt>(start: T, end: T) -> Result<Range<T>> {
    if start > end {
        return Err(Error::invalid("start", "must not be greater than end"));
    }
    Ok(Range { next: start, end })
}

impl<T: PrimInt> Producer for Range<T> {
    type Out = T;

    fn next(&mut self) -> Option<Self::Out> {
        if self.next == self.end {
            return None;
        }
        let value = self.next;
        // cannot overflow: value < end
        self.next = value + T::one();
        Some(value)
    }
}
