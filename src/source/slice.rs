use crate::{
    Producer,
    error::{Error, Result},
};

/// Yields references to the elements of a borrowed slice, in order.
///
/// The slice is never copied; it must outlive the cursor.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    position: usize,
}

/// Create a source over the elements of `items`.
///
/// ```rust
/// use pull::prelude::*;
///
/// let mut p = slice(&[3, 1, 4]);
/// assert_eq!(p.next(), Some(&3));
/// assert_eq!(p.next(), Some(&1));
/// assert_eq!(p.next(), Some(&4));
/// assert_eq!(p.next(), None);
/// ```
pub fn slice<T>(items: &[T]) -> SliceCursor<'_, T> {
    SliceCursor { items, position: 0 }
}

impl<T> SliceCursor<'_, T> {
    /// Index of the element the next call will return.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'a, T> Producer for SliceCursor<'a, T> {
    type Out = &'a T;

    fn next(&mut self) -> Option<Self::Out> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}

/// Yields consecutive sub-slices of a fixed stride.
///
/// The last chunk is shorter when the length is not a multiple of the stride.
#[derive(Debug)]
pub struct Chunks<'a, T> {
    rest: &'a [T],
    stride: usize,
}

/// Create a source of `stride`-sized chunks of `items`.
///
/// A zero stride is rejected.
///
/// ```rust
/// use pull::prelude::*;
///
/// let mut p = chunks(&[1, 2, 3, 4, 5], 2)?;
/// assert_eq!(p.next(), Some(&[1, 2][..]));
/// assert_eq!(p.next(), Some(&[3, 4][..]));
/// assert_eq!(p.next(), Some(&[5][..]));
/// assert_eq!(p.next(), None);
/// # Ok::<(), pull::Error>(())
/// ```
pub fn chunks<T>(items: &[T], stride: usize) -> Result<Chunks<'_, T>> {
    if stride == 0 {
        return Err(Error::invalid("stride", "must be greater than zero"));
    }
    Ok(Chunks {
        rest: items,
        stride,
    })
}

impl<T> Clone for Chunks<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Chunks<'_, T> {}

impl<'a, T> Producer for Chunks<'a, T> {
    type Out = &'a [T];

    fn next(&mut self) -> Option<Self::Out> {
        if self.rest.is_empty() {
            return None;
        }
        let (chunk, rest) = self.rest.split_at(self.stride.min(self.rest.len()));
        self.rest = rest;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_cursor_stays_exhausted() {
        let data = [3, 1, 4];
        let mut p = slice(&data);
        assert_eq!(p.next(), Some(&3));
        assert_eq!(p.next(), Some(&1));
        assert_eq!(p.next(), Some(&4));
        for _ in 0..3 {
            assert_eq!(p.next(), None);
        }
        assert_eq!(p.position(), 3);
    }

    #[test]
    fn test_slice_cursor_does_not_require_clone_items() {
        struct Opaque(u8);
        let data = [Opaque(1), Opaque(2)];
        let mut p = slice(&data);
        let copy = p;
        assert_eq!(p.next().map(|o| o.0), Some(1));
        assert_eq!(copy.count(), 2);
    }

    #[test]
    fn test_chunks_with_short_tail() {
        let data = [10, 20, 30, 40, 50];
        let mut p = chunks(&data, 2).unwrap();
        assert_eq!(p.next(), Some(&[10, 20][..]));
        assert_eq!(p.next(), Some(&[30, 40][..]));
        assert_eq!(p.next(), Some(&[50][..]));
        assert_eq!(p.next(), None);
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_chunks_stride_larger_than_input() {
        let data = [1u8, 2];
        let mut p = chunks(&data, 8).unwrap();
        assert_eq!(p.next(), Some(&[1u8, 2][..]));
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_chunks_of_empty_input() {
        let data: [u8; 0] = [];
        assert_eq!(chunks(&data, 3).unwrap().next(), None);
    }

    #[test]
    fn test_zero_stride_is_rejected() {
        let data = [1, 2, 3];
        assert!(matches!(
            chunks(&data, 0),
            Err(Error::InvalidArgument { name: "stride", .. })
        ));
    }
}
