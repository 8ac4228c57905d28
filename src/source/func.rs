use crate::Producer;

/// Source driven by a closure.
///
/// Created via [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Create a source that calls `f` for every item.
///
/// `f` must keep returning `None` once it has returned `None`; wrap the source
/// in [`fuse`](Producer::fuse) if it cannot promise that.
///
/// ```rust
/// use pull::prelude::*;
///
/// let mut n = 1u32;
/// let mut powers = from_fn(move || {
///     let cur = n;
///     n = n.checked_mul(10)?;
///     Some(cur)
/// });
/// assert_eq!(powers.next(), Some(1));
/// assert_eq!(powers.next(), Some(10));
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn(f)
}

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Out = T;

    fn next(&mut self) -> Option<Self::Out> {
        (self.0)()
    }
}

/// Source driven by a function over an explicit, typed context.
///
/// Created via [`from_fn_with`].
#[derive(Clone)]
pub struct FromFnWith<C, F> {
    context: C,
    f: F,
}

/// Create a source that calls `f(&mut context)` for every item.
///
/// The context is owned by the source and can be a plain value or a `&mut`
/// borrow of caller state.
pub fn from_fn_with<C, T, F>(context: C, f: F) -> FromFnWith<C, F>
where
    F: FnMut(&mut C) -> Option<T>,
{
    FromFnWith { context, f }
}

impl<C, F> FromFnWith<C, F> {
    /// Give the context back, dropping the function.
    pub fn into_context(self) -> C {
        self.context
    }
}

impl<C, T, F> Producer for FromFnWith<C, F>
where
    F: FnMut(&mut C) -> Option<T>,
{
    type Out = T;

    fn next(&mut self) -> Option<Self::Out> {
        (self.f)(&mut self.context)
    }
}
