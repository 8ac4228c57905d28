//! Error type for pipeline construction and collection.
//!
//! Caller-supplied functions are never wrapped: a panic inside a predicate or
//! mapping function unwinds straight out of `next`/`drive`.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A stage was constructed with a parameter it cannot run with.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// The destination handed to a collecting sink could not grow.
    #[error("destination could not reserve space: {0}")]
    Alloc(#[from] TryReserveError),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        log::debug!("rejecting stage argument `{name}`: {reason}");
        Error::InvalidArgument { name, reason }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid("stride", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid argument `stride`: must be greater than zero"
        );
    }

    #[test]
    fn test_alloc_from_try_reserve() {
        let mut v: Vec<u64> = Vec::new();
        let reserve_err = v.try_reserve(usize::MAX).unwrap_err();
        let err: Error = reserve_err.into();
        assert!(matches!(err, Error::Alloc(_)));
    }
}
