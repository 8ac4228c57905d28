use crate::{
    Producer,
    error::{Error, Result},
};

/// Samples every `amount`-th item of its predecessor.
///
/// Created via [`Producer::step_by`]. Each call returns one item and discards
/// the `amount - 1` that follow it, so `[s0, s1, s2, ..]` becomes
/// `[s0, s_n, s_2n, ..]` until the predecessor runs dry.
#[derive(Clone)]
pub struct StepBy<P> {
    producer: P,
    amount: usize,
}

impl<P> StepBy<P> {
    pub(crate) fn new(producer: P, amount: usize) -> Result<Self> {
        if amount == 0 {
            return Err(Error::invalid("amount", "step must be at least 1"));
        }
        Ok(StepBy { producer, amount })
    }
}

impl<P> Producer for StepBy<P>
where
    P: Producer,
{
    type Out = P::Out;

    fn next(&mut self) -> Option<Self::Out> {
        let first = self.producer.next()?;
        for _ in 1..self.amount {
            if self.producer.next().is_none() {
                break;
            }
        }
        Some(first)
    }
}

/// Yields at most a fixed number of items.
///
/// Created via [`Producer::take`]. The predecessor is not touched once the
/// limit is reached.
#[derive(Clone)]
pub struct Take<P> {
    producer: P,
    remaining: usize,
}

impl<P> Take<P> {
    pub(crate) fn new(producer: P, remaining: usize) -> Self {
        Take {
            producer,
            remaining,
        }
    }
}

impl<P> Producer for Take<P>
where
    P: Producer,
{
    type Out = P::Out;

    fn next(&mut self) -> Option<Self::Out> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.producer.next()
    }
}

/// Discards a fixed number of leading items.
///
/// Created via [`Producer::skip`]. The discarding happens lazily, on the first
/// call to `next`.
#[derive(Clone)]
pub struct Skip<P> {
    producer: P,
    pending: usize,
}

impl<P> Skip<P> {
    pub(crate) fn new(producer: P, pending: usize) -> Self {
        Skip { producer, pending }
    }
}

impl<P> Producer for Skip<P>
where
    P: Producer,
{
    type Out = P::Out;

    fn next(&mut self) -> Option<Self::Out> {
        for _ in 0..std::mem::take(&mut self.pending) {
            self.producer.next()?;
        }
        self.producer.next()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Producer, source::range};

    fn drain<P: Producer>(mut p: P) -> Vec<P::Out> {
        let mut out = Vec::new();
        while let Some(item) = p.next() {
            out.push(item);
        }
        out
    }

    #[test]
    fn test_step_by_samples_every_nth() {
        let sampled = drain(range(0, 10).unwrap().step_by(3).unwrap());
        assert_eq!(sampled, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_step_by_one_is_identity() {
        let all = drain(range(5u64, 9).unwrap().step_by(1).unwrap());
        assert_eq!(all, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_step_by_runs_past_the_amount() {
        // not a "first n" limiter
        let n = range(0, 100).unwrap().step_by(2).unwrap().count();
        assert_eq!(n, 50);
    }

    #[test]
    fn test_step_by_zero_is_rejected() {
        let err = range(0, 10).unwrap().step_by(0).err().unwrap();
        assert!(matches!(err, Error::InvalidArgument { name: "amount", .. }));
    }

    #[test]
    fn test_take_limits() {
        assert_eq!(drain(range(0, 10).unwrap().take(3)), vec![0, 1, 2]);
        assert_eq!(drain(range(0, 2).unwrap().take(5)), vec![0, 1]);
        assert!(drain(range(0, 10).unwrap().take(0)).is_empty());
    }

    #[test]
    fn test_take_stops_pulling_at_limit() {
        let mut p = range(0, 10).unwrap();
        assert_eq!(drain(p.by_ref().take(4)), vec![0, 1, 2, 3]);
        assert_eq!(p.next(), Some(4));
    }

    #[test]
    fn test_skip_counts() {
        for (len, n) in [(10, 0), (10, 3), (10, 10), (10, 15), (0, 2)] {
            let out = drain(range(0, len).unwrap().skip(n));
            let expected: Vec<i32> = (n.min(len as usize) as i32..len).collect();
            assert_eq!(out, expected, "len={len} skip={n}");
        }
    }

    #[test]
    fn test_skip_past_end_stays_exhausted() {
        let mut p = range(0, 3).unwrap().skip(5);
        assert_eq!(p.next(), None);
        assert_eq!(p.next(), None);
    }
}
