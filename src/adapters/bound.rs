use crate::pull::Pull;
use crate::source::Source;

/// Yields the prefix matching a predicate. Created by [`take_while`].
pub struct TakeWhile<S, F> {
    source: S,
    pred: F,
    done: bool,
}

/// Yield values while `pred` holds, then stop permanently.
///
/// The first failing value is consumed and dropped; the output never resumes
/// even if later values would match.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let prefix = take_while(from_iter(vec![1, 2, 9, 1]), |v| *v < 5);
/// assert_eq!(take(prefix, 10), vec![1, 2]);
/// ```
pub fn take_while<S, F>(source: S, pred: F) -> TakeWhile<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> bool,
{
    TakeWhile {
        source,
        pred,
        done: false,
    }
}

impl<S, F> Source for TakeWhile<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        if self.done {
            return Pull::Done;
        }
        match self.source.pull().element() {
            Some(v) if (self.pred)(&v) => Pull::Value(v),
            _ => {
                self.done = true;
                Pull::Done
            }
        }
    }
}

/// Yields at most the first `n` values. Created by [`limit`].
pub struct Limit<S> {
    source: S,
    remaining: usize,
}

/// Yield at most the first `n` values, then stop.
///
/// Same effect as [`take_while`] with a counting predicate, but counts
/// positions instead of testing content. Once the count is spent the wrapped
/// source is not pulled again.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// // Safe to put in front of an unbounded sequence.
/// let bounded = limit(cycle(from_iter(vec![1, 2])), 5);
/// assert_eq!(take(bounded, 100), vec![1, 2, 1, 2, 1]);
/// ```
pub fn limit<S: Source>(source: S, n: usize) -> Limit<S> {
    Limit {
        source,
        remaining: n,
    }
}

impl<S: Source> Source for Limit<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        if self.remaining == 0 {
            return Pull::Done;
        }
        match self.source.pull().element() {
            Some(v) => {
                self.remaining -= 1;
                Pull::Value(v)
            }
            None => {
                self.remaining = 0;
                Pull::Done
            }
        }
    }
}

/// Discards the first `n` values. Created by [`skip`].
pub struct Skip<S> {
    source: S,
    remaining: usize,
}

/// Discard the first `n` values, yield the rest unchanged.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(take(skip(range(0, 5), 2), 10), vec![2, 3, 4]);
/// ```
pub fn skip<S: Source>(source: S, n: usize) -> Skip<S> {
    Skip {
        source,
        remaining: n,
    }
}

impl<S: Source> Source for Skip<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.source.pull().element().is_none() {
                self.remaining = 0;
                return Pull::Done;
            }
        }
        match self.source.pull().element() {
            Some(v) => Pull::Value(v),
            None => Pull::Done,
        }
    }
}
