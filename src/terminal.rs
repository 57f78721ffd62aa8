//! Eager terminal operations.
//!
//! Unlike the adapters, everything here forces evaluation: each function
//! drains its source fully or partially and returns a concrete value. A
//! trailing payload delivered at exhaustion is not an element, so the
//! draining functions ignore it; [`nth_value`] reads the raw pull and is the
//! one exception.
//!
//! [`take`], [`limit`](crate::limit)-bounded drains, and
//! [`last_value_bounded`] are the only functions here that are safe on
//! unbounded sequences such as [`cycle`](crate::cycle) output.

use crate::error::Error;
use crate::source::Source;

/// Pull up to `n` values eagerly into a list.
///
/// Stops pulling as soon as `n` values are collected or the source is
/// exhausted, whichever comes first — the source is never over-pulled.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(take(range(0, 100), 3), vec![0, 1, 2]);
/// assert_eq!(take(range(0, 2), 10), vec![0, 1]);
/// ```
pub fn take<S: Source>(mut source: S, n: usize) -> Vec<S::Item> {
    let mut values = Vec::new();
    while values.len() < n {
        match source.pull().element() {
            Some(v) => values.push(v),
            None => break,
        }
    }
    values
}

/// Invoke `f` on every value for its side effects, fully draining the source.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut sum = 0;
/// for_each(range(0, 4), |n| sum += n);
/// assert_eq!(sum, 6);
/// ```
pub fn for_each<S, F>(mut source: S, mut f: F)
where
    S: Source,
    F: FnMut(S::Item),
{
    while let Some(v) = source.pull().element() {
        f(v);
    }
}

/// Left fold over the whole source: `memo = f(memo, value)` for each value.
///
/// No early termination; the source must be bounded.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let total = reduce(range(1, 5), 0, |memo, n| memo + n);
/// assert_eq!(total, 10);
/// ```
pub fn reduce<S, B, F>(mut source: S, initial: B, mut f: F) -> B
where
    S: Source,
    F: FnMut(B, S::Item) -> B,
{
    let mut memo = initial;
    while let Some(v) = source.pull().element() {
        memo = f(memo, v);
    }
    memo
}

/// Drain the source and return its final element, or `None` if empty.
///
/// Never pass an unbounded sequence (e.g. raw [`cycle`](crate::cycle)
/// output) here — it will not terminate. Use [`last_value_bounded`] when the
/// source's boundedness is not under your control.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(last_value(range(0, 5)), Some(4));
/// assert_eq!(last_value(range(0, 0)), None);
/// ```
pub fn last_value<S: Source>(mut source: S) -> Option<S::Item> {
    let mut last = None;
    while let Some(v) = source.pull().element() {
        last = Some(v);
    }
    last
}

/// [`last_value`] with a safety bound: fails instead of hanging.
///
/// Pulls at most `max_pulls` times; if the source is still producing at the
/// budget, returns [`Error::UnboundedSequence`] rather than draining forever.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(last_value_bounded(range(0, 5), 100), Ok(Some(4)));
/// assert!(last_value_bounded(cycle(range(0, 5)), 100).is_err());
/// ```
pub fn last_value_bounded<S: Source>(
    mut source: S,
    max_pulls: usize,
) -> Result<Option<S::Item>, Error> {
    let mut last = None;
    for _ in 0..max_pulls {
        match source.pull().element() {
            Some(v) => last = Some(v),
            None => return Ok(last),
        }
    }
    Err(Error::UnboundedSequence { limit: max_pulls })
}

/// Discard the first `n` values, then return the value of the next pull.
///
/// Zero-indexed: `n = 0` returns the first value. The final read takes the
/// raw pull's value, so a trailing payload sitting at that position is
/// returned.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(nth_value(range(0, 100), 0), Some(0));
/// assert_eq!(nth_value(range(0, 100), 7), Some(7));
/// assert_eq!(nth_value(range(0, 3), 9), None);
/// ```
pub fn nth_value<S: Source>(mut source: S, n: usize) -> Option<S::Item> {
    for _ in 0..n {
        source.pull();
    }
    source.pull().value()
}
