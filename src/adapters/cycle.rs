use crate::pull::Pull;
use crate::source::Source;

/// Buffer-and-replay operator. Created by [`cycle`].
pub struct Cycle<S: Source> {
    source: Option<S>,
    buffer: Vec<S::Item>,
    index: usize,
}

/// Pull the source to exhaustion, then replay its values cyclically forever.
///
/// During the first pass each value is yielded as it arrives and buffered;
/// after exhaustion the buffer replays from the start, making the output
/// unbounded. Only consume it through bounded operators such as
/// [`limit`](crate::limit) or [`take`](crate::take) — never hand it to
/// [`last_value`](crate::last_value) or [`reduce`](crate::reduce).
///
/// # Panics
///
/// Replaying an empty buffer is a contract violation: the first pull after an
/// empty source is exhausted panics with `"cannot cycle an empty source"`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let looped = cycle(from_iter(vec![1, 2, 3]));
/// assert_eq!(take(looped, 7), vec![1, 2, 3, 1, 2, 3, 1]);
/// ```
pub fn cycle<S>(source: S) -> Cycle<S>
where
    S: Source,
    S::Item: Clone,
{
    Cycle {
        source: Some(source),
        buffer: Vec::new(),
        index: 0,
    }
}

impl<S> Source for Cycle<S>
where
    S: Source,
    S::Item: Clone,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        if let Some(source) = &mut self.source {
            match source.pull().element() {
                Some(v) => {
                    self.buffer.push(v.clone());
                    return Pull::Value(v);
                }
                // First pass over; the source is dropped, the buffer replays.
                None => self.source = None,
            }
        }

        assert!(!self.buffer.is_empty(), "cannot cycle an empty source");
        let value = self.buffer[self.index].clone();
        self.index = (self.index + 1) % self.buffer.len();
        Pull::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{from_iter, range};
    use crate::terminal::take;

    #[test]
    fn test_first_pass_then_replay() {
        let looped = cycle(from_iter(vec![1, 2, 3]));
        assert_eq!(take(looped, 7), vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_replay_wraps_repeatedly() {
        let looped = cycle(from_iter(vec![5]));
        assert_eq!(take(looped, 4), vec![5, 5, 5, 5]);
    }

    #[test]
    #[should_panic(expected = "cannot cycle an empty source")]
    fn test_empty_source_panics_on_replay_pull() {
        let mut looped = cycle(range(0, 0));
        looped.pull();
    }

    #[test]
    fn test_consuming_exactly_the_first_pass_never_replays() {
        // Bounded consumption of an empty cycle's zero-length first pass is
        // fine; the panic only fires when a replay pull actually happens.
        let looped = cycle(range(0, 0));
        assert_eq!(take(looped, 0), vec![]);
    }
}
