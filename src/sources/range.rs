use crate::pull::Pull;
use crate::source::Source;

/// Numeric progression source. Created by [`range`] and [`range_step`].
pub struct Range {
    current: i64,
    stop: i64,
    step: i64,
}

/// Yields `start, start + 1, ...` while strictly below `stop`.
///
/// A descending bound produces an empty sequence, never a loop.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(take(range(0, 3), 10), vec![0, 1, 2]);
/// assert_eq!(take(range(5, 0), 10), vec![]);
/// ```
pub fn range(start: i64, stop: i64) -> Range {
    range_step(start, stop, 1)
}

/// Yields `start, start + step, ...` while strictly below `stop`.
///
/// # Panics
///
/// Panics if `step <= 0`. A non-positive step with an ascending bound would
/// otherwise produce an accidental infinite sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(take(range_step(0, 5, 2), 10), vec![0, 2, 4]);
/// ```
pub fn range_step(start: i64, stop: i64, step: i64) -> Range {
    assert!(step > 0, "range step must be positive");
    Range {
        current: start,
        stop,
        step,
    }
}

impl Source for Range {
    type Item = i64;

    fn pull(&mut self) -> Pull<i64> {
        if self.current < self.stop {
            let value = self.current;
            self.current += self.step;
            Pull::Value(value)
        } else {
            Pull::Done
        }
    }
}
