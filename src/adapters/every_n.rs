use crate::pull::Pull;
use crate::source::Source;

/// Counting sampler. Created by [`every_n`].
pub struct EveryN<S> {
    source: S,
    n: usize,
    count: usize,
    take_first: bool,
}

/// Yield every `n`-th value, optionally taking the very first unconditionally.
///
/// With `take_first`, the first pulled value is yielded regardless of `n`;
/// counting starts after it. Each time the count reaches `n` the value is
/// yielded and the count resets; everything in between is consumed and
/// dropped. On an empty source the output is simply empty, `take_first`
/// or not.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let sampled = every_n(from_iter(vec![10, 20, 30, 40, 50]), 2, true);
/// assert_eq!(take(sampled, 10), vec![10, 30, 50]);
/// ```
pub fn every_n<S: Source>(source: S, n: usize, take_first: bool) -> EveryN<S> {
    EveryN {
        source,
        n,
        count: 0,
        take_first,
    }
}

impl<S: Source> Source for EveryN<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        if self.take_first {
            self.take_first = false;
            return match self.source.pull().element() {
                Some(v) => Pull::Value(v),
                None => Pull::Done,
            };
        }
        loop {
            match self.source.pull().element() {
                Some(v) => {
                    self.count += 1;
                    if self.count == self.n {
                        self.count = 0;
                        return Pull::Value(v);
                    }
                }
                None => return Pull::Done,
            }
        }
    }
}
