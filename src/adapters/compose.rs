use crate::pull::Pull;
use crate::source::Source;

/// Sequential concatenation of sources. Created by [`compose`].
pub struct Compose<const N: usize, S> {
    sources: [S; N],
    index: usize,
}

/// Concatenate sources into one sequence, exhausting each in order.
///
/// Sources never interleave: the second is not pulled until the first is
/// exhausted. The array is homogeneous; mix two source types with
/// [`either::Either`], or arbitrarily many with
/// [`boxed`](crate::Source::boxed).
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let joined = compose([range(0, 2), range(10, 12)]);
/// assert_eq!(take(joined, 10), vec![0, 1, 10, 11]);
/// ```
pub fn compose<const N: usize, S: Source>(sources: [S; N]) -> Compose<N, S> {
    Compose { sources, index: 0 }
}

impl<const N: usize, S: Source> Source for Compose<N, S> {
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        loop {
            match self.sources.get_mut(self.index) {
                Some(source) => match source.pull().element() {
                    Some(v) => return Pull::Value(v),
                    None => self.index += 1,
                },
                None => return Pull::Done,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{from_iter, range};
    use crate::terminal::take;

    #[test]
    fn test_empty_parts_are_skipped() {
        let joined = compose([range(0, 0), range(5, 6), range(0, 0), range(7, 8)]);
        assert_eq!(take(joined, 10), vec![5, 7]);
    }

    #[test]
    fn test_zero_sources() {
        let mut joined = compose::<0, crate::sources::Range>([]);
        assert_eq!(joined.pull(), Pull::Done);
    }

    #[test]
    fn test_later_sources_untouched_until_needed() {
        let mut joined = compose([from_iter(vec![1]), from_iter(vec![2])]);
        assert_eq!(joined.pull(), Pull::Value(1));
        assert_eq!(joined.pull(), Pull::Value(2));
        assert_eq!(joined.pull(), Pull::Done);
    }
}
