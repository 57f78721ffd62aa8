use crate::pull::Pull;
use crate::source::Source;

/// Source over any iterator. Created by [`from_iter`].
pub struct FromIter<I>(I);

/// Wrap anything iterable as a source.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut source = from_iter(vec![1, 2]);
/// assert_eq!(source.pull(), Pull::Value(1));
/// assert_eq!(source.pull(), Pull::Value(2));
/// assert_eq!(source.pull(), Pull::Done);
/// ```
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter(iter.into_iter())
}

impl<I: Iterator> Source for FromIter<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        self.0.next().into()
    }
}

/// Source over a closure. Created by [`from_fn`].
pub struct FromFn<F>(F);

/// Build a source from a closure returning [`Pull`] results.
///
/// This is the escape hatch for satisfying the pull contract directly,
/// including sources that finish with a trailing payload.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut countdown = from_fn(move || {
///     n += 1;
///     if n < 3 { Pull::Value(n) } else { Pull::DoneWith(n) }
/// });
/// assert_eq!(countdown.pull(), Pull::Value(1));
/// assert_eq!(countdown.pull(), Pull::Value(2));
/// assert_eq!(countdown.pull(), Pull::DoneWith(3));
/// ```
pub fn from_fn<T, F: FnMut() -> Pull<T>>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<T, F> Source for FromFn<F>
where
    F: FnMut() -> Pull<T>,
{
    type Item = T;

    fn pull(&mut self) -> Pull<T> {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_is_fused() {
        let mut source = from_iter(vec![1]);
        assert_eq!(source.pull(), Pull::Value(1));
        assert_eq!(source.pull(), Pull::Done);
        assert_eq!(source.pull(), Pull::Done);
    }

    #[test]
    fn test_from_iter_accepts_any_iterable() {
        let mut source = from_iter("ab".chars());
        assert_eq!(source.pull(), Pull::Value('a'));
        assert_eq!(source.pull(), Pull::Value('b'));
        assert_eq!(source.pull(), Pull::Done);
    }
}
