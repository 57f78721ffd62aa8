use crate::pull::Pull;
use crate::source::Source;

/// Collapses adjacent equal values by `PartialEq`. Created by [`dedupe`].
pub struct Dedupe<S: Source> {
    source: S,
    previous: Option<S::Item>,
}

/// Suppress values equal to the immediately preceding value.
///
/// Only adjacent duplicates are collapsed — this is not a global seen-set.
/// The first value always passes. Equality is `PartialEq`; use [`dedupe_by`]
/// for an explicit strategy.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let deduped = dedupe(from_iter(vec![1, 1, 2, 2, 1]));
/// assert_eq!(take(deduped, 10), vec![1, 2, 1]);
/// ```
pub fn dedupe<S>(source: S) -> Dedupe<S>
where
    S: Source,
    S::Item: PartialEq + Clone,
{
    Dedupe {
        source,
        previous: None,
    }
}

impl<S> Source for Dedupe<S>
where
    S: Source,
    S::Item: PartialEq + Clone,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        loop {
            match self.source.pull().element() {
                Some(v) => {
                    let duplicate = self.previous.as_ref() == Some(&v);
                    self.previous = Some(v.clone());
                    if !duplicate {
                        return Pull::Value(v);
                    }
                }
                None => return Pull::Done,
            }
        }
    }
}

/// Collapses adjacent values under a caller-supplied equality. Created by
/// [`dedupe_by`].
pub struct DedupeBy<S: Source, F> {
    source: S,
    eq: F,
    previous: Option<S::Item>,
}

/// [`dedupe`] with an explicit equality function.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// // Collapse case-insensitive repeats.
/// let words = from_iter(vec!["a", "A", "b"]);
/// let deduped = dedupe_by(words, |a, b| a.eq_ignore_ascii_case(b));
/// assert_eq!(take(deduped, 10), vec!["a", "b"]);
/// ```
pub fn dedupe_by<S, F>(source: S, eq: F) -> DedupeBy<S, F>
where
    S: Source,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    DedupeBy {
        source,
        eq,
        previous: None,
    }
}

impl<S, F> Source for DedupeBy<S, F>
where
    S: Source,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        loop {
            match self.source.pull().element() {
                Some(v) => {
                    let duplicate = match &self.previous {
                        Some(prev) => (self.eq)(&v, prev),
                        None => false,
                    };
                    self.previous = Some(v.clone());
                    if !duplicate {
                        return Pull::Value(v);
                    }
                }
                None => return Pull::Done,
            }
        }
    }
}
