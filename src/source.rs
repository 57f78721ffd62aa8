//! Core trait for lazy pull-based sequences.
//!
//! A [`Source`] hands out values one at a time on demand. Nothing is computed
//! until [`pull`](Source::pull) is called, so unbounded sequences are cheap to
//! build and cheap to consume partially. A source is forward-only and owned by
//! exactly one consumer; every adapter in this crate takes its source by value
//! so the type system enforces that.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut evens = filter(range(0, 100), |n| n % 2 == 0);
//! assert_eq!(evens.pull(), Pull::Value(0));
//! assert_eq!(evens.pull(), Pull::Value(2));
//! // the remaining 48 even numbers are never computed
//! ```

use either::Either;

use crate::iter::SourceIter;
use crate::pull::Pull;

/// A lazy sequence of values retrieved one at a time.
///
/// The contract: each call to [`pull`](Source::pull) returns the next
/// [`Pull`] result. Once a pull reports exhaustion (`Done` or `DoneWith`),
/// every later pull returns `Done` — sources are fused, and a trailing
/// payload is delivered at most once.
pub trait Source {
    /// Type of the sequence's elements.
    type Item;

    /// Retrieve the next result from the sequence.
    fn pull(&mut self) -> Pull<Self::Item>;

    /// Adapt this source into an [`Iterator`] over its elements.
    ///
    /// The iterator keeps a `DoneWith` trailing payload for inspection after
    /// exhaustion, see [`SourceIter`].
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let values: Vec<i64> = range(0, 3).into_iter().collect();
    /// assert_eq!(values, vec![0, 1, 2]);
    /// ```
    fn into_iter(self) -> SourceIter<Self>
    where
        Self: Sized,
    {
        SourceIter::new(self)
    }

    /// Erase the concrete source type behind a box.
    ///
    /// Useful for composing sources of differing types, e.g. feeding
    /// differently shaped pipelines into [`compose`](crate::compose).
    fn boxed(self) -> Box<dyn Source<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        (**self).pull()
    }
}

/// Two source types with the same item type form a source.
impl<L, R> Source for Either<L, R>
where
    L: Source,
    R: Source<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        match self {
            Either::Left(l) => l.pull(),
            Either::Right(r) => r.pull(),
        }
    }
}
