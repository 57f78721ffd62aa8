//! Iterator adapter for sources.
//!
//! [`SourceIter`] drives a [`Source`] through Rust's [`Iterator`] protocol.
//! Elements come out of `next()`; a trailing payload delivered via
//! [`Pull::DoneWith`] is not an element, so it is held back and exposed
//! through [`trailing`](SourceIter::trailing) / [`into_trailing`](SourceIter::into_trailing)
//! once the iterator finishes.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = range(0, 3).into_iter();
//! let values: Vec<i64> = (&mut iter).collect();
//! assert_eq!(values, vec![0, 1, 2]);
//! assert!(iter.is_finished());
//! assert_eq!(iter.into_trailing(), None);
//! ```

use crate::pull::Pull;
use crate::source::Source;

/// Iterator over a source's elements.
///
/// Both `SourceIter` and `&mut SourceIter` implement `Iterator`, so a source
/// can be partially drained without consuming the adapter, leaving the
/// trailing payload reachable afterwards.
pub struct SourceIter<S: Source> {
    state: State<S>,
}

enum State<S: Source> {
    Active(S),
    Finished(Option<S::Item>),
    Invalid,
}

impl<S: Source> State<S> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, State::Invalid)
    }
}

impl<S: Source> SourceIter<S> {
    /// Create an iterator from a source.
    pub fn new(source: S) -> Self {
        Self {
            state: State::Active(source),
        }
    }

    /// Check if the underlying source has reported exhaustion.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished(_))
    }

    /// The trailing payload, if the source finished with one.
    pub fn trailing(&self) -> Option<&S::Item> {
        match &self.state {
            State::Finished(t) => t.as_ref(),
            _ => None,
        }
    }

    /// Consume the iterator, returning the trailing payload if any.
    ///
    /// Returns `None` both when the source is not yet exhausted and when it
    /// finished cleanly.
    pub fn into_trailing(self) -> Option<S::Item> {
        match self.state {
            State::Finished(t) => t,
            _ => None,
        }
    }
}

impl<S: Source> Iterator for SourceIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state.take() {
            State::Active(mut source) => match source.pull() {
                Pull::Value(v) => {
                    self.state = State::Active(source);
                    Some(v)
                }
                Pull::Done => {
                    self.state = State::Finished(None);
                    None
                }
                Pull::DoneWith(t) => {
                    self.state = State::Finished(Some(t));
                    None
                }
            },
            finished => {
                self.state = finished;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pull::Pull;
    use crate::sources::{from_fn, from_iter};

    #[test]
    fn test_elements_then_finished() {
        let mut iter = from_iter(vec![1, 2]).into_iter();
        assert_eq!(iter.next(), Some(1));
        assert!(!iter.is_finished());
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert!(iter.is_finished());
        assert_eq!(iter.into_trailing(), None);
    }

    #[test]
    fn test_trailing_payload_is_not_an_element() {
        let mut remaining = vec![1, 2, 3];
        let source = from_fn(move || match remaining.pop() {
            Some(1) => Pull::DoneWith(1),
            Some(v) => Pull::Value(v),
            None => Pull::Done,
        });

        let mut iter = source.into_iter();
        let values: Vec<i32> = (&mut iter).collect();
        assert_eq!(values, vec![3, 2]);
        assert_eq!(iter.trailing(), Some(&1));
        assert_eq!(iter.into_trailing(), Some(1));
    }

    #[test]
    fn test_for_loop_with_mut_ref() {
        let mut iter = from_iter(vec![1, 2, 3]).into_iter();
        let mut values = Vec::new();
        for value in &mut iter {
            values.push(value);
        }
        assert_eq!(values, vec![1, 2, 3]);
        assert!(iter.is_finished());
    }
}
