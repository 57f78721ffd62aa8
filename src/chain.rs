//! Fluent wrapper threading one sequence through successive operators.
//!
//! [`Chain`] holds the current sequence by value. Every transform method
//! consumes the chain and returns a chain of the adapted source type, so the
//! "current sequence" is rebound by *type* rather than through an untyped
//! mutable cell. Terminal methods consume the chain and return the plain
//! result — calling a sequence operator on a terminal's output is a compile
//! error, not a runtime misbehavior.
//!
//! [`range`](crate::range) and [`compose`](crate::compose) are not
//! unary-source operators, so they have no chain method; wrap their output
//! with [`Chain::new`] instead.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let kept = chain(vec![1, 2, 3]).filter(|v| *v > 1).take(1);
//! assert_eq!(kept, vec![2]);
//!
//! let total = Chain::new(range(0, 10))
//!     .map(|n| n * n)
//!     .limit(3)
//!     .reduce(0, |memo, n| memo + n);
//! assert_eq!(total, 5);
//! ```

use std::ops::Index;

use crate::adapters::{
    accum, accum_flat, cycle, dedupe, dedupe_by, every_n, filter, limit, map, partition, pluck,
    skip, take_while, Accum, AccumFlat, Cycle, Dedupe, DedupeBy, EveryN, Filter, Limit, Map,
    Partition, Pluck, Skip, TakeWhile,
};
use crate::error::Error;
use crate::iter::SourceIter;
use crate::source::Source;
use crate::sources::{from_iter, FromIter};
use crate::terminal;

/// Fluent wrapper around the current sequence.
///
/// See the [module documentation](self) for the chaining rules.
pub struct Chain<S>(S);

/// Wrap anything iterable as a chain.
///
/// For a value that is already a [`Source`], use [`Chain::new`].
pub fn chain<I: IntoIterator>(values: I) -> Chain<FromIter<I::IntoIter>> {
    Chain(from_iter(values))
}

impl<S: Source> Chain<S> {
    /// Wrap an existing source.
    pub fn new(source: S) -> Self {
        Chain(source)
    }

    /// Unwrap the current sequence without consuming it.
    pub fn value(self) -> S {
        self.0
    }

    /// See [`map`](crate::map).
    pub fn map<U, F>(self, f: F) -> Chain<Map<S, F>>
    where
        F: FnMut(S::Item) -> U,
    {
        Chain(map(self.0, f))
    }

    /// See [`filter`](crate::filter).
    pub fn filter<F>(self, pred: F) -> Chain<Filter<S, F>>
    where
        F: FnMut(&S::Item) -> bool,
    {
        Chain(filter(self.0, pred))
    }

    /// See [`pluck`](crate::pluck).
    pub fn pluck<K>(self, key: K) -> Chain<Pluck<S, K>>
    where
        S::Item: Index<K>,
        <S::Item as Index<K>>::Output: Sized + Clone,
        K: Clone,
    {
        Chain(pluck(self.0, key))
    }

    /// See [`dedupe`](crate::dedupe).
    pub fn dedupe(self) -> Chain<Dedupe<S>>
    where
        S::Item: PartialEq + Clone,
    {
        Chain(dedupe(self.0))
    }

    /// See [`dedupe_by`](crate::dedupe_by).
    pub fn dedupe_by<F>(self, eq: F) -> Chain<DedupeBy<S, F>>
    where
        S::Item: Clone,
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        Chain(dedupe_by(self.0, eq))
    }

    /// See [`take_while`](crate::take_while).
    pub fn take_while<F>(self, pred: F) -> Chain<TakeWhile<S, F>>
    where
        F: FnMut(&S::Item) -> bool,
    {
        Chain(take_while(self.0, pred))
    }

    /// See [`limit`](crate::limit).
    pub fn limit(self, n: usize) -> Chain<Limit<S>> {
        Chain(limit(self.0, n))
    }

    /// See [`skip`](crate::skip).
    pub fn skip(self, n: usize) -> Chain<Skip<S>> {
        Chain(skip(self.0, n))
    }

    /// See [`accum`](crate::accum).
    pub fn accum(self) -> Chain<Accum<S>>
    where
        S::Item: Clone,
    {
        Chain(accum(self.0))
    }

    /// See [`accum_flat`](crate::accum_flat).
    pub fn accum_flat(self) -> Chain<AccumFlat<S, <S::Item as IntoIterator>::Item>>
    where
        S::Item: IntoIterator,
        <S::Item as IntoIterator>::Item: Clone,
    {
        Chain(accum_flat(self.0))
    }

    /// See [`partition`](crate::partition).
    pub fn partition<F>(self, pred: F) -> Chain<Partition<S, F>>
    where
        S::Item: Clone,
        F: FnMut(&S::Item) -> bool,
    {
        Chain(partition(self.0, pred))
    }

    /// See [`every_n`](crate::every_n).
    pub fn every_n(self, n: usize, take_first: bool) -> Chain<EveryN<S>> {
        Chain(every_n(self.0, n, take_first))
    }

    /// See [`cycle`](crate::cycle).
    pub fn cycle(self) -> Chain<Cycle<S>>
    where
        S::Item: Clone,
    {
        Chain(cycle(self.0))
    }

    /// Terminal: see [`take`](crate::take).
    pub fn take(self, n: usize) -> Vec<S::Item> {
        terminal::take(self.0, n)
    }

    /// Terminal: see [`for_each`](crate::for_each).
    pub fn for_each<F>(self, f: F)
    where
        F: FnMut(S::Item),
    {
        terminal::for_each(self.0, f)
    }

    /// Terminal: see [`reduce`](crate::reduce).
    pub fn reduce<B, F>(self, initial: B, f: F) -> B
    where
        F: FnMut(B, S::Item) -> B,
    {
        terminal::reduce(self.0, initial, f)
    }

    /// Terminal: see [`last_value`](crate::last_value).
    pub fn last_value(self) -> Option<S::Item> {
        terminal::last_value(self.0)
    }

    /// Terminal: see [`last_value_bounded`](crate::last_value_bounded).
    pub fn last_value_bounded(self, max_pulls: usize) -> Result<Option<S::Item>, Error> {
        terminal::last_value_bounded(self.0, max_pulls)
    }

    /// Terminal: see [`nth_value`](crate::nth_value).
    pub fn nth_value(self, n: usize) -> Option<S::Item> {
        terminal::nth_value(self.0, n)
    }

    /// Iterate over the current sequence's elements.
    pub fn into_iter(self) -> SourceIter<S> {
        SourceIter::new(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pull::Pull;
    use crate::sources::range;

    #[test]
    fn test_filter_then_take() {
        let kept = chain(vec![1, 2, 3]).filter(|v| *v > 1).take(1);
        assert_eq!(kept, vec![2]);
    }

    #[test]
    fn test_long_pipeline() {
        let out = Chain::new(range(0, 50))
            .map(|n| n * 2)
            .filter(|n| n % 3 == 0)
            .skip(1)
            .limit(3)
            .take(100);
        assert_eq!(out, vec![6, 12, 18]);
    }

    #[test]
    fn test_cycle_bounded_by_limit() {
        let out = chain(vec![1, 2, 3]).cycle().limit(7).take(100);
        assert_eq!(out, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_value_returns_the_unconsumed_sequence() {
        let mut source = chain(vec![4, 5]).map(|v| v + 1).value();
        assert_eq!(source.pull(), Pull::Value(5));
        assert_eq!(source.pull(), Pull::Value(6));
        assert_eq!(source.pull(), Pull::Done);
    }

    #[test]
    fn test_terminal_output_is_a_plain_value() {
        // take returns Vec, which supports list operations but no sequence
        // methods; re-wrap explicitly to keep chaining.
        let first_pass = chain(vec![3, 3, 1]).dedupe().take(10);
        assert_eq!(first_pass, vec![3, 1]);
        let second_pass = chain(first_pass).map(|v| v * 10).take(10);
        assert_eq!(second_pass, vec![30, 10]);
    }

    #[test]
    fn test_accum_and_nth() {
        let snapshot = chain(vec![1, 2, 3]).accum().nth_value(2);
        assert_eq!(snapshot, Some(vec![1, 2, 3]));
    }
}
