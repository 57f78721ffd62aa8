use std::ops::Index;

use crate::pull::Pull;
use crate::source::Source;

/// Transforms each pulled value. Created by [`map`].
pub struct Map<S, F> {
    source: S,
    f: F,
}

/// Transform every value of a source, including a trailing payload.
///
/// `map` is the one operator that preserves the trailing-payload asymmetry of
/// the pull contract: a `Value` becomes a transformed element, a `DoneWith`
/// payload becomes the transformed *completion value* of the output sequence
/// (not an element), and a clean `Done` computes nothing.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(take(map(range(0, 3), |n| n * 2), 10), vec![0, 2, 4]);
/// ```
pub fn map<S, U, F>(source: S, f: F) -> Map<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> U,
{
    Map { source, f }
}

impl<S, U, F> Source for Map<S, F>
where
    S: Source,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn pull(&mut self) -> Pull<U> {
        self.source.pull().map(&mut self.f)
    }
}

/// Projects one field out of each pulled value. Created by [`pluck`].
pub struct Pluck<S, K> {
    source: S,
    key: K,
}

/// Project `value[key]` out of every value of a source.
///
/// The projection goes through [`std::ops::Index`], so it works for slices
/// and `Vec` with a position, and for maps with a key. The indexed output is
/// cloned out of the pulled value.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let rows = from_iter(vec![vec![1, 2], vec![3, 4]]);
/// assert_eq!(take(pluck(rows, 0), 10), vec![1, 3]);
/// ```
pub fn pluck<S, K>(source: S, key: K) -> Pluck<S, K>
where
    S: Source,
    S::Item: Index<K>,
    <S::Item as Index<K>>::Output: Sized + Clone,
    K: Clone,
{
    Pluck { source, key }
}

impl<S, K> Source for Pluck<S, K>
where
    S: Source,
    S::Item: Index<K>,
    <S::Item as Index<K>>::Output: Sized + Clone,
    K: Clone,
{
    type Item = <S::Item as Index<K>>::Output;

    fn pull(&mut self) -> Pull<Self::Item> {
        match self.source.pull().element() {
            Some(v) => Pull::Value(v[self.key.clone()].clone()),
            None => Pull::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{from_fn, from_iter};
    use crate::terminal::take;
    use std::collections::HashMap;

    #[test]
    fn test_map_is_lazy() {
        let mut calls = 0;
        let mut mapped = map(from_iter(vec![1, 2, 3]), |v| {
            calls += 1;
            v * 10
        });
        assert_eq!(mapped.pull(), Pull::Value(10));
        drop(mapped);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_map_transforms_trailing_payload() {
        let mut remaining = vec![9, 2, 1];
        let source = from_fn(move || match remaining.pop() {
            Some(9) => Pull::DoneWith(9),
            Some(v) => Pull::Value(v),
            None => Pull::Done,
        });

        let mut mapped = map(source, |v| v * 2);
        assert_eq!(mapped.pull(), Pull::Value(2));
        assert_eq!(mapped.pull(), Pull::Value(4));
        assert_eq!(mapped.pull(), Pull::DoneWith(18));
        assert_eq!(mapped.pull(), Pull::Done);
    }

    #[test]
    fn test_map_clean_done_computes_nothing() {
        let mut calls = 0;
        let mut mapped = map(from_iter(Vec::<i32>::new()), |v| {
            calls += 1;
            v
        });
        assert_eq!(mapped.pull(), Pull::Done);
        drop(mapped);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_pluck_from_maps() {
        let a: HashMap<&str, i32> = [("id", 1), ("rank", 5)].into_iter().collect();
        let b: HashMap<&str, i32> = [("id", 2), ("rank", 9)].into_iter().collect();
        let plucked = pluck(from_iter(vec![a, b]), "id");
        assert_eq!(take(plucked, 10), vec![1, 2]);
    }
}
