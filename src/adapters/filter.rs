use crate::pull::Pull;
use crate::source::Source;

/// Keeps values matching a predicate. Created by [`filter`].
pub struct Filter<S, F> {
    source: S,
    pred: F,
}

/// Keep only the values for which `pred` returns true.
///
/// The predicate runs at most once per pulled element, and only when the
/// output is pulled.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let odds = filter(range(0, 10), |n| n % 2 == 1);
/// assert_eq!(take(odds, 3), vec![1, 3, 5]);
/// ```
pub fn filter<S, F>(source: S, pred: F) -> Filter<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> bool,
{
    Filter { source, pred }
}

impl<S, F> Source for Filter<S, F>
where
    S: Source,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Pull<Self::Item> {
        loop {
            match self.source.pull().element() {
                Some(v) => {
                    if (self.pred)(&v) {
                        return Pull::Value(v);
                    }
                }
                None => return Pull::Done,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::from_iter;
    use crate::terminal::take;
    use proptest::prelude::*;

    #[test]
    fn test_filter_preserves_order() {
        let kept = filter(from_iter(vec![5, 1, 8, 2, 9]), |v| *v >= 5);
        assert_eq!(take(kept, 10), vec![5, 8, 9]);
    }

    #[test]
    fn test_predicate_runs_once_per_element() {
        let mut calls = 0;
        let mut kept = filter(from_iter(vec![1, 2, 3]), |_| {
            calls += 1;
            true
        });
        assert_eq!(kept.pull(), Pull::Value(1));
        drop(kept);
        assert_eq!(calls, 1);
    }

    proptest! {
        // take(filter(s, p), n): only matching elements, original relative
        // order, length at most n.
        #[test]
        fn prop_filtered_take(values in proptest::collection::vec(any::<i32>(), 0..64), n in 0usize..8) {
            let out = take(filter(from_iter(values.clone()), |v| v % 3 == 0), n);
            prop_assert!(out.len() <= n);
            let expected: Vec<i32> =
                values.into_iter().filter(|v| v % 3 == 0).take(n).collect();
            prop_assert_eq!(out, expected);
        }
    }
}
