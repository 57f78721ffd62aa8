use crate::pull::Pull;
use crate::source::Source;

/// Running-list accumulator. Created by [`accum`].
pub struct Accum<S: Source> {
    source: S,
    items: Vec<S::Item>,
}

/// Append each value to a running list and yield a snapshot after each.
///
/// Every yielded list is an independent copy: mutating one snapshot never
/// affects earlier or later snapshots. See [`accum_flat`] for concatenating
/// values that are themselves sequences.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let snapshots = take(accum(from_iter(vec![1, 2, 3])), 10);
/// assert_eq!(snapshots, vec![vec![1], vec![1, 2], vec![1, 2, 3]]);
/// ```
pub fn accum<S>(source: S) -> Accum<S>
where
    S: Source,
    S::Item: Clone,
{
    Accum {
        source,
        items: Vec::new(),
    }
}

impl<S> Source for Accum<S>
where
    S: Source,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn pull(&mut self) -> Pull<Self::Item> {
        match self.source.pull().element() {
            Some(v) => {
                self.items.push(v);
                Pull::Value(self.items.clone())
            }
            None => Pull::Done,
        }
    }
}

/// Flattening running-list accumulator. Created by [`accum_flat`].
pub struct AccumFlat<S, T> {
    source: S,
    items: Vec<T>,
}

/// [`accum`] for values that are themselves sequences: each pulled value's
/// elements are concatenated onto the running list (one level of
/// flattening), and a snapshot of the whole list is yielded.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let snapshots = take(accum_flat(from_iter(vec![vec![1, 2], vec![3]])), 10);
/// assert_eq!(snapshots, vec![vec![1, 2], vec![1, 2, 3]]);
/// ```
pub fn accum_flat<S>(source: S) -> AccumFlat<S, <S::Item as IntoIterator>::Item>
where
    S: Source,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::Item: Clone,
{
    AccumFlat {
        source,
        items: Vec::new(),
    }
}

impl<S, T> Source for AccumFlat<S, T>
where
    S: Source,
    S::Item: IntoIterator<Item = T>,
    T: Clone,
{
    type Item = Vec<T>;

    fn pull(&mut self) -> Pull<Self::Item> {
        match self.source.pull().element() {
            Some(v) => {
                self.items.extend(v);
                Pull::Value(self.items.clone())
            }
            None => Pull::Done,
        }
    }
}

/// Two-way cumulative split. Created by [`partition`].
pub struct Partition<S: Source, F> {
    source: S,
    pred: F,
    yes: Vec<S::Item>,
    no: Vec<S::Item>,
}

/// Split values by a predicate into cumulative `(yes, no)` lists, yielding a
/// snapshot pair after each value.
///
/// Snapshots carry the same copy-independence guarantee as [`accum`].
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let split = partition(from_iter(vec![1, 8, 2]), |v| *v < 5);
/// let states = take(split, 10);
/// assert_eq!(states.last(), Some(&(vec![1, 2], vec![8])));
/// ```
pub fn partition<S, F>(source: S, pred: F) -> Partition<S, F>
where
    S: Source,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    Partition {
        source,
        pred,
        yes: Vec::new(),
        no: Vec::new(),
    }
}

impl<S, F> Source for Partition<S, F>
where
    S: Source,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    type Item = (Vec<S::Item>, Vec<S::Item>);

    fn pull(&mut self) -> Pull<Self::Item> {
        match self.source.pull().element() {
            Some(v) => {
                if (self.pred)(&v) {
                    self.yes.push(v);
                } else {
                    self.no.push(v);
                }
                Pull::Value((self.yes.clone(), self.no.clone()))
            }
            None => Pull::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::from_iter;
    use crate::terminal::take;

    #[test]
    fn test_accum_snapshots_are_independent() {
        let mut source = accum(from_iter(vec![1, 2, 3]));
        let mut first = source.pull().unwrap_value();
        first.push(999);
        first[0] = -1;
        // Neither the running state nor later snapshots see the mutation.
        assert_eq!(source.pull(), Pull::Value(vec![1, 2]));
        assert_eq!(source.pull(), Pull::Value(vec![1, 2, 3]));
    }

    #[test]
    fn test_accum_empty_source() {
        let mut source = accum(from_iter(Vec::<i32>::new()));
        assert_eq!(source.pull(), Pull::Done);
    }

    #[test]
    fn test_accum_flat_concatenates_one_level() {
        let nested = from_iter(vec![vec![1, 2], vec![], vec![3]]);
        let snapshots = take(accum_flat(nested), 10);
        assert_eq!(
            snapshots,
            vec![vec![1, 2], vec![1, 2], vec![1, 2, 3]]
        );
    }

    #[test]
    fn test_partition_cumulative_pairs() {
        let split = partition(from_iter(vec![1, 8, 2, 9]), |v| *v < 5);
        let states = take(split, 10);
        assert_eq!(
            states,
            vec![
                (vec![1], vec![]),
                (vec![1], vec![8]),
                (vec![1, 2], vec![8]),
                (vec![1, 2], vec![8, 9]),
            ]
        );
    }

    #[test]
    fn test_partition_snapshots_are_independent() {
        let mut split = partition(from_iter(vec![1, 8]), |v| *v < 5);
        let (mut yes, _no) = split.pull().unwrap_value();
        yes.clear();
        assert_eq!(split.pull(), Pull::Value((vec![1], vec![8])));
    }
}
