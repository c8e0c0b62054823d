//! Predicate-based selection of sequence elements.

use std::fmt;

use super::Sequence;

/// A sequence that yields only the source elements accepted by a predicate.
///
/// Created by [`filter`] or [`Sequence::filter`].
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'a>
        = FilterIter<'a, S, P>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        FilterIter {
            inner: self.source.iter(),
            predicate: &self.predicate,
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Iterator for one traversal of a [`Filter`].
pub struct FilterIter<'a, S, P>
where
    S: Sequence + 'a,
{
    inner: S::Iter<'a>,
    predicate: &'a P,
}

impl<'a, S, P> Iterator for FilterIter<'a, S, P>
where
    S: Sequence + 'a,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        let predicate = self.predicate;
        self.inner.find(|item| predicate(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Builds a sequence that yields the elements of `source` for which
/// `predicate` returns `true`, in their original order.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Sequence, filter, values};
///
/// let evens = filter(values(vec![0, 1, 2, 3]), |number| number % 2 == 0);
/// assert_eq!(evens.collect::<Vec<_>>(), vec![0, 2]);
/// ```
#[inline]
pub const fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Filter { source, predicate }
}

/// Builds a paired-value sequence that keeps the pairs of `source` for
/// which `predicate(key, value)` returns `true`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Sequence, filter2, pairs};
///
/// let kept = filter2(pairs(vec![0, 1, 2, 3]), |index, number| *index == 0 || *number == 3);
/// assert_eq!(kept.collect::<Vec<_>>(), vec![(0, 0), (3, 3)]);
/// ```
#[inline]
pub fn filter2<S, K, V, P>(source: S, predicate: P) -> Filter<S, impl Fn(&(K, V)) -> bool>
where
    S: Sequence<Item = (K, V)>,
    P: Fn(&K, &V) -> bool,
{
    Filter {
        source,
        predicate: move |(key, value): &(K, V)| predicate(key, value),
    }
}
