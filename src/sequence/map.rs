//! Element-wise transformation of a sequence.

use std::fmt;

use super::Sequence;

/// A sequence that applies a transform to each element of its source.
///
/// Created by [`map`] or [`Sequence::map`]. Cardinality and order match the
/// source exactly; the transform runs once per pulled element, on every
/// traversal.
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

impl<S, F, B> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    type Item = B;
    type Iter<'a>
        = MapIter<'a, S, F>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        MapIter {
            inner: self.source.iter(),
            transform: &self.transform,
        }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Iterator for one traversal of a [`Map`].
pub struct MapIter<'a, S, F>
where
    S: Sequence + 'a,
{
    inner: S::Iter<'a>,
    transform: &'a F,
}

impl<'a, S, F, B> Iterator for MapIter<'a, S, F>
where
    S: Sequence + 'a,
    F: Fn(S::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.inner.next().map(self.transform)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Builds a sequence that yields `transform(element)` for every element of
/// `source`.
///
/// Nothing runs until the result is traversed.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Sequence, map, values};
///
/// let labels = map(values(vec![1, 2, 3]), |number| format!("{number}"));
/// assert_eq!(labels.collect::<Vec<_>>(), vec!["1", "2", "3"]);
/// ```
#[inline]
pub const fn map<S, B, F>(source: S, transform: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> B,
{
    Map { source, transform }
}

/// Builds a paired-value sequence that yields `transform(key, value)` for
/// every pair of `source`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lazy_seq::sequence::{Sequence, map2, pairs};
///
/// let labelled = map2(pairs(vec![1, 2, 3]), |index, number| (index, format!("{number}")));
/// let collected: HashMap<usize, String> = labelled.collect();
///
/// assert_eq!(collected[&2], "3");
/// ```
#[inline]
pub fn map2<S, K, V, K2, V2, F>(source: S, transform: F) -> Map<S, impl Fn((K, V)) -> (K2, V2)>
where
    S: Sequence<Item = (K, V)>,
    F: Fn(K, V) -> (K2, V2),
{
    Map {
        source,
        transform: move |(key, value): (K, V)| transform(key, value),
    }
}
