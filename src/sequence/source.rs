//! Sequences built from owned data or iterator factories.

use std::fmt;
use std::iter::{Cloned, Enumerate};
use std::marker::PhantomData;
use std::slice;

use super::Sequence;

/// A sequence over the elements of an owned `Vec`, cloned per traversal.
///
/// Created by [`values`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Values<T> {
    items: Vec<T>,
}

impl<T: Clone> Sequence for Values<T> {
    type Item = T;
    type Iter<'a>
        = Cloned<slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter().cloned()
    }
}

/// Creates a sequence that yields clones of `items` in order.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Sequence, values};
///
/// let words = values(vec!["a", "b"]);
/// assert_eq!(words.collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[inline]
#[must_use]
pub const fn values<T: Clone>(items: Vec<T>) -> Values<T> {
    Values { items }
}

/// A paired-value sequence of `(index, element)` over an owned `Vec`.
///
/// Created by [`pairs`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pairs<T> {
    items: Vec<T>,
}

impl<T: Clone> Sequence for Pairs<T> {
    type Item = (usize, T);
    type Iter<'a>
        = Enumerate<Cloned<slice::Iter<'a, T>>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter().cloned().enumerate()
    }
}

/// Creates a paired-value sequence of each element together with its index.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Sequence, pairs};
///
/// let indexed = pairs(vec![10, 20]);
/// assert_eq!(indexed.collect::<Vec<_>>(), vec![(0, 10), (1, 20)]);
/// ```
#[inline]
#[must_use]
pub const fn pairs<T: Clone>(items: Vec<T>) -> Pairs<T> {
    Pairs { items }
}

/// A sequence that asks a factory for a fresh iterator on every traversal.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    factory: F,
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Iter<'a>
        = I::IntoIter
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (self.factory)().into_iter()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Creates a sequence from a factory of iterators.
///
/// The factory runs once per traversal, so it should build the same
/// elements each time.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Sequence, from_fn};
///
/// let squares = from_fn(|| (1..=3).map(|number| number * number));
/// assert_eq!(squares.collect::<Vec<_>>(), vec![1, 4, 9]);
/// assert_eq!(squares.collect::<Vec<_>>(), vec![1, 4, 9]);
/// ```
#[inline]
pub const fn from_fn<F, I>(factory: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { factory }
}

/// A sequence with no elements.
///
/// Created by [`empty`].
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Iter<'a>
        = std::iter::Empty<T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        std::iter::empty()
    }
}

/// Creates a sequence that yields nothing.
#[inline]
#[must_use]
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}
