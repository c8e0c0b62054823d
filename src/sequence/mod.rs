//! Lazy, re-invocable sequences and their combinators.
//!
//! A [`Sequence`] is a value that can start any number of independent
//! traversals. Every call to [`Sequence::iter`] re-runs production from the
//! first element, so a sequence built by composition (for example a
//! [`Filter`] over a [`Map`]) re-runs its whole upstream pipeline on each
//! traversal and never caches anything.
//!
//! Two traversal styles are available:
//!
//! - **Pull**: [`Sequence::iter`] returns a plain [`Iterator`]. Stopping early
//!   is simply not asking for the next element.
//! - **Callback**: [`Sequence::visit`] hands each element to a consumer that
//!   returns `true` to continue or `false` to stop.
//!
//! Paired-value sequences are ordinary sequences whose item is a 2-tuple
//! (`Sequence<Item = (K, V)>`). The `*2` operations ([`map2`], [`filter2`],
//! [`reduce2`]) are thin adapters over the single-value machinery.
//!
//! # Caller-supplied functions
//!
//! Transforms and predicates are `Fn` and are expected to be pure: they are
//! called lazily, once per pulled element, and again on every traversal.
//! Combining functions passed to [`reduce`] are `FnMut`; each call happens
//! strictly after the previous one returns.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::sequence::{Sequence, values};
//!
//! let odd_squares = values(vec![1, 2, 3, 4, 5])
//!     .filter(|number| number % 2 != 0)
//!     .map(|number| number * number);
//!
//! assert_eq!(odd_squares.collect::<Vec<_>>(), vec![1, 9, 25]);
//! // A second traversal reproduces the same values.
//! assert_eq!(odd_squares.reduce(|total, number| total + number, 0), 35);
//! ```

mod filter;
mod map;
mod reduce;
mod source;

pub use filter::{Filter, FilterIter, filter, filter2};
pub use map::{Map, MapIter, map, map2};
pub use reduce::{reduce, reduce2};
pub use source::{Empty, FromFn, Pairs, Values, empty, from_fn, pairs, values};

/// The outcome of a callback-driven traversal.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Sequence, Traversal, values};
///
/// let numbers = values(vec![1, 2, 3]);
/// assert_eq!(numbers.visit(|_| true), Traversal::Exhausted);
/// assert_eq!(numbers.visit(|number| number < 2), Traversal::Stopped);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// The sequence ran out of elements.
    Exhausted,
    /// The consumer asked to stop before the sequence ran out.
    Stopped,
}

impl Traversal {
    /// Returns `true` if the traversal reached the end of the sequence.
    #[inline]
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Returns `true` if the consumer stopped the traversal early.
    #[inline]
    #[must_use]
    pub const fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

/// A lazy producer of ordered elements that can be traversed repeatedly.
///
/// Implementors only provide [`iter`](Sequence::iter). Each call must start
/// a fresh traversal that reproduces the same elements in the same order,
/// provided the underlying source is stable.
///
/// Traversal borrows the sequence immutably, so several traversals of one
/// sequence value may be in flight at once (on different threads, if the
/// sequence is `Sync`).
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{Sequence, pairs};
///
/// let letters = pairs(vec!['a', 'b', 'c']);
/// let shifted = letters.map2(|index, letter| (index + 1, letter.to_ascii_uppercase()));
///
/// assert_eq!(
///     shifted.collect::<Vec<_>>(),
///     vec![(1, 'A'), (2, 'B'), (3, 'C')]
/// );
/// ```
pub trait Sequence {
    /// The element type produced by a traversal.
    type Item;

    /// The iterator driving one traversal.
    type Iter<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Starts a new traversal from the first element.
    fn iter(&self) -> Self::Iter<'_>;

    /// Traverses the sequence, handing each element to `consumer`.
    ///
    /// Production stops as soon as `consumer` returns `false`. An empty
    /// sequence never calls `consumer`.
    fn visit<F>(&self, mut consumer: F) -> Traversal
    where
        F: FnMut(Self::Item) -> bool,
    {
        for item in self.iter() {
            if !consumer(item) {
                return Traversal::Stopped;
            }
        }
        Traversal::Exhausted
    }

    /// Collects one traversal into any [`FromIterator`] container.
    fn collect<C>(&self) -> C
    where
        C: FromIterator<Self::Item>,
    {
        self.iter().collect()
    }

    /// Method form of [`map`].
    #[inline]
    fn map<B, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
    {
        map(self, transform)
    }

    /// Method form of [`map2`].
    #[inline]
    fn map2<K, V, K2, V2, F>(self, transform: F) -> Map<Self, impl Fn((K, V)) -> (K2, V2)>
    where
        Self: Sized + Sequence<Item = (K, V)>,
        F: Fn(K, V) -> (K2, V2),
    {
        map2(self, transform)
    }

    /// Method form of [`filter`].
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Method form of [`filter2`].
    #[inline]
    fn filter2<K, V, P>(self, predicate: P) -> Filter<Self, impl Fn(&(K, V)) -> bool>
    where
        Self: Sized + Sequence<Item = (K, V)>,
        P: Fn(&K, &V) -> bool,
    {
        filter2(self, predicate)
    }

    /// Method form of [`reduce`].
    #[inline]
    fn reduce<B, F>(&self, combine: F, seed: B) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        reduce(self, combine, seed)
    }

    /// Method form of [`reduce2`].
    #[inline]
    fn reduce2<K, V, B, F>(&self, combine: F, seed: B) -> B
    where
        Self: Sized + Sequence<Item = (K, V)>,
        F: FnMut(B, K, V) -> B,
    {
        reduce2(self, combine, seed)
    }
}

/// A borrowed sequence is a sequence, which lets several pipelines share one
/// source without cloning it.
impl<S: Sequence> Sequence for &S {
    type Item = S::Item;
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}
