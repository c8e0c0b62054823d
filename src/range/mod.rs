//! Lazy integer range generators.
//!
//! Two families of generators are provided:
//!
//! - Bounded ranges ([`range`], [`range_step`]) run from `start` toward an
//!   inclusive `end`.
//! - Progressions ([`ascending`], [`descending`]) run from `start` while a
//!   stepping counter stays below `count`.
//!
//! Every generator is a [`Sequence`] of `i64`, computes its values on
//! demand, and can be traversed any number of times. Arithmetic never wraps:
//! a value that would overflow `i64` ends the sequence instead.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::range::{range, range_step};
//! use lazy_seq::sequence::Sequence;
//!
//! assert_eq!(range(1, 5).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(range(5, 1).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
//!
//! let odd = range_step(1, 5, 2)?;
//! assert_eq!(odd.collect::<Vec<_>>(), vec![1, 3, 5]);
//! # Ok::<(), lazy_seq::range::RangeError>(())
//! ```

mod error;
mod progression;

use std::cmp::Ordering;
use std::iter::FusedIterator;

pub use error::RangeError;
pub use progression::{Direction, Progression, ProgressionIter, ascending, descending};

use crate::sequence::Sequence;

/// An inclusive integer range walked with a fixed, non-zero step.
///
/// Created by [`range`] or [`range_step`]. The step always moves `start`
/// toward `end`, so every `Range` is finite and yields at least `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: i64,
    end: i64,
    step: i64,
}

static_assertions::assert_impl_all!(Range: Send, Sync, Copy);
static_assertions::assert_impl_all!(RangeIter: Send, Sync);

impl Range {
    /// Returns the first value of the range.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Returns the inclusive bound of the range.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Returns the step between consecutive values.
    ///
    /// A single-value range (`start == end`) reports a step of `1`.
    #[inline]
    #[must_use]
    pub const fn step(&self) -> i64 {
        self.step
    }
}

impl Sequence for Range {
    type Item = i64;
    type Iter<'a> = RangeIter;

    #[inline]
    fn iter(&self) -> RangeIter {
        RangeIter {
            next: Some(self.start),
            end: self.end,
            step: self.step,
        }
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = RangeIter;

    #[inline]
    fn into_iter(self) -> RangeIter {
        Sequence::iter(&self)
    }
}

/// Iterator for one traversal of a [`Range`].
#[derive(Debug, Clone)]
pub struct RangeIter {
    next: Option<i64>,
    end: i64,
    step: i64,
}

impl RangeIter {
    const fn within_bounds(&self, value: i64) -> bool {
        if self.step > 0 {
            value <= self.end
        } else {
            value >= self.end
        }
    }
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next?;
        if !self.within_bounds(current) {
            self.next = None;
            return None;
        }
        self.next = current.checked_add(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(current) if self.within_bounds(current) => {
                (i128::from(self.end) - i128::from(current)) / i128::from(self.step) + 1
            }
            _ => 0,
        };
        usize::try_from(remaining).map_or((usize::MAX, None), |length| (length, Some(length)))
    }
}

impl FusedIterator for RangeIter {}

/// Creates the inclusive range from `start` to `end`.
///
/// The range ascends by one when `start < end` and descends by one
/// otherwise; `start == end` yields exactly one value.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::range::range;
/// use lazy_seq::sequence::Sequence;
///
/// assert_eq!(range(-1, 1).collect::<Vec<_>>(), vec![-1, 0, 1]);
/// assert_eq!(range(3, 3).collect::<Vec<_>>(), vec![3]);
/// ```
#[inline]
#[must_use]
pub const fn range(start: i64, end: i64) -> Range {
    let step = if start < end { 1 } else { -1 };
    Range { start, end, step }
}

/// Creates the range from `start` toward `end`, advancing by `step`.
///
/// `start` is always the first value. `end` is included only when it is an
/// exact multiple of `step` away from `start`. When `start == end` the range
/// yields `start` once, whatever the step.
///
/// # Errors
///
/// Returns [`RangeError::NonTerminating`] when `step` cannot reach `end`:
/// a zero step, a negative step while ascending, or a positive step while
/// descending.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::range::range_step;
/// use lazy_seq::sequence::Sequence;
///
/// assert_eq!(range_step(1, 4, 2)?.collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(range_step(5, 2, -2)?.collect::<Vec<_>>(), vec![5, 3]);
/// assert!(range_step(1, 5, 0).is_err());
/// # Ok::<(), lazy_seq::range::RangeError>(())
/// ```
pub fn range_step(start: i64, end: i64, step: i64) -> Result<Range, RangeError> {
    let step = match start.cmp(&end) {
        Ordering::Equal => 1,
        Ordering::Less if step > 0 => step,
        Ordering::Greater if step < 0 => step,
        _ => {
            tracing::debug!(start, end, step, "rejecting range whose step never reaches its end");
            return Err(RangeError::NonTerminating { start, end, step });
        }
    };
    tracing::trace!(start, end, step, "stepped range");
    Ok(Range { start, end, step })
}
