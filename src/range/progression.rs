//! Arithmetic progressions bounded by a counter rather than an end value.

use std::iter::FusedIterator;

use crate::sequence::Sequence;

/// The direction in which a [`Progression`] moves away from its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Each value is larger than the previous one.
    Ascending,
    /// Each value is smaller than the previous one.
    Descending,
}

/// A progression of integers driven by a stepping counter.
///
/// The counter takes the values `0, step, 2 * step, ...` while it stays
/// below `count`, and each counter value `offset` yields `start + offset`
/// (ascending) or `start - offset` (descending). With a step of one this
/// yields exactly `count` values.
///
/// A zero step never advances the counter, so a progression with
/// `step == 0` and `count > 0` repeats `start` forever; stop it from the
/// consumer side (for example with [`Iterator::take`]).
///
/// Created by [`ascending`] or [`descending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Progression {
    start: i64,
    step: u64,
    count: u64,
    direction: Direction,
}

static_assertions::assert_impl_all!(Progression: Send, Sync, Copy);

impl Progression {
    /// Returns the first value of the progression.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Returns the amount the stepping counter grows by.
    #[inline]
    #[must_use]
    pub const fn step(&self) -> u64 {
        self.step
    }

    /// Returns the exclusive bound of the stepping counter.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Returns the direction of the progression.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Sequence for Progression {
    type Item = i64;
    type Iter<'a> = ProgressionIter;

    #[inline]
    fn iter(&self) -> ProgressionIter {
        ProgressionIter {
            offset: Some(0),
            progression: *self,
        }
    }
}

impl IntoIterator for Progression {
    type Item = i64;
    type IntoIter = ProgressionIter;

    #[inline]
    fn into_iter(self) -> ProgressionIter {
        Sequence::iter(&self)
    }
}

/// Iterator for one traversal of a [`Progression`].
#[derive(Debug, Clone)]
pub struct ProgressionIter {
    offset: Option<u64>,
    progression: Progression,
}

impl Iterator for ProgressionIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let offset = self.offset.filter(|offset| *offset < self.progression.count);
        let value = offset.and_then(|offset| match self.progression.direction {
            Direction::Ascending => self.progression.start.checked_add_unsigned(offset),
            Direction::Descending => self.progression.start.checked_sub_unsigned(offset),
        });
        let Some(value) = value else {
            self.offset = None;
            return None;
        };
        self.offset = offset.and_then(|offset| offset.checked_add(self.progression.step));
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Progression { step, count, .. } = self.progression;
        match self.offset {
            Some(offset) if offset < count => {
                if step == 0 {
                    (usize::MAX, None)
                } else {
                    // Overflow of the yielded value may end the traversal sooner.
                    (0, usize::try_from((count - offset).div_ceil(step)).ok())
                }
            }
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for ProgressionIter {}

/// Creates an ascending progression: `start`, `start + step`, ... while the
/// stepping counter stays below `count`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::range::ascending;
/// use lazy_seq::sequence::Sequence;
///
/// assert_eq!(ascending(1, 1, 3).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(ascending(0, 2, 5).collect::<Vec<_>>(), vec![0, 2, 4]);
/// ```
#[inline]
#[must_use]
pub const fn ascending(start: i64, step: u64, count: u64) -> Progression {
    Progression {
        start,
        step,
        count,
        direction: Direction::Ascending,
    }
}

/// Creates a descending progression: `start`, `start - step`, ... while the
/// stepping counter stays below `count`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::range::descending;
/// use lazy_seq::sequence::Sequence;
///
/// assert_eq!(descending(3, 1, 3).collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
#[inline]
#[must_use]
pub const fn descending(start: i64, step: u64, count: u64) -> Progression {
    Progression {
        start,
        step,
        count,
        direction: Direction::Descending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, 3, vec![1, 2, 3])]
    #[case(-1, 1, 3, vec![-1, 0, 1])]
    #[case(-3, 1, 3, vec![-3, -2, -1])]
    #[case(10, 3, 7, vec![10, 13, 16])]
    #[case(5, 1, 0, vec![])]
    fn test_ascending(
        #[case] start: i64,
        #[case] step: u64,
        #[case] count: u64,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(ascending(start, step, count).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case(3, 1, 3, vec![3, 2, 1])]
    #[case(1, 1, 3, vec![1, 0, -1])]
    #[case(-1, 1, 3, vec![-1, -2, -3])]
    #[case(0, 4, 9, vec![0, -4, -8])]
    fn test_descending(
        #[case] start: i64,
        #[case] step: u64,
        #[case] count: u64,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(descending(start, step, count).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_zero_step_repeats_start() {
        let repeated: Vec<i64> = ascending(4, 0, 2).iter().take(5).collect();
        assert_eq!(repeated, vec![4; 5]);
        assert_eq!(ascending(4, 0, 2).iter().size_hint(), (usize::MAX, None));
    }

    #[rstest]
    fn test_overflow_ends_progression() {
        let near_max = ascending(i64::MAX - 1, 1, 10);
        assert_eq!(near_max.collect::<Vec<_>>(), vec![i64::MAX - 1, i64::MAX]);

        let near_min = descending(i64::MIN + 1, 1, 10);
        assert_eq!(near_min.collect::<Vec<_>>(), vec![i64::MIN + 1, i64::MIN]);
    }

    #[rstest]
    fn test_size_hint_upper_bound() {
        let mut traversal = ascending(0, 2, 5).iter();
        assert_eq!(traversal.size_hint(), (0, Some(3)));
        traversal.next();
        assert_eq!(traversal.size_hint(), (0, Some(2)));
    }

    #[rstest]
    fn test_progression_accessors() {
        let progression = descending(9, 2, 4);
        assert_eq!(progression.start(), 9);
        assert_eq!(progression.step(), 2);
        assert_eq!(progression.count(), 4);
        assert_eq!(progression.direction(), Direction::Descending);
    }
}
