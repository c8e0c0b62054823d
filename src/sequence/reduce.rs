//! Eager left folds over sequences.

use super::Sequence;

/// Folds every element of `source` into an accumulator, left to right.
///
/// The first call is `combine(seed, first)`, each later call receives the
/// previous result. An empty source returns `seed` unchanged. The source is
/// always drained; `combine` has no way to stop early.
///
/// `combine` may mutate caller-owned state: every call happens strictly
/// after the previous one has returned.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{reduce, values};
///
/// let joined = reduce(&values(vec![1, 2, 3]), |total, number| format!("{total}{number}"), String::from("0"));
/// assert_eq!(joined, "0123");
/// ```
#[inline]
pub fn reduce<S, B, F>(source: &S, combine: F, seed: B) -> B
where
    S: Sequence,
    F: FnMut(B, S::Item) -> B,
{
    source.iter().fold(seed, combine)
}

/// Folds every pair of a paired-value `source` into an accumulator.
///
/// Same sequencing as [`reduce`], with `combine(accumulator, key, value)`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{reduce2, pairs};
///
/// let sums = reduce2(
///     &pairs(vec![1, 2, 3]),
///     |mut total: Vec<usize>, index, number| {
///         total.push(index + number);
///         total
///     },
///     Vec::with_capacity(3),
/// );
/// assert_eq!(sums, vec![1, 3, 5]);
/// ```
#[inline]
pub fn reduce2<S, K, V, B, F>(source: &S, mut combine: F, seed: B) -> B
where
    S: Sequence<Item = (K, V)>,
    F: FnMut(B, K, V) -> B,
{
    source
        .iter()
        .fold(seed, |accumulator, (key, value)| combine(accumulator, key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{empty, pairs, values};
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    fn test_reduce_to_string() {
        let result = reduce(
            &values(vec![1, 2, 3]),
            |total, number| format!("{total}{number}"),
            String::from("0"),
        );
        assert_eq!(result, "0123");
    }

    #[rstest]
    fn test_reduce_to_map() {
        let result = reduce(
            &values(vec![1, 2, 3]),
            |mut total: HashMap<i32, i32>, number| {
                total.insert(number, number);
                total
            },
            HashMap::new(),
        );
        assert_eq!(result, HashMap::from([(1, 1), (2, 2), (3, 3)]));
    }

    #[rstest]
    fn test_reduce_empty_returns_seed() {
        assert_eq!(reduce(&empty::<i32>(), |total, number| total + number, 42), 42);
    }

    #[rstest]
    fn test_reduce2_to_string() {
        let result = reduce2(
            &pairs(vec![1, 2, 3]),
            |total, index, number| format!("{total} {index}:{number}"),
            String::from("#"),
        );
        assert_eq!(result, "# 0:1 1:2 2:3");
    }

    #[rstest]
    fn test_reduce2_to_map() {
        let result = reduce2(
            &pairs(vec![1, 2, 3]),
            |mut total: HashMap<usize, i32>, index, number| {
                total.insert(index, number);
                total
            },
            HashMap::new(),
        );
        assert_eq!(result, HashMap::from([(0, 1), (1, 2), (2, 3)]));
    }
}
