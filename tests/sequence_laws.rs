#![cfg(feature = "sequence")]
//! Property-based tests for sequence combinator laws.
//!
//! This module verifies that:
//!
//! - **Map**: preserves length, and element `i` is `f(source[i])`
//! - **Filter**: yields exactly the accepted subsequence, in order
//! - **Reduce**: equals a left fold over the collected source
//! - **Independence**: traversing twice yields identical results
//! - **Functor Laws**: identity and composition hold for `map`

use lazy_seq::sequence::{Sequence, filter2, map2, pairs, values};
use proptest::prelude::*;

// =============================================================================
// Map
// =============================================================================

proptest! {
    /// Mapping preserves cardinality and applies f element-wise
    #[test]
    fn prop_map_element_wise(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let function = |number: i32| number.wrapping_mul(3);
        let mapped: Vec<i32> = values(items.clone()).map(function).collect();

        prop_assert_eq!(mapped.len(), items.len());
        for (index, item) in items.iter().enumerate() {
            prop_assert_eq!(mapped[index], function(*item));
        }
    }
}

proptest! {
    /// Functor Identity Law: map(id) == id
    #[test]
    fn prop_map_identity(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mapped: Vec<i32> = values(items.clone()).map(|number| number).collect();
        prop_assert_eq!(mapped, items);
    }
}

proptest! {
    /// Functor Composition Law: map(f).map(g) == map(|x| g(f(x)))
    #[test]
    fn prop_map_composition(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let function1 = |number: i32| number.wrapping_add(1);
        let function2 = |number: i32| number.wrapping_mul(2);

        let left: Vec<i32> = values(items.clone()).map(function1).map(function2).collect();
        let right: Vec<i32> = values(items).map(|number| function2(function1(number))).collect();

        prop_assert_eq!(left, right);
    }
}

proptest! {
    /// map2 agrees with applying the transform to each collected pair
    #[test]
    fn prop_map2_element_wise(items in prop::collection::vec(any::<i16>(), 0..64)) {
        let mapped: Vec<(usize, i32)> = map2(pairs(items.clone()), |index, item| {
            (index * 2, i32::from(item) + 1)
        })
        .collect();

        let expected: Vec<(usize, i32)> = items
            .iter()
            .enumerate()
            .map(|(index, item)| (index * 2, i32::from(*item) + 1))
            .collect();

        prop_assert_eq!(mapped, expected);
    }
}

// =============================================================================
// Filter
// =============================================================================

proptest! {
    /// Filtering yields exactly the accepted subsequence in original order
    #[test]
    fn prop_filter_subsequence(
        items in prop::collection::vec(any::<i32>(), 0..64),
        divisor in 1i32..8,
    ) {
        let filtered: Vec<i32> = values(items.clone())
            .filter(|number| number % divisor == 0)
            .collect();
        let expected: Vec<i32> = items.into_iter().filter(|number| number % divisor == 0).collect();

        prop_assert_eq!(filtered, expected);
    }
}

proptest! {
    /// filter2 never yields more pairs than its source
    #[test]
    fn prop_filter2_cardinality(items in prop::collection::vec(any::<u8>(), 0..64)) {
        let source = pairs(items);
        let filtered = filter2(&source, |index, item| (index + usize::from(*item)) % 2 == 0);

        prop_assert!(filtered.iter().count() <= source.iter().count());
    }
}

// =============================================================================
// Reduce
// =============================================================================

proptest! {
    /// Reduce is a left fold over the collected source
    #[test]
    fn prop_reduce_left_fold(
        items in prop::collection::vec(any::<i64>(), 0..64),
        seed in any::<i64>(),
    ) {
        let combine = |total: i64, number: i64| total.wrapping_mul(31).wrapping_add(number);

        let reduced = values(items.clone()).reduce(combine, seed);
        let expected = items.into_iter().fold(seed, combine);

        prop_assert_eq!(reduced, expected);
    }
}

proptest! {
    /// Reducing an empty source returns the seed
    #[test]
    fn prop_reduce_empty_returns_seed(seed in any::<String>()) {
        let reduced = values(Vec::<u8>::new()).reduce(|total: String, _| total + "!", seed.clone());
        prop_assert_eq!(reduced, seed);
    }
}

// =============================================================================
// Traversal Independence
// =============================================================================

proptest! {
    /// Traversing a composed sequence twice yields identical results
    #[test]
    fn prop_traversal_independence(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let composed = values(items)
            .filter(|number| number % 2 != 0)
            .map(|number| number.wrapping_sub(7));

        let first: Vec<i32> = composed.collect();
        let second: Vec<i32> = composed.collect();

        prop_assert_eq!(first, second);
    }
}
