//! # lazy-seq
//!
//! Lazy, re-invocable sequences and a small set of composable operations
//! over them.
//!
//! ## Overview
//!
//! - **Sequences**: the [`Sequence`](sequence::Sequence) trait, a producer
//!   that can be traversed any number of times, each traversal re-running
//!   production from the start.
//! - **Combinators**: `map`, `filter` and `reduce`, plus their paired-value
//!   forms `map2`, `filter2` and `reduce2` for sequences of 2-tuples.
//! - **Ranges**: inclusive integer ranges ([`range`](range::range),
//!   [`range_step`](range::range_step)) and counter-bounded progressions
//!   ([`ascending`](range::ascending), [`descending`](range::descending)).
//!
//! Nothing is buffered: each stage does its work inline as the consumer
//! pulls the next element, and a consumer stops a traversal simply by no
//! longer pulling.
//!
//! ## Feature Flags
//!
//! - `sequence`: the `Sequence` trait, sources and combinators
//! - `range`: integer range generators (implies `sequence`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazy_seq::prelude::*;
//!
//! let evens = values(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).filter(|number| number % 2 == 0);
//! let squares = evens.map(|number| number * number);
//!
//! assert_eq!(squares.collect::<Vec<_>>(), vec![4, 16, 36, 64, 100]);
//! assert_eq!(squares.reduce(|total, number| total + number, 0), 220);
//!
//! # #[cfg(feature = "range")]
//! # {
//! let multiples_of_three = range(1, 10).filter(|number| number % 3 == 0);
//! assert_eq!(multiples_of_three.collect::<Vec<_>>(), vec![3, 6, 9]);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every public item of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use lazy_seq::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "range")]
    pub use crate::range::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "range")]
pub mod range;
