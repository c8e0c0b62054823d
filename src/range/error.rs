//! Errors raised while configuring integer ranges.

/// A range configuration that cannot produce a finite sequence.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::range::{RangeError, range_step};
///
/// let error = range_step(1, 5, -1).unwrap_err();
/// assert_eq!(error, RangeError::NonTerminating { start: 1, end: 5, step: -1 });
/// assert_eq!(
///     error.to_string(),
///     "iterating over an infinite range (start: 1, step: -1, end: 5)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum RangeError {
    /// The step is zero or points away from `end`, so `end` is never reached.
    #[error("iterating over an infinite range (start: {start}, step: {step}, end: {end})")]
    NonTerminating {
        /// First value of the requested range.
        start: i64,
        /// Bound the range was asked to reach.
        end: i64,
        /// Offending step.
        step: i64,
    },
}
