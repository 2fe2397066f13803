//! Errors surfaced by index construction.

use thiserror::Error;

/// The text does not fit the chosen index type.
///
/// Returned by suffix-array construction and by
/// [`SuffixTree::push_back`](crate::tree::SuffixTree::push_back); search
/// misses are not errors and are reported as `None` or an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("text length {len} exceeds index capacity {max}")]
pub struct CapacityError {
    /// Offending text length.
    pub len: usize,
    /// Largest length the index type can address here.
    pub max: usize,
}
