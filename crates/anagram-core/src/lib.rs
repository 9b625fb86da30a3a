//! Shared building blocks for anagram indexing.
//!
//! - [`character`] -- Simple one-to-one case folding
//! - [`sort`] -- Stable, comparator-driven insertion sort
//! - [`key`] -- Canonical anagram keys

pub mod character;
pub mod key;
pub mod sort;

pub use key::{CanonicalKey, canonical_key};
pub use sort::{insertion_sort, insertion_sort_by};
