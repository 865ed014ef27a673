//! Exact rational arithmetic for fracsort
//!
//! This crate contains the `Rational` value type, its error type, and the
//! comparison-driven insertion sort used to exercise rational ordering. Random
//! workloads, timing and the command-line demo live in the `fracsort-demo`
//! crate.

pub mod error;
pub mod numeric;
pub mod sort;

// Re-export commonly used items for convenience
pub use error::{RationalError, RationalErrorKind};
pub use numeric::{Rational, harmonic_sum};
pub use sort::{insertion_sort, insertion_sort_by, insertion_sort_rationals};
