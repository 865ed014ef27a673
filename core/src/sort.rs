//! Comparison-driven insertion sort.
//!
//! The input slice is never touched: each call copies it into a fresh `Vec`
//! and sorts the copy. Equal elements keep their relative order.

use crate::numeric::Rational;

/// Sort a copy of `items` using a strict less-than predicate.
///
/// Each element is shifted left past every predecessor it is strictly less
/// than, so the shift stops at the first predecessor that is not greater.
#[tracing::instrument(level = "trace", skip_all, fields(len = items.len()))]
pub fn insertion_sort_by<T, F>(items: &[T], mut less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut sorted = items.to_vec();

    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 && less(&sorted[j], &sorted[j - 1]) {
            sorted.swap(j, j - 1);
            j -= 1;
        }
    }

    sorted
}

/// Sort a copy of `items` by their `<` operator.
pub fn insertion_sort<T>(items: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    insertion_sort_by(items, |a, b| a < b)
}

/// Sort a copy of `items` by [`Rational::less_than`].
pub fn insertion_sort_rationals(items: &[Rational]) -> Vec<Rational> {
    insertion_sort_by(items, Rational::less_than)
}
