//! In-place sorting that hands the sorted slice back for chaining.
//!
//! Both sort functions reorder the caller's storage and return the very same
//! slice, so a call can be used inline:
//!
//! ```rust
//! use colltools::sort::{descending, sort_slice, sort_slice_with_comparator};
//!
//! let mut values = vec![3, 1, 2];
//! assert_eq!(sort_slice(&mut values).first(), Some(&1));
//!
//! let mut prices = vec![2.5, 9.0, 0.5];
//! sort_slice_with_comparator(&mut prices, descending);
//! assert_eq!(prices, vec![9.0, 2.5, 0.5]);
//! ```
//!
//! Neither sort is stable.

use std::cmp::Ordering;

/// Sorts `input` in ascending natural order and returns it.
///
/// # Examples
///
/// ```rust
/// use colltools::sort::sort_slice;
///
/// let mut names = vec!["d", "c", "b", "a"];
/// let sorted = sort_slice(&mut names);
/// assert_eq!(sorted, ["a", "b", "c", "d"]);
/// ```
pub fn sort_slice<K: Ord>(input: &mut [K]) -> &mut [K] {
    input.sort_unstable();
    input
}

/// Sorts `input` in place using `less` and returns it.
///
/// `less(a, b)` must return `true` exactly when `a` belongs strictly before
/// `b`, and must be a strict weak ordering. Elements for which neither
/// `less(a, b)` nor `less(b, a)` holds are treated as equal and may end up in
/// any relative order. A `less` that is not a strict weak ordering (for
/// example [`ascending`] over floats containing NaN) leaves the order
/// unspecified and may cause a panic.
///
/// # Examples
///
/// ```rust
/// use colltools::sort::sort_slice_with_comparator;
///
/// let mut words = vec!["ccc", "a", "bb"];
/// sort_slice_with_comparator(&mut words, |a, b| a.len() < b.len());
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_slice_with_comparator<K, F>(input: &mut [K], mut less: F) -> &mut [K]
where
    F: FnMut(&K, &K) -> bool,
{
    input.sort_unstable_by(|a, b| ordering_from_less(&mut less, a, b));
    input
}

fn ordering_from_less<K, F>(less: &mut F, a: &K, b: &K) -> Ordering
where
    F: FnMut(&K, &K) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Comparator placing smaller values first: `a < b`.
#[inline]
pub fn ascending<K: PartialOrd>(a: &K, b: &K) -> bool {
    a < b
}

/// Comparator placing larger values first: `a > b`.
#[inline]
pub fn descending<K: PartialOrd>(a: &K, b: &K) -> bool {
    a > b
}
