//! Set operations over the key sets of hash maps.
//!
//! The two maps being compared may have different value types and different
//! hashers; only their keys take part.
//!
//! # Examples
//!
//! ```rust
//! use colltools::set_ops::symmetric_difference_keys;
//! use std::collections::HashMap;
//!
//! let before = HashMap::from([(1, "a"), (2, "b"), (3, "c")]);
//! let after = HashMap::from([(2, 20), (3, 30), (4, 40)]);
//!
//! let (mut removed, mut added) = symmetric_difference_keys(&before, &after);
//! removed.sort_unstable();
//! added.sort_unstable();
//!
//! assert_eq!(removed, vec![1]);
//! assert_eq!(added, vec![4]);
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// The keys found in exactly one of two maps.
///
/// Produced by [`symmetric_difference`]. Key order within each side follows
/// map iteration order and is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmetricDifference<K> {
    /// Keys present in the first map but not in the second.
    pub left: Vec<K>,
    /// Keys present in the second map but not in the first.
    pub right: Vec<K>,
}

impl<K> SymmetricDifference<K> {
    /// Returns `true` when both maps have the same key set.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Returns the total number of keys found in exactly one map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Splits into `(left, right)`.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Vec<K>, Vec<K>) {
        (self.left, self.right)
    }
}

impl<K> From<SymmetricDifference<K>> for (Vec<K>, Vec<K>) {
    fn from(difference: SymmetricDifference<K>) -> Self {
        difference.into_parts()
    }
}

/// Computes the keys unique to each of `a` and `b`.
///
/// Returns `(left, right)` where `left` holds every key of `a` that is not
/// in `b` and `right` every key of `b` that is not in `a`. Keys present in
/// both maps appear in neither. Order within each side is unspecified; sort
/// the results before comparing them.
pub fn symmetric_difference_keys<K, X, Y, S1, S2>(
    a: &HashMap<K, X, S1>,
    b: &HashMap<K, Y, S2>,
) -> (Vec<K>, Vec<K>)
where
    K: Eq + Hash + Clone,
    S1: BuildHasher,
    S2: BuildHasher,
{
    symmetric_difference(a, b).into_parts()
}

/// Like [`symmetric_difference_keys`], returning a named
/// [`SymmetricDifference`].
///
/// # Examples
///
/// ```rust
/// use colltools::set_ops::symmetric_difference;
/// use std::collections::HashMap;
///
/// let same_keys = symmetric_difference(
///     &HashMap::from([("x", 1)]),
///     &HashMap::from([("x", "one")]),
/// );
/// assert!(same_keys.is_empty());
/// ```
pub fn symmetric_difference<K, X, Y, S1, S2>(
    a: &HashMap<K, X, S1>,
    b: &HashMap<K, Y, S2>,
) -> SymmetricDifference<K>
where
    K: Eq + Hash + Clone,
    S1: BuildHasher,
    S2: BuildHasher,
{
    SymmetricDifference {
        left: keys_missing_from(a, b),
        right: keys_missing_from(b, a),
    }
}

fn keys_missing_from<K, X, Y, S1, S2>(
    source: &HashMap<K, X, S1>,
    other: &HashMap<K, Y, S2>,
) -> Vec<K>
where
    K: Eq + Hash + Clone,
    S2: BuildHasher,
{
    source
        .keys()
        .filter(|key| !other.contains_key(*key))
        .cloned()
        .collect()
}
