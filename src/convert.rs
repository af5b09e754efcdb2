//! Conversions between slices and hash maps.
//!
//! - [`create_map_from_slice`]: build a map with one entry per distinct key
//! - [`group_by_to_map`]: build a map of key to every value sharing that key
//! - [`create_slice_from_map`]: flatten a map back into a `Vec`
//!
//! Maps produced here use [`DefaultHashBuilder`]; the `_with_hasher`
//! variants take an explicit `BuildHasher` instead. Map iteration order is
//! unspecified, so the order of [`create_slice_from_map`]'s output is too.
//!
//! # Examples
//!
//! ```rust
//! use colltools::convert::group_by_to_map;
//!
//! let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
//! let by_initial = group_by_to_map(
//!     &words,
//!     |word| word.chars().next(),
//!     |word| word.len(),
//! );
//!
//! assert_eq!(by_initial[&Some('a')], vec![5, 7]);
//! assert_eq!(by_initial[&Some('b')], vec![6, 9]);
//! assert_eq!(by_initial[&Some('c')], vec![6]);
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::hash::DefaultHashBuilder;

/// Builds a map from `input`, extracting one key and one value per element.
///
/// `key_function` and `value_function` are each called exactly once per
/// element, in slice order. When several elements produce the same key, the
/// value of the last one wins; this is not an error.
///
/// # Examples
///
/// ```rust
/// use colltools::convert::create_map_from_slice;
///
/// let pairs = [(1, "one"), (2, "two"), (1, "uno")];
/// let map = create_map_from_slice(&pairs, |pair| pair.0, |pair| pair.1);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map[&1], "uno");
/// assert_eq!(map[&2], "two");
/// ```
pub fn create_map_from_slice<X, K, Y, KF, VF>(
    input: &[X],
    key_function: KF,
    value_function: VF,
) -> HashMap<K, Y, DefaultHashBuilder>
where
    K: Eq + Hash,
    KF: FnMut(&X) -> K,
    VF: FnMut(&X) -> Y,
{
    create_map_from_slice_with_hasher(
        input,
        key_function,
        value_function,
        DefaultHashBuilder::default(),
    )
}

/// Like [`create_map_from_slice`], building the map with `hash_builder`.
///
/// # Examples
///
/// ```rust
/// use colltools::convert::create_map_from_slice_with_hasher;
/// use std::collections::hash_map::RandomState;
///
/// let map = create_map_from_slice_with_hasher(
///     &["a", "bb"],
///     |word| word.len(),
///     |word| word.to_uppercase(),
///     RandomState::new(),
/// );
/// assert_eq!(map[&2], "BB");
/// ```
pub fn create_map_from_slice_with_hasher<X, K, Y, KF, VF, S>(
    input: &[X],
    mut key_function: KF,
    mut value_function: VF,
    hash_builder: S,
) -> HashMap<K, Y, S>
where
    K: Eq + Hash,
    KF: FnMut(&X) -> K,
    VF: FnMut(&X) -> Y,
    S: BuildHasher,
{
    let mut result = HashMap::with_capacity_and_hasher(input.len(), hash_builder);
    for element in input {
        let key = key_function(element);
        let value = value_function(element);
        result.insert(key, value);
    }
    result
}

/// Groups the values extracted from `input` by the key extracted from the
/// same element.
///
/// Every element lands in exactly one group. Within a group, values appear
/// in the same relative order as their source elements in `input`.
///
/// # Examples
///
/// ```rust
/// use colltools::convert::group_by_to_map;
///
/// let records = [(1, "a"), (2, "b"), (1, "c")];
/// let groups = group_by_to_map(&records, |record| record.0, |record| record.1);
///
/// assert_eq!(groups[&1], vec!["a", "c"]);
/// assert_eq!(groups[&2], vec!["b"]);
/// ```
pub fn group_by_to_map<X, K, Y, KF, VF>(
    input: &[X],
    key_function: KF,
    value_function: VF,
) -> HashMap<K, Vec<Y>, DefaultHashBuilder>
where
    K: Eq + Hash,
    KF: FnMut(&X) -> K,
    VF: FnMut(&X) -> Y,
{
    group_by_to_map_with_hasher(
        input,
        key_function,
        value_function,
        DefaultHashBuilder::default(),
    )
}

/// Like [`group_by_to_map`], building the map with `hash_builder`.
pub fn group_by_to_map_with_hasher<X, K, Y, KF, VF, S>(
    input: &[X],
    mut key_function: KF,
    mut value_function: VF,
    hash_builder: S,
) -> HashMap<K, Vec<Y>, S>
where
    K: Eq + Hash,
    KF: FnMut(&X) -> K,
    VF: FnMut(&X) -> Y,
    S: BuildHasher,
{
    let mut result: HashMap<K, Vec<Y>, S> =
        HashMap::with_capacity_and_hasher(input.len(), hash_builder);
    for element in input {
        let key = key_function(element);
        let value = value_function(element);
        result.entry(key).or_default().push(value);
    }
    result
}

/// Builds a `Vec` holding `function(&key, &value)` for every entry of
/// `input`.
///
/// The result has exactly `input.len()` elements. Their order follows the
/// map's iteration order and must not be relied upon.
///
/// # Examples
///
/// ```rust
/// use colltools::convert::create_slice_from_map;
/// use std::collections::HashMap;
///
/// let prices = HashMap::from([("tea", 3), ("coffee", 4)]);
/// let mut labels = create_slice_from_map(&prices, |name, price| format!("{name}={price}"));
/// labels.sort();
///
/// assert_eq!(labels, vec!["coffee=4", "tea=3"]);
/// ```
pub fn create_slice_from_map<K, X, Y, F, S>(input: &HashMap<K, X, S>, mut function: F) -> Vec<Y>
where
    F: FnMut(&K, &X) -> Y,
{
    let mut result = Vec::with_capacity(input.len());
    for (key, value) in input {
        result.push(function(key, value));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::RandomState;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        key: i64,
        name: String,
    }

    fn record(key: i64, name: &str) -> Record {
        Record {
            key,
            name: name.to_string(),
        }
    }

    #[rstest]
    fn test_create_map_from_slice_one_entry_per_element() {
        let input = vec![record(1, "name_1"), record(2, "name_2")];

        let result = create_map_from_slice(&input, |value| value.key, |value| value.name.clone());

        assert_eq!(result.len(), 2);
        assert_eq!(result[&1], "name_1");
        assert_eq!(result[&2], "name_2");
    }

    #[rstest]
    fn test_create_map_from_slice_last_write_wins() {
        let input = vec![record(1, "first"), record(2, "other"), record(1, "last")];

        let result = create_map_from_slice(&input, |value| value.key, |value| value.name.clone());

        assert_eq!(result.len(), 2);
        assert_eq!(result[&1], "last");
    }

    #[rstest]
    fn test_create_map_from_slice_calls_extractors_once_per_element() {
        let input = vec![record(1, "a"), record(1, "b"), record(3, "c")];
        let mut key_calls = 0;
        let mut value_calls = 0;

        let _ = create_map_from_slice(
            &input,
            |value| {
                key_calls += 1;
                value.key
            },
            |value| {
                value_calls += 1;
                value.name.clone()
            },
        );

        assert_eq!(key_calls, 3);
        assert_eq!(value_calls, 3);
    }

    #[rstest]
    fn test_create_map_from_slice_with_hasher_uses_given_hasher() {
        let result: HashMap<i64, String, RandomState> = create_map_from_slice_with_hasher(
            &[record(7, "seven")],
            |value| value.key,
            |value| value.name.clone(),
            RandomState::new(),
        );

        assert_eq!(result[&7], "seven");
    }

    #[rstest]
    fn test_group_by_to_map_preserves_group_order() {
        let input = vec![
            record(1, "name_1"),
            record(2, "name_2"),
            record(1, "name_3"),
            record(4, "name_4"),
            record(2, "name_5"),
        ];

        let result = group_by_to_map(&input, |value| value.key, |value| value.name.clone());

        assert_eq!(result.len(), 3);
        assert_eq!(result[&1], vec!["name_1", "name_3"]);
        assert_eq!(result[&2], vec!["name_2", "name_5"]);
        assert_eq!(result[&4], vec!["name_4"]);
    }

    #[rstest]
    fn test_group_by_to_map_empty_input() {
        let input: Vec<Record> = Vec::new();
        let result = group_by_to_map(&input, |value| value.key, |value| value.name.clone());
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_group_by_to_map_with_hasher() {
        let result = group_by_to_map_with_hasher(
            &[1, 2, 3, 4, 5, 6],
            |value| value % 3,
            |value| *value,
            RandomState::new(),
        );

        assert_eq!(result[&0], vec![3, 6]);
        assert_eq!(result[&1], vec![1, 4]);
        assert_eq!(result[&2], vec![2, 5]);
    }

    #[rstest]
    fn test_group_by_to_map_calls_extractors_once_per_element_in_order() {
        let input = vec![record(2, "b"), record(1, "a"), record(2, "c"), record(3, "d")];
        let mut key_calls = Vec::new();
        let mut value_calls = Vec::new();

        let result = group_by_to_map_with_hasher(
            &input,
            |value| {
                key_calls.push(value.name.clone());
                value.key
            },
            |value| {
                value_calls.push(value.name.clone());
                value.name.clone()
            },
            RandomState::new(),
        );

        assert_eq!(key_calls, vec!["b", "a", "c", "d"]);
        assert_eq!(value_calls, vec!["b", "a", "c", "d"]);
        assert_eq!(result.values().map(Vec::len).sum::<usize>(), input.len());
        assert_eq!(result[&2], vec!["b", "c"]);
    }

    #[rstest]
    fn test_create_slice_from_map_one_element_per_entry() {
        let input = HashMap::from([
            (1_i64, record(1, "name_1")),
            (2, record(2, "name_2")),
            (3, record(3, "name_3")),
        ]);

        let mut result = create_slice_from_map(&input, |_, value| value.name.clone());
        result.sort();

        assert_eq!(result, vec!["name_1", "name_2", "name_3"]);
    }

    #[rstest]
    fn test_create_slice_from_map_passes_matching_key() {
        let input = HashMap::from([(1_i64, record(1, "a")), (2, record(2, "b"))]);

        let result = create_slice_from_map(&input, |key, value| *key == value.key);

        assert_eq!(result, vec![true, true]);
    }

    #[rstest]
    fn test_create_slice_from_map_empty() {
        let input: HashMap<i64, Record> = HashMap::new();
        let result = create_slice_from_map(&input, |key, _| *key);
        assert!(result.is_empty());
    }
}
