//! Element-wise transformation of slices.
//!
//! Every function here allocates a new `Vec` and leaves its input untouched.
//! None of them has an error channel: a transformation that can fail should
//! encode the failure in its output type (for example by returning a
//! `Result` per element).
//!
//! # Examples
//!
//! ```rust
//! use colltools::transform::{map_and_filter_slice_with_index, map_slice};
//!
//! let words = vec!["alpha", "beta", "gamma"];
//!
//! let lengths = map_slice(&words, |word| word.len());
//! assert_eq!(lengths, vec![5, 4, 5]);
//!
//! let even_positions = map_and_filter_slice_with_index(
//!     &words,
//!     |index, word| format!("{index}:{word}"),
//!     |index, _| index % 2 == 0,
//! );
//! assert_eq!(even_positions, vec!["0:alpha", "2:gamma"]);
//! ```

/// Applies `function` to every element of `input`.
///
/// The result has the same length as `input`, and element `i` of the result
/// is `function(&input[i])`.
///
/// # Examples
///
/// ```rust
/// use colltools::transform::map_slice;
///
/// let doubled = map_slice(&[1, 2, 3], |value| value * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map_slice<X, Y, F>(input: &[X], function: F) -> Vec<Y>
where
    F: FnMut(&X) -> Y,
{
    let mut result = Vec::with_capacity(input.len());
    result.extend(input.iter().map(function));
    result
}

/// Applies `function` to every element of `input` together with its
/// zero-based index.
///
/// # Examples
///
/// ```rust
/// use colltools::transform::map_slice_with_index;
///
/// let labels = map_slice_with_index(&["a", "b"], |index, value| format!("{index}{value}"));
/// assert_eq!(labels, vec!["0a", "1b"]);
/// ```
pub fn map_slice_with_index<X, Y, F>(input: &[X], mut function: F) -> Vec<Y>
where
    F: FnMut(usize, &X) -> Y,
{
    let mut result = Vec::with_capacity(input.len());
    for (index, element) in input.iter().enumerate() {
        result.push(function(index, element));
    }
    result
}

/// Maps the elements of `input` that satisfy `predicate`, skipping the rest.
///
/// For each index `i`, `predicate(i, &input[i])` is evaluated first; only
/// when it returns `true` is `function(i, &input[i])` invoked and its result
/// appended. Relative order is preserved.
///
/// The result starts empty and grows as elements are kept, since the final
/// size is not known up front.
///
/// # Examples
///
/// ```rust
/// use colltools::transform::map_and_filter_slice_with_index;
///
/// let squares_of_odd = map_and_filter_slice_with_index(
///     &[1, 2, 3, 4, 5],
///     |_, value| value * value,
///     |_, value| value % 2 == 1,
/// );
/// assert_eq!(squares_of_odd, vec![1, 9, 25]);
/// ```
pub fn map_and_filter_slice_with_index<X, Y, F, P>(
    input: &[X],
    mut function: F,
    mut predicate: P,
) -> Vec<Y>
where
    F: FnMut(usize, &X) -> Y,
    P: FnMut(usize, &X) -> bool,
{
    let mut result = Vec::new();
    for (index, element) in input.iter().enumerate() {
        if predicate(index, element) {
            result.push(function(index, element));
        }
    }
    result
}

/// Consumes `input` and applies `function` to every element by value.
///
/// Behaves like [`map_slice`] but moves each element into `function`, which
/// avoids cloning when the element type is expensive to copy.
///
/// # Examples
///
/// ```rust
/// use colltools::transform::map_vec;
///
/// let names = vec![String::from("ada"), String::from("grace")];
/// let shouted = map_vec(names, |mut name| {
///     name.make_ascii_uppercase();
///     name
/// });
/// assert_eq!(shouted, vec!["ADA", "GRACE"]);
/// ```
pub fn map_vec<X, Y, F>(input: Vec<X>, function: F) -> Vec<Y>
where
    F: FnMut(X) -> Y,
{
    input.into_iter().map(function).collect()
}
