//! Splitting sequences into fixed-size batches.
//!
//! A sequence of `n` elements split with batch size `b` yields
//! `ceil(n / b)` contiguous batches. Every batch except possibly the last
//! holds exactly `b` elements, the last holds the remaining `1..=b`, and
//! concatenating the batches reproduces the input. An empty input yields no
//! batches at all, not one empty batch.
//!
//! A batch size of zero is rejected with [`InvalidBatchSizeError`].
//!
//! # Examples
//!
//! ```rust
//! use colltools::batch::split_into_batches;
//!
//! let input: Vec<i32> = (1..=10).collect();
//! let batches = split_into_batches(&input, 3).unwrap();
//!
//! assert_eq!(
//!     batches,
//!     vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
//! );
//! ```

use crate::error::InvalidBatchSizeError;

/// Returns the number of batches a sequence of `length` elements splits
/// into with the given `batch_size`.
///
/// # Errors
///
/// Returns [`InvalidBatchSizeError`] when `batch_size` is zero.
///
/// # Examples
///
/// ```rust
/// use colltools::batch::batch_count;
///
/// assert_eq!(batch_count(10, 3), Ok(4));
/// assert_eq!(batch_count(9, 3), Ok(3));
/// assert_eq!(batch_count(0, 3), Ok(0));
/// assert!(batch_count(1, 0).is_err());
/// ```
pub fn batch_count(length: usize, batch_size: usize) -> Result<usize, InvalidBatchSizeError> {
    validate_batch_size(batch_size)?;
    Ok(length.div_ceil(batch_size))
}

/// Splits `input` into contiguous batches of at most `batch_size` cloned
/// elements.
///
/// # Errors
///
/// Returns [`InvalidBatchSizeError`] when `batch_size` is zero.
///
/// # Examples
///
/// ```rust
/// use colltools::batch::split_into_batches;
///
/// let empty: [u8; 0] = [];
/// assert_eq!(split_into_batches(&empty, 4), Ok(Vec::<Vec<u8>>::new()));
/// assert!(split_into_batches(&[1, 2], 0).is_err());
/// ```
pub fn split_into_batches<T: Clone>(
    input: &[T],
    batch_size: usize,
) -> Result<Vec<Vec<T>>, InvalidBatchSizeError> {
    let mut result = Vec::with_capacity(batch_count(input.len(), batch_size)?);
    result.extend(input.chunks(batch_size).map(<[T]>::to_vec));
    Ok(result)
}

/// Splits `input` into contiguous batches of at most `batch_size` elements,
/// moving the elements instead of cloning them.
///
/// # Errors
///
/// Returns [`InvalidBatchSizeError`] when `batch_size` is zero.
///
/// # Examples
///
/// ```rust
/// use colltools::batch::split_vec_into_batches;
///
/// let jobs = vec![String::from("a"), String::from("b"), String::from("c")];
/// let batches = split_vec_into_batches(jobs, 2).unwrap();
///
/// assert_eq!(batches, vec![vec!["a", "b"], vec!["c"]]);
/// ```
pub fn split_vec_into_batches<T>(
    input: Vec<T>,
    batch_size: usize,
) -> Result<Vec<Vec<T>>, InvalidBatchSizeError> {
    let mut result = Vec::with_capacity(batch_count(input.len(), batch_size)?);
    let mut elements = input.into_iter();
    loop {
        let batch: Vec<T> = elements.by_ref().take(batch_size).collect();
        if batch.is_empty() {
            break;
        }
        result.push(batch);
    }
    Ok(result)
}

fn validate_batch_size(batch_size: usize) -> Result<(), InvalidBatchSizeError> {
    if batch_size == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!(batch_size, "rejected batch split with zero batch size");
        return Err(InvalidBatchSizeError { batch_size });
    }
    Ok(())
}
