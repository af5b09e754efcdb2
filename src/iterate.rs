//! In-place iteration with early termination.

/// Calls `function` with the index and a mutable reference to each element
/// of `input`, in ascending index order, stopping at the first error.
///
/// The first `Err` returned by `function` is handed back unchanged and no
/// further elements are visited. Mutations made by earlier successful calls
/// are kept; there is no rollback. Returns `Ok(())` when every call
/// succeeds.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use colltools::iterate::for_each_slice;
///
/// let mut values = vec![1, 2, 3, 4];
/// let result = for_each_slice(&mut values, |index, value| {
///     if index == 2 {
///         return Err(format!("stopped at {index}"));
///     }
///     *value *= 10;
///     Ok(())
/// });
///
/// assert_eq!(result, Err("stopped at 2".to_string()));
/// assert_eq!(values, vec![10, 20, 3, 4]);
/// ```
pub fn for_each_slice<X, E, F>(input: &mut [X], mut function: F) -> Result<(), E>
where
    F: FnMut(usize, &mut X) -> Result<(), E>,
{
    for (index, element) in input.iter_mut().enumerate() {
        if let Err(error) = function(index, element) {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, "for_each_slice stopped at first error");
            return Err(error);
        }
    }
    Ok(())
}
