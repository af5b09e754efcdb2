//! Error types for the collection helpers.
//!
//! Almost every helper in this crate is total over well-typed inputs. The
//! exceptions are:
//!
//! - batch splitting, which rejects a batch size of zero with
//!   [`InvalidBatchSizeError`];
//! - [`for_each_slice`](crate::iterate::for_each_slice), which hands back the
//!   caller's own error type unchanged and therefore needs nothing from this
//!   module.

/// Represents an attempt to split a sequence into batches of size zero.
///
/// A batch must hold at least one element, otherwise splitting would never
/// make progress.
///
/// # Examples
///
/// ```rust
/// use colltools::error::InvalidBatchSizeError;
///
/// let error = InvalidBatchSizeError { batch_size: 0 };
/// assert_eq!(
///     format!("{}", error),
///     "invalid batch size 0: batch size must be at least 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvalidBatchSizeError {
    /// The rejected batch size.
    pub batch_size: usize,
}

impl std::fmt::Display for InvalidBatchSizeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "invalid batch size {}: batch size must be at least 1",
            self.batch_size
        )
    }
}

impl std::error::Error for InvalidBatchSizeError {}

/// Represents every error this crate can produce on its own.
///
/// Useful for callers that combine several helpers and want a single error
/// type to propagate with `?`.
///
/// # Examples
///
/// ```rust
/// use colltools::error::{CollectionError, InvalidBatchSizeError};
///
/// let error: CollectionError = InvalidBatchSizeError { batch_size: 0 }.into();
/// assert!(matches!(error, CollectionError::InvalidBatchSize(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// A batch split was requested with a batch size of zero.
    InvalidBatchSize(InvalidBatchSizeError),
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBatchSize(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBatchSize(error) => Some(error),
        }
    }
}

impl From<InvalidBatchSizeError> for CollectionError {
    fn from(error: InvalidBatchSizeError) -> Self {
        Self::InvalidBatchSize(error)
    }
}

static_assertions::assert_impl_all!(InvalidBatchSizeError: std::error::Error, Send, Sync, Copy);
static_assertions::assert_impl_all!(CollectionError: std::error::Error, Send, Sync, Copy);
