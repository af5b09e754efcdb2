//! # colltools
//!
//! Generic helpers for everyday work with slices and hash maps.
//!
//! ## Overview
//!
//! Every helper is a plain, stateless function over containers supplied by
//! the caller. The crate provides:
//!
//! - **Transform**: element-wise mapping, optionally index-aware and filtering
//! - **Convert**: slice to map, grouping by key, and map back to slice
//! - **Iterate**: fallible in-place mutation that stops at the first error
//! - **Set operations**: keys present in only one of two maps
//! - **Batch**: fixed-size contiguous batches
//! - **Sort**: in-place sorting that returns the slice for chaining
//!
//! All operations run in a single linear pass (sorting aside). Only
//! [`iterate::for_each_slice`] and the sort functions mutate their input;
//! everything else allocates a new container.
//!
//! ## Feature Flags
//!
//! - `transform`, `convert`, `iterate`, `set_ops`, `batch`, `sort`: one per
//!   module, all enabled by default
//! - `fxhash` / `ahash`: faster hasher for maps built by [`convert`]
//! - `serde`: `Serialize`/`Deserialize` for the crate's result and error types
//! - `tracing`: diagnostic events on early termination and rejected input
//! - `full`: every module plus `serde`
//!
//! ## Example
//!
//! ```rust
//! use colltools::prelude::*;
//!
//! let orders = vec![("alice", 30), ("bob", 12), ("alice", 5), ("carol", 7)];
//!
//! let totals = group_by_to_map(&orders, |order| order.0, |order| order.1);
//! let mut summary = create_slice_from_map(&totals, |name, amounts| {
//!     (amounts.iter().sum::<i32>(), *name)
//! });
//! sort_slice_with_comparator(&mut summary, descending);
//!
//! assert_eq!(summary, vec![(35, "alice"), (12, "bob"), (7, "carol")]);
//!
//! let batches = split_into_batches(&summary, 2).unwrap();
//! assert_eq!(batches.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every function and type of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use colltools::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::hash::*;

    #[cfg(feature = "transform")]
    pub use crate::transform::*;

    #[cfg(feature = "convert")]
    pub use crate::convert::*;

    #[cfg(feature = "iterate")]
    pub use crate::iterate::*;

    #[cfg(feature = "set_ops")]
    pub use crate::set_ops::*;

    #[cfg(feature = "batch")]
    pub use crate::batch::*;

    #[cfg(feature = "sort")]
    pub use crate::sort::*;
}

pub mod error;
pub mod hash;

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "convert")]
pub mod convert;

#[cfg(feature = "iterate")]
pub mod iterate;

#[cfg(feature = "set_ops")]
pub mod set_ops;

#[cfg(feature = "batch")]
pub mod batch;

#[cfg(feature = "sort")]
pub mod sort;
