//! Hasher selection for maps built by this crate.
//!
//! [`DefaultHashBuilder`] is the `BuildHasher` used by
//! [`create_map_from_slice`](crate::convert::create_map_from_slice) and
//! [`group_by_to_map`](crate::convert::group_by_to_map). It is chosen at
//! compile time:
//!
//! - `fxhash` feature: `rustc_hash::FxBuildHasher`
//! - `ahash` feature (without `fxhash`): `ahash::RandomState`
//! - otherwise: the standard library's `RandomState`
//!
//! Neither fast hasher is resistant to `HashDoS`. Keep the default when keys
//! come from untrusted input.
//!
//! Helpers that only read maps accept any `BuildHasher`, so maps built with
//! a different hasher can be passed in unchanged.

#[cfg(feature = "fxhash")]
/// The `BuildHasher` used for maps created by this crate.
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// The `BuildHasher` used for maps created by this crate.
pub type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// The `BuildHasher` used for maps created by this crate.
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// A `HashMap` using [`DefaultHashBuilder`].
pub type DefaultHashMap<K, V> = std::collections::HashMap<K, V, DefaultHashBuilder>;

static_assertions::assert_impl_all!(DefaultHashBuilder: std::hash::BuildHasher, Default, Clone);
