//! Insertion-ordered container aliases.
//!
//! Sets and maps produced by this crate iterate in insertion order so that
//! `take`, `drop` and `zip` over them are reproducible. Both are thin
//! aliases over [`indexmap`] with a crate-wide hasher:
//!
//! - [`OrderedSet`]: duplicate-free, first insertion fixes the position
//! - [`OrderedMap`]: one value per key, re-inserting a key keeps its
//!   original position and replaces the value
//!
//! # Hasher selection
//!
//! | Feature   | `DefaultHashBuilder`         |
//! |-----------|------------------------------|
//! | (none)    | `std::hash::RandomState`     |
//! | `ahash`   | `ahash::RandomState`         |
//! | `fxhash`  | `rustc_hash::FxBuildHasher`  |
//!
//! `fxhash` takes precedence when both hash features are enabled.
//!
//! # Examples
//!
//! ```rust
//! use collection_ops::ordered::OrderedSet;
//!
//! let set: OrderedSet<i32> = [3, 1, 3, 2].into_iter().collect();
//! let elements: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(elements, vec![3, 1, 2]);
//! ```

#[cfg(feature = "fxhash")]
/// The hasher used by every set and map this crate produces.
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// The hasher used by every set and map this crate produces.
pub type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// The hasher used by every set and map this crate produces.
pub type DefaultHashBuilder = std::hash::RandomState;

/// An insertion-ordered, duplicate-free set.
pub type OrderedSet<T> = indexmap::IndexSet<T, DefaultHashBuilder>;

/// An insertion-ordered map with unique keys.
pub type OrderedMap<K, V> = indexmap::IndexMap<K, V, DefaultHashBuilder>;
