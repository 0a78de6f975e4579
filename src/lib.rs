//! # collection-ops
//!
//! Pure, single-pass element-wise transformations over three container
//! shapes: ordered sequences, insertion-ordered sets and insertion-ordered
//! key-value mappings.
//!
//! ## Overview
//!
//! Every operation borrows its input, walks it once and returns a freshly
//! allocated container owned by the caller. Nothing is mutated, cached or
//! deferred:
//!
//! - **Sequences** (`&[T]` in, `Vec` out): map, filter, reduce, flat map,
//!   find, any/all/none, take/drop, zip, distinct, reverse, partition and
//!   the fused map-then-filter / filter-then-map.
//! - **Sets** (any iterable in, [`OrderedSet`](ordered::OrderedSet) out):
//!   the same catalog without `reverse`.
//! - **Mappings** ([`IndexMap`](indexmap::IndexMap) in,
//!   [`OrderedMap`](ordered::OrderedMap) out): key/value/entry transforms,
//!   filters, folds, merge, invert, flat map over values and
//!   non-inserting lookup with a computed default.
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence operations
//! - `set`: Set operations
//! - `mapping`: Mapping operations
//! - `serde`: Serialization for produced sets, maps and errors
//! - `fxhash` / `ahash`: Alternative hashers for produced sets and maps
//! - `full`: Enable all operation families and `serde`
//!
//! ## Example
//!
//! ```rust
//! use collection_ops::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let short = vec![10, 20];
//!
//! assert_eq!(sequence::zip(&numbers, &short, |a, b| a + b), vec![11, 22]);
//! assert_eq!(sequence::take(&numbers, 2), Ok(vec![1, 2]));
//! assert!(sequence::take(&numbers, -1).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the operation modules, the container aliases and the error
/// type.
///
/// # Usage
///
/// ```rust
/// use collection_ops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::count::Count;
    pub use crate::error::OpsError;
    pub use crate::ordered::{DefaultHashBuilder, OrderedMap, OrderedSet};

    #[cfg(feature = "sequence")]
    pub use crate::sequence;

    #[cfg(feature = "set")]
    pub use crate::set;

    #[cfg(feature = "mapping")]
    pub use crate::mapping;
}

pub mod count;
pub mod error;
pub mod ordered;

#[cfg(any(feature = "sequence", feature = "set"))]
mod iterable;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "mapping")]
pub mod mapping;
