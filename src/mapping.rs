//! Operations over insertion-ordered key-value mappings.
//!
//! Inputs are borrowed [`IndexMap`]s with any hasher; results are fresh
//! [`OrderedMap`]s that iterate in the order entries were first inserted.
//!
//! # Key collisions
//!
//! [`map_keys`], [`map_entries`] and [`invert`] can produce the same output
//! key twice. The later entry in iteration order wins: its value replaces
//! the earlier one while the key keeps the position of its first
//! insertion. No error is raised.
//!
//! # Examples
//!
//! ```rust
//! use collection_ops::mapping;
//! use collection_ops::ordered::OrderedMap;
//!
//! let first: OrderedMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//! let second: OrderedMap<&str, i32> = [("b", 3), ("c", 4)].into_iter().collect();
//!
//! let merged = mapping::merge(&first, &second, |left, right| left + right);
//! let entries: Vec<(&str, i32)> = merged.into_iter().collect();
//! assert_eq!(entries, vec![("a", 1), ("b", 5), ("c", 4)]);
//! ```

use std::borrow::Cow;
use std::hash::{BuildHasher, Hash};

use indexmap::{Equivalent, IndexMap};

use crate::count::Count;
use crate::error::OpsError;
use crate::ordered::{DefaultHashBuilder, OrderedMap};

#[inline]
fn with_capacity<K, V>(capacity: usize) -> OrderedMap<K, V> {
    OrderedMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
}

// =============================================================================
// Transformations
// =============================================================================

/// Replaces every value with `mapper(value)`, keeping keys and order.
///
/// # Examples
///
/// ```rust
/// use collection_ops::mapping;
/// use collection_ops::ordered::OrderedMap;
///
/// let prices: OrderedMap<&str, u32> = [("tea", 3), ("cake", 5)].into_iter().collect();
/// let doubled = mapping::map_values(&prices, |price| price * 2);
/// assert_eq!(doubled.get("tea"), Some(&6));
/// assert_eq!(doubled.get("cake"), Some(&10));
/// ```
pub fn map_values<K, V, R, S, F>(mapping: &IndexMap<K, V, S>, mut mapper: F) -> OrderedMap<K, R>
where
    K: Clone + Hash + Eq,
    F: FnMut(&V) -> R,
{
    let mut result = with_capacity(mapping.len());
    for (key, value) in mapping {
        result.insert(key.clone(), mapper(value));
    }
    result
}

/// Replaces every key with `mapper(key)`, keeping values.
///
/// When two keys map to the same new key, the later entry's value wins.
///
/// # Examples
///
/// ```rust
/// use collection_ops::mapping;
/// use collection_ops::ordered::OrderedMap;
///
/// let scores: OrderedMap<&str, i32> = [("Ann", 1), ("andy", 2), ("Bob", 3)].into_iter().collect();
/// let by_initial = mapping::map_keys(&scores, |name| name.chars().next().map(|c| c.to_ascii_lowercase()));
/// assert_eq!(by_initial.len(), 2);
/// assert_eq!(by_initial.get(&Some('a')), Some(&2));
/// ```
pub fn map_keys<K, V, R, S, F>(mapping: &IndexMap<K, V, S>, mut mapper: F) -> OrderedMap<R, V>
where
    V: Clone,
    R: Hash + Eq,
    F: FnMut(&K) -> R,
{
    let mut result = with_capacity(mapping.len());
    for (key, value) in mapping {
        result.insert(mapper(key), value.clone());
    }
    result
}

/// Transforms whole entries. `mapper` receives each `(key, value)` pair and
/// returns the new pair, or `None` to drop the entry.
///
/// # Examples
///
/// ```rust
/// use collection_ops::mapping;
/// use collection_ops::ordered::OrderedMap;
///
/// let stock: OrderedMap<&str, i32> = [("apple", 3), ("pear", 0)].into_iter().collect();
/// let labels = mapping::map_entries(&stock, |(name, count)| {
///     (*count > 0).then(|| (count.to_string(), name.to_uppercase()))
/// });
/// assert_eq!(labels.len(), 1);
/// assert_eq!(labels.get("3").map(String::as_str), Some("APPLE"));
/// ```
pub fn map_entries<K, V, K2, V2, S, F>(
    mapping: &IndexMap<K, V, S>,
    mut mapper: F,
) -> OrderedMap<K2, V2>
where
    K2: Hash + Eq,
    F: FnMut((&K, &V)) -> Option<(K2, V2)>,
{
    let mut result = with_capacity(mapping.len());
    for entry in mapping {
        if let Some((new_key, new_value)) = mapper(entry) {
            result.insert(new_key, new_value);
        }
    }
    result
}

/// Swaps keys and values. When several keys share a value, the key
/// iterated last wins.
///
/// # Examples
///
/// ```rust
/// use collection_ops::mapping;
/// use collection_ops::ordered::OrderedMap;
///
/// let colliding: OrderedMap<&str, i32> = [("a", 1), ("b", 1)].into_iter().collect();
/// let inverted = mapping::invert(&colliding);
/// assert_eq!(inverted.len(), 1);
/// assert_eq!(inverted.get(&1), Some(&"b"));
/// ```
pub fn invert<K, V, S>(mapping: &IndexMap<K, V, S>) -> OrderedMap<V, K>
where
    K: Clone,
    V: Clone + Hash + Eq,
{
    let mut result = with_capacity(mapping.len());
    for (key, value) in mapping {
        result.insert(value.clone(), key.clone());
    }
    result
}

/// Unions the keys of both mappings.
///
/// A key present in both gets `combiner(value_a, value_b)`; a key present
/// in only one keeps its value. Keys of `mapping_a` come first, followed by
/// the keys only `mapping_b` has.
pub fn merge<K, V, S1, S2, F>(
    mapping_a: &IndexMap<K, V, S1>,
    mapping_b: &IndexMap<K, V, S2>,
    mut combiner: F,
) -> OrderedMap<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
    F: FnMut(&V, &V) -> V,
{
    let mut result: OrderedMap<K, V> = with_capacity(mapping_a.len() + mapping_b.len());
    for (key, value) in mapping_a {
        result.insert(key.clone(), value.clone());
    }
    for (key, value) in mapping_b {
        match result.get_mut(key) {
            Some(existing) => {
                let combined = combiner(&*existing, value);
                *existing = combined;
            }
            None => {
                result.insert(key.clone(), value.clone());
            }
        }
    }
    result
}

/// Maps every value to zero or more values and flattens the result into a
/// sequence of `(key, new_value)` pairs, repeating the key as needed.
///
/// # Examples
///
/// ```rust
/// use collection_ops::mapping;
/// use collection_ops::ordered::OrderedMap;
///
/// let counts: OrderedMap<&str, u32> = [("a", 2), ("b", 0), ("c", 1)].into_iter().collect();
/// let pairs = mapping::flat_map_values(&counts, |count| 0..*count);
/// assert_eq!(pairs, vec![("a", 0), ("a", 1), ("c", 0)]);
/// ```
pub fn flat_map_values<K, V, R, S, J, F>(mapping: &IndexMap<K, V, S>, mut mapper: F) -> Vec<(K, R)>
where
    K: Clone,
    J: IntoIterator<Item = R>,
    F: FnMut(&V) -> J,
{
    let mut result = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        for produced in mapper(value) {
            result.push((key.clone(), produced));
        }
    }
    result
}

/// Like [`flat_map_values`]; a `None` from `mapper` contributes no pairs.
pub fn flat_map_values_optional<K, V, R, S, J, F>(
    mapping: &IndexMap<K, V, S>,
    mut mapper: F,
) -> Vec<(K, R)>
where
    K: Clone,
    J: IntoIterator<Item = R>,
    F: FnMut(&V) -> Option<J>,
{
    flat_map_values(mapping, |value| mapper(value).into_iter().flatten())
}

// =============================================================================
// Filtering
// =============================================================================

/// Keeps the entries for which `predicate(key, value)` returns `true`.
pub fn filter<K, V, S, P>(mapping: &IndexMap<K, V, S>, mut predicate: P) -> OrderedMap<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
    P: FnMut(&K, &V) -> bool,
{
    let mut result = with_capacity(0);
    for (key, value) in mapping {
        if predicate(key, value) {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// Keeps the entries whose key satisfies `predicate`.
pub fn filter_keys<K, V, S, P>(mapping: &IndexMap<K, V, S>, mut predicate: P) -> OrderedMap<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
    P: FnMut(&K) -> bool,
{
    filter(mapping, |key, _| predicate(key))
}

/// Keeps the entries whose value satisfies `predicate`.
pub fn filter_values<K, V, S, P>(mapping: &IndexMap<K, V, S>, mut predicate: P) -> OrderedMap<K, V>
where
    K: Clone + Hash + Eq,
    V: Clone,
    P: FnMut(&V) -> bool,
{
    filter(mapping, |_, value| predicate(value))
}

/// Splits the entries into `(matching, non_matching)`.
pub fn partition<K, V, S, P>(
    mapping: &IndexMap<K, V, S>,
    mut predicate: P,
) -> (OrderedMap<K, V>, OrderedMap<K, V>)
where
    K: Clone + Hash + Eq,
    V: Clone,
    P: FnMut(&K, &V) -> bool,
{
    let mut matching = with_capacity(0);
    let mut non_matching = with_capacity(0);
    for (key, value) in mapping {
        if predicate(key, value) {
            matching.insert(key.clone(), value.clone());
        } else {
            non_matching.insert(key.clone(), value.clone());
        }
    }
    (matching, non_matching)
}

/// Returns the first `count` entries in iteration order.
///
/// # Errors
///
/// Returns [`OpsError::NegativeCount`] if `count` is negative.
pub fn take<K, V, S, N>(mapping: &IndexMap<K, V, S>, count: N) -> Result<OrderedMap<K, V>, OpsError>
where
    K: Clone + Hash + Eq,
    V: Clone,
    N: Count,
{
    let count = count.to_count("mapping::take", "n")?;
    let mut result = with_capacity(mapping.len().min(count));
    for (key, value) in mapping.iter().take(count) {
        result.insert(key.clone(), value.clone());
    }
    Ok(result)
}

/// Returns every entry after the first `count` in iteration order.
///
/// # Errors
///
/// Returns [`OpsError::NegativeCount`] if `count` is negative.
pub fn drop<K, V, S, N>(mapping: &IndexMap<K, V, S>, count: N) -> Result<OrderedMap<K, V>, OpsError>
where
    K: Clone + Hash + Eq,
    V: Clone,
    N: Count,
{
    let count = count.to_count("mapping::drop", "n")?;
    let mut result = with_capacity(mapping.len().saturating_sub(count));
    for (key, value) in mapping.iter().skip(count) {
        result.insert(key.clone(), value.clone());
    }
    Ok(result)
}

// =============================================================================
// Queries
// =============================================================================

/// Left fold over the entries in iteration order.
///
/// # Examples
///
/// ```rust
/// use collection_ops::mapping;
/// use collection_ops::ordered::OrderedMap;
///
/// let cart: OrderedMap<&str, u32> = [("tea", 2), ("cake", 1)].into_iter().collect();
/// let summary = mapping::reduce(&cart, String::new(), |accumulator, item, quantity| {
///     format!("{accumulator}{item}x{quantity};")
/// });
/// assert_eq!(summary, "teax2;cakex1;");
/// ```
pub fn reduce<K, V, S, R, F>(mapping: &IndexMap<K, V, S>, identity: R, mut accumulator: F) -> R
where
    F: FnMut(R, &K, &V) -> R,
{
    let mut result = identity;
    for (key, value) in mapping {
        result = accumulator(result, key, value);
    }
    result
}

/// Returns the first entry satisfying `predicate`.
pub fn find<'a, K, V, S, P>(mapping: &'a IndexMap<K, V, S>, mut predicate: P) -> Option<(&'a K, &'a V)>
where
    P: FnMut(&K, &V) -> bool,
{
    mapping.iter().find(|&(key, value)| predicate(key, value))
}

/// Returns `true` if any entry satisfies `predicate`.
pub fn any<K, V, S, P>(mapping: &IndexMap<K, V, S>, predicate: P) -> bool
where
    P: FnMut(&K, &V) -> bool,
{
    find(mapping, predicate).is_some()
}

/// Returns `true` if every entry satisfies `predicate`; `true` when empty.
pub fn all<K, V, S, P>(mapping: &IndexMap<K, V, S>, mut predicate: P) -> bool
where
    P: FnMut(&K, &V) -> bool,
{
    !any(mapping, |key, value| !predicate(key, value))
}

/// Returns `true` if no entry satisfies `predicate`; `true` when empty.
pub fn none<K, V, S, P>(mapping: &IndexMap<K, V, S>, predicate: P) -> bool
where
    P: FnMut(&K, &V) -> bool,
{
    !any(mapping, predicate)
}

/// Returns the value stored under `key`, or `default(key)` when the key is
/// absent.
///
/// Presence is decided by the key alone, so a stored `None` (for
/// `V = Option<_>`) is returned as is. The computed default is not inserted;
/// the mapping is never modified.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
///
/// use collection_ops::mapping;
/// use collection_ops::ordered::OrderedMap;
///
/// let nicknames: OrderedMap<&str, Option<&str>> =
///     [("robert", Some("bob")), ("ann", None)].into_iter().collect();
///
/// assert_eq!(mapping::get_or_compute(&nicknames, "robert", |_| Some("?")), Cow::Borrowed(&Some("bob")));
/// assert_eq!(mapping::get_or_compute(&nicknames, "ann", |_| Some("?")), Cow::Borrowed(&None));
/// assert_eq!(mapping::get_or_compute(&nicknames, "zoe", |_| Some("?")).into_owned(), Some("?"));
/// assert_eq!(nicknames.len(), 2);
/// ```
pub fn get_or_compute<'a, K, V, S, Q, F>(
    mapping: &'a IndexMap<K, V, S>,
    key: &Q,
    default: F,
) -> Cow<'a, V>
where
    V: Clone,
    S: BuildHasher,
    Q: ?Sized + Hash + Equivalent<K>,
    F: FnOnce(&Q) -> V,
{
    mapping
        .get(key)
        .map_or_else(|| Cow::Owned(default(key)), Cow::Borrowed)
}
