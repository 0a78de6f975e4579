//! Operations producing insertion-ordered, duplicate-free sets.
//!
//! Inputs are any iterable of element references, so a set, a `Vec`, a
//! slice or the output of another operation can be passed in directly.
//! The result is always a fresh [`OrderedSet`]; equal elements collapse
//! and the first one inserted keeps its position.
//!
//! Iteration order of the results is insertion order. `take`, `drop` and
//! `zip` are therefore reproducible for a given input, but the order
//! carries no further meaning. There is deliberately no `reverse`.
//!
//! # Examples
//!
//! ```rust
//! use collection_ops::ordered::OrderedSet;
//! use collection_ops::set;
//!
//! let words: OrderedSet<&str> = ["apple", "avocado", "banana"].into_iter().collect();
//!
//! // Mapping may collapse distinct inputs onto one output
//! let initials = set::map(&words, |word| word.chars().next());
//! assert_eq!(initials.len(), 2);
//!
//! // A Vec works as input as well
//! let from_vec = set::filter(&vec![1, 1, 2, 3], |number| *number > 1);
//! assert_eq!(from_vec.into_iter().collect::<Vec<_>>(), vec![2, 3]);
//! ```

use std::hash::Hash;

use crate::count::Count;
use crate::error::OpsError;
use crate::iterable;
use crate::ordered::OrderedSet;

/// Applies `mapper` to every element.
///
/// The result may be smaller than the input when `mapper` sends distinct
/// elements to equal values.
///
/// # Examples
///
/// ```rust
/// use collection_ops::set;
///
/// let remainders = set::map(&[1, 2, 3, 4, 5], |number| number % 3);
/// assert_eq!(remainders.into_iter().collect::<Vec<_>>(), vec![1, 2, 0]);
/// ```
pub fn map<'a, T, R, I, F>(elements: I, mapper: F) -> OrderedSet<R>
where
    T: 'a,
    R: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> R,
{
    iterable::map(elements, mapper)
}

/// Keeps the elements for which `predicate` returns `true`.
pub fn filter<'a, T, I, P>(elements: I, predicate: P) -> OrderedSet<T>
where
    T: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    iterable::filter(elements, predicate)
}

/// Keeps the elements for which every predicate returns `true`.
/// An empty predicate slice keeps every element.
///
/// # Examples
///
/// ```rust
/// use collection_ops::set;
///
/// let predicates: [&dyn Fn(&i32) -> bool; 2] = [&|number| *number > 1, &|number| *number < 5];
/// let result = set::filter_all(&[0, 2, 4, 6], &predicates);
/// assert_eq!(result.into_iter().collect::<Vec<_>>(), vec![2, 4]);
/// ```
pub fn filter_all<'a, T, I, P>(elements: I, predicates: &[P]) -> OrderedSet<T>
where
    T: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    iterable::filter_all(elements, predicates)
}

/// Like [`filter_all`], for predicate lists where entries may be missing.
///
/// # Errors
///
/// Returns [`OpsError::MissingArgument`] naming `"predicate"` if any entry
/// is `None`, before any element is visited.
pub fn filter_all_optional<'a, T, I, P>(
    elements: I,
    predicates: &[Option<P>],
) -> Result<OrderedSet<T>, OpsError>
where
    T: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    if predicates.iter().any(Option::is_none) {
        return Err(OpsError::MissingArgument {
            operation: "set::filter_all_optional",
            argument: "predicate",
        });
    }
    let present: Vec<&P> = predicates.iter().flatten().collect();
    Ok(iterable::filter_all(elements, &present))
}

/// Left fold over the elements in iteration order.
pub fn reduce<'a, T, R, I, F>(elements: I, identity: R, accumulator: F) -> R
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(R, &T) -> R,
{
    iterable::reduce(elements, identity, accumulator)
}

/// Maps every element to an iterable and unions the results.
pub fn flat_map<'a, T, R, I, J, F>(elements: I, mapper: F) -> OrderedSet<R>
where
    T: 'a,
    R: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    J: IntoIterator<Item = R>,
    F: FnMut(&T) -> J,
{
    iterable::flat_map(elements, mapper)
}

/// Like [`flat_map`]; a `None` from `mapper` contributes nothing.
pub fn flat_map_optional<'a, T, R, I, J, F>(elements: I, mut mapper: F) -> OrderedSet<R>
where
    T: 'a,
    R: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    J: IntoIterator<Item = R>,
    F: FnMut(&T) -> Option<J>,
{
    iterable::flat_map(elements, |element| mapper(element).into_iter().flatten())
}

/// Returns a new set with the same elements.
///
/// Sets hold no duplicates, so for a set input this is a copy. Any other
/// iterable is de-duplicated with first-occurrence-wins.
pub fn distinct<'a, T, I>(elements: I) -> OrderedSet<T>
where
    T: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    iterable::distinct(elements)
}

/// Combines the two inputs pairwise in iteration order, stopping at the
/// shorter one.
pub fn zip<'a, 'b, A, B, R, IA, IB, F>(elements_a: IA, elements_b: IB, combiner: F) -> OrderedSet<R>
where
    A: 'a,
    B: 'b,
    R: Hash + Eq,
    IA: IntoIterator<Item = &'a A>,
    IB: IntoIterator<Item = &'b B>,
    F: FnMut(&A, &B) -> R,
{
    iterable::zip(elements_a, elements_b, combiner)
}

/// Splits the elements into `(matching, non_matching)`.
pub fn partition<'a, T, I, P>(elements: I, predicate: P) -> (OrderedSet<T>, OrderedSet<T>)
where
    T: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    iterable::partition(elements, predicate)
}

/// Fused `map` followed by `filter` on the mapped values.
pub fn map_then_filter<'a, T, R, I, F, P>(elements: I, mapper: F, predicate: P) -> OrderedSet<R>
where
    T: 'a,
    R: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> R,
    P: FnMut(&R) -> bool,
{
    iterable::map_then_filter(elements, mapper, predicate)
}

/// Fused `filter` followed by `map` on the survivors.
pub fn filter_then_map<'a, T, R, I, P, F>(elements: I, predicate: P, mapper: F) -> OrderedSet<R>
where
    T: 'a,
    R: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> R,
{
    iterable::filter_then_map(elements, predicate, mapper)
}

/// Returns the first `count` elements in iteration order.
///
/// # Errors
///
/// Returns [`OpsError::NegativeCount`] if `count` is negative.
pub fn take<'a, T, I, N>(elements: I, count: N) -> Result<OrderedSet<T>, OpsError>
where
    T: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a T>,
    N: Count,
{
    let count = count.to_count("set::take", "n")?;
    Ok(iterable::take(elements, count))
}

/// Returns everything after the first `count` elements in iteration order.
///
/// # Errors
///
/// Returns [`OpsError::NegativeCount`] if `count` is negative.
pub fn drop<'a, T, I, N>(elements: I, count: N) -> Result<OrderedSet<T>, OpsError>
where
    T: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a T>,
    N: Count,
{
    let count = count.to_count("set::drop", "n")?;
    Ok(iterable::drop(elements, count))
}

/// Returns the first element in iteration order satisfying `predicate`.
pub fn find<'a, T, I, P>(elements: I, predicate: P) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    iterable::find(elements, predicate)
}

/// Returns `true` if any element satisfies `predicate`.
pub fn any<'a, T, I, P>(elements: I, predicate: P) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    iterable::any(elements, predicate)
}

/// Returns `true` if every element satisfies `predicate` (vacuously for
/// an empty input).
pub fn all<'a, T, I, P>(elements: I, predicate: P) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    iterable::all(elements, predicate)
}

/// Returns `true` if no element satisfies `predicate`.
pub fn none<'a, T, I, P>(elements: I, predicate: P) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    iterable::none(elements, predicate)
}
