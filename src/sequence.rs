//! Operations over ordered, duplicate-permitting sequences.
//!
//! Every function in this module borrows its input slice, walks it once and
//! returns a freshly allocated `Vec`. Inputs are never modified, so the same
//! slice may be shared across threads and passed to any number of
//! operations concurrently.
//!
//! # Order
//!
//! Unless an operation says otherwise, surviving elements keep their
//! relative input order. [`reverse`] is the only order-reversing operation.
//!
//! # Failures
//!
//! [`take`] and [`drop`] reject negative counts with
//! [`OpsError::NegativeCount`], and [`filter_all_optional`] rejects an
//! absent predicate with [`OpsError::MissingArgument`]. Both checks run
//! before the first element is visited. Every other operation is total;
//! panics raised by the supplied closures propagate unchanged.
//!
//! # Examples
//!
//! ```rust
//! use collection_ops::sequence;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//!
//! let doubled = sequence::map(&numbers, |number| number * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10, 12]);
//!
//! let (even, odd) = sequence::partition(&numbers, |number| number % 2 == 0);
//! assert_eq!(even, vec![2, 4, 6]);
//! assert_eq!(odd, vec![1, 3, 5]);
//!
//! // The input is untouched
//! assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
//! ```

use std::hash::Hash;

use crate::count::Count;
use crate::error::OpsError;
use crate::iterable;

// =============================================================================
// Transformations
// =============================================================================

/// Applies `mapper` to every element, preserving length and order.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// assert_eq!(sequence::map(&[1, 2, 3], |number| number * 2), vec![2, 4, 6]);
/// ```
pub fn map<T, R, F>(sequence: &[T], mapper: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    iterable::map(sequence, mapper)
}

/// Keeps the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// let even = sequence::filter(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(even, vec![2, 4, 6]);
/// ```
pub fn filter<T, P>(sequence: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    iterable::filter(sequence, predicate)
}

/// Keeps the elements for which every predicate returns `true`.
///
/// Predicates are evaluated in slice order and evaluation for an element
/// stops at the first predicate that rejects it. An empty predicate slice
/// keeps every element.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// let predicates: [&dyn Fn(&i32) -> bool; 2] = [
///     &|number| *number > 2,
///     &|number| number % 2 == 0,
/// ];
/// assert_eq!(sequence::filter_all(&[1, 2, 3, 4, 5, 6], &predicates), vec![4, 6]);
/// ```
pub fn filter_all<T, P>(sequence: &[T], predicates: &[P]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    iterable::filter_all(sequence, predicates)
}

/// Like [`filter_all`], for predicate lists assembled at run time where
/// entries may be missing.
///
/// # Errors
///
/// Returns [`OpsError::MissingArgument`] naming `"predicate"` if any entry
/// is `None`. No element is visited in that case.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// fn positive(number: &i32) -> bool {
///     *number > 0
/// }
///
/// let present = [Some(positive as fn(&i32) -> bool)];
/// assert_eq!(sequence::filter_all_optional(&[-1, 1], &present), Ok(vec![1]));
///
/// let missing: [Option<fn(&i32) -> bool>; 2] = [Some(positive), None];
/// assert!(sequence::filter_all_optional(&[-1, 1], &missing).is_err());
/// ```
pub fn filter_all_optional<T, P>(
    sequence: &[T],
    predicates: &[Option<P>],
) -> Result<Vec<T>, OpsError>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    if predicates.iter().any(Option::is_none) {
        return Err(OpsError::MissingArgument {
            operation: "sequence::filter_all_optional",
            argument: "predicate",
        });
    }
    let present: Vec<&P> = predicates.iter().flatten().collect();
    Ok(iterable::filter_all(sequence, &present))
}

/// Left fold over the sequence, starting from `identity`.
///
/// An empty sequence returns `identity` unchanged.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// let sum = sequence::reduce(&[1, 2, 3, 4], 0, |accumulator, number| accumulator + number);
/// assert_eq!(sum, 10);
///
/// let empty: [i32; 0] = [];
/// assert_eq!(sequence::reduce(&empty, 7, |accumulator, number| accumulator + number), 7);
/// ```
pub fn reduce<T, R, F>(sequence: &[T], identity: R, accumulator: F) -> R
where
    F: FnMut(R, &T) -> R,
{
    iterable::reduce(sequence, identity, accumulator)
}

/// Maps every element to an iterable and concatenates the results in
/// element order.
///
/// A mapper that has nothing to contribute for an element returns an empty
/// iterable; returning an `Option<R>` is the usual way to produce zero or
/// one values.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// let repeated = sequence::flat_map(&[1, 2, 3], |number| vec![*number; *number as usize]);
/// assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
///
/// let halves = sequence::flat_map(&[1, 2, 3, 4], |number| {
///     (number % 2 == 0).then_some(number / 2)
/// });
/// assert_eq!(halves, vec![1, 2]);
/// ```
pub fn flat_map<T, R, J, F>(sequence: &[T], mapper: F) -> Vec<R>
where
    J: IntoIterator<Item = R>,
    F: FnMut(&T) -> J,
{
    iterable::flat_map(sequence, mapper)
}

/// Like [`flat_map`], for mappers that may return no collection at all.
/// A `None` result contributes zero elements.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// let result = sequence::flat_map_optional(&[1, 2, 3], |number| {
///     if *number == 2 { None } else { Some(vec![*number, *number * 10]) }
/// });
/// assert_eq!(result, vec![1, 10, 3, 30]);
/// ```
pub fn flat_map_optional<T, R, J, F>(sequence: &[T], mut mapper: F) -> Vec<R>
where
    J: IntoIterator<Item = R>,
    F: FnMut(&T) -> Option<J>,
{
    iterable::flat_map(sequence, |element| mapper(element).into_iter().flatten())
}

/// Reverses the sequence: `output[i] == input[len - 1 - i]`.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// assert_eq!(sequence::reverse(&[1, 2, 3]), vec![3, 2, 1]);
/// ```
pub fn reverse<T: Clone>(sequence: &[T]) -> Vec<T> {
    sequence.iter().rev().cloned().collect()
}

/// Removes duplicates. The first occurrence of each element wins and the
/// survivors keep their first-seen order.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// assert_eq!(sequence::distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn distinct<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + Hash + Eq,
{
    iterable::distinct(sequence)
}

/// Combines the two sequences pairwise by index.
///
/// The result has `min(a.len(), b.len())` elements; the excess of the
/// longer input is ignored.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// let sums = sequence::zip(&[1, 2, 3, 4, 5], &[10, 20], |a, b| a + b);
/// assert_eq!(sums, vec![11, 22]);
/// ```
pub fn zip<A, B, R, F>(sequence_a: &[A], sequence_b: &[B], combiner: F) -> Vec<R>
where
    F: FnMut(&A, &B) -> R,
{
    iterable::zip(sequence_a, sequence_b, combiner)
}

/// Splits the sequence into `(matching, non_matching)`, both in input order.
///
/// Every element lands in exactly one of the two parts.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// let (even, odd) = sequence::partition(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(even, vec![2, 4, 6]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<T, P>(sequence: &[T], predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    iterable::partition(sequence, predicate)
}

/// Maps every element and keeps the mapped values `predicate` accepts,
/// without materializing the intermediate sequence.
///
/// Equivalent to `filter(&map(sequence, mapper), predicate)`.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// let result = sequence::map_then_filter(&[1, 2, 3, 4], |number| number * 3, |tripled| tripled % 2 == 0);
/// assert_eq!(result, vec![6, 12]);
/// ```
pub fn map_then_filter<T, R, F, P>(sequence: &[T], mapper: F, predicate: P) -> Vec<R>
where
    F: FnMut(&T) -> R,
    P: FnMut(&R) -> bool,
{
    iterable::map_then_filter(sequence, mapper, predicate)
}

/// Keeps the elements `predicate` accepts and maps only those, without
/// materializing the intermediate sequence.
///
/// Equivalent to `map(&filter(sequence, predicate), mapper)`.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// let result = sequence::filter_then_map(&[1, 2, 3, 4], |number| number % 2 == 0, |number| number * 10);
/// assert_eq!(result, vec![20, 40]);
/// ```
pub fn filter_then_map<T, R, P, F>(sequence: &[T], predicate: P, mapper: F) -> Vec<R>
where
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> R,
{
    iterable::filter_then_map(sequence, predicate, mapper)
}

// =============================================================================
// Slicing
// =============================================================================

/// Returns the first `count` elements.
///
/// A count at or beyond the length returns a copy of the whole sequence.
///
/// # Errors
///
/// Returns [`OpsError::NegativeCount`] if `count` is negative.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// assert_eq!(sequence::take(&[1, 2, 3], 2), Ok(vec![1, 2]));
/// assert_eq!(sequence::take(&[1, 2, 3], 10), Ok(vec![1, 2, 3]));
/// assert!(sequence::take(&[1, 2, 3], -1).is_err());
/// ```
pub fn take<T, N>(sequence: &[T], count: N) -> Result<Vec<T>, OpsError>
where
    T: Clone,
    N: Count,
{
    let count = count.to_count("sequence::take", "n")?;
    Ok(iterable::take(sequence, count))
}

/// Returns everything after the first `count` elements.
///
/// A count at or beyond the length returns an empty sequence.
///
/// # Errors
///
/// Returns [`OpsError::NegativeCount`] if `count` is negative.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// assert_eq!(sequence::drop(&[1, 2, 3], 1), Ok(vec![2, 3]));
/// assert_eq!(sequence::drop(&[1, 2, 3], 3), Ok(vec![]));
/// ```
pub fn drop<T, N>(sequence: &[T], count: N) -> Result<Vec<T>, OpsError>
where
    T: Clone,
    N: Count,
{
    let count = count.to_count("sequence::drop", "n")?;
    Ok(iterable::drop(sequence, count))
}

// =============================================================================
// Queries
// =============================================================================

/// Returns the first element satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use collection_ops::sequence;
///
/// assert_eq!(sequence::find(&[1, 2, 3, 4], |number| *number > 2), Some(&3));
/// assert_eq!(sequence::find(&[1, 2], |number| *number > 2), None);
/// ```
pub fn find<T, P>(sequence: &[T], predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    iterable::find(sequence, predicate)
}

/// Returns `true` if at least one element satisfies `predicate`.
/// Stops at the first match; an empty sequence returns `false`.
pub fn any<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    iterable::any(sequence, predicate)
}

/// Returns `true` if every element satisfies `predicate`.
/// Stops at the first mismatch; an empty sequence returns `true`.
pub fn all<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    iterable::all(sequence, predicate)
}

/// Returns `true` if no element satisfies `predicate`.
/// Stops at the first match; an empty sequence returns `true`.
pub fn none<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    iterable::none(sequence, predicate)
}
