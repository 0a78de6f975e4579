//! Shared single-pass skeleton for the sequence and set operation families.
//!
//! Every function here walks its input exactly once (twice in lockstep for
//! [`zip`]) and appends into a freshly allocated result container chosen by
//! the caller through the [`Collection`] trait. Argument validation happens
//! in the public wrappers before any of these functions is called.

use std::hash::{BuildHasher, Hash};

use crate::ordered::OrderedSet;

/// A result container the skeleton can allocate and append to.
pub(crate) trait Collection<T> {
    /// Allocates an empty container with room for `capacity` elements.
    fn with_capacity(capacity: usize) -> Self;

    /// Appends `element`. Set-shaped containers drop it silently when an
    /// equal element is already present.
    fn push_element(&mut self, element: T);
}

impl<T> Collection<T> for Vec<T> {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    #[inline]
    fn push_element(&mut self, element: T) {
        self.push(element);
    }
}

impl<T, S> Collection<T> for indexmap::IndexSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    #[inline]
    fn push_element(&mut self, element: T) {
        self.insert(element);
    }
}

#[inline]
fn capacity_hint<I: Iterator>(iterator: &I) -> usize {
    iterator.size_hint().0
}

pub(crate) fn map<'a, T, R, C, I, F>(iterable: I, mut mapper: F) -> C
where
    T: 'a,
    C: Collection<R>,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> R,
{
    let iterator = iterable.into_iter();
    let mut result = C::with_capacity(capacity_hint(&iterator));
    for element in iterator {
        result.push_element(mapper(element));
    }
    result
}

pub(crate) fn filter<'a, T, C, I, P>(iterable: I, mut predicate: P) -> C
where
    T: Clone + 'a,
    C: Collection<T>,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    let mut result = C::with_capacity(0);
    for element in iterable {
        if predicate(element) {
            result.push_element(element.clone());
        }
    }
    result
}

/// Keeps elements satisfying every predicate. An empty predicate slice keeps
/// everything; evaluation per element stops at the first failing predicate.
pub(crate) fn filter_all<'a, T, C, I, P>(iterable: I, predicates: &[P]) -> C
where
    T: Clone + 'a,
    C: Collection<T>,
    I: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    filter(iterable, |element| {
        predicates.iter().all(|predicate| predicate(element))
    })
}

pub(crate) fn reduce<'a, T, R, I, F>(iterable: I, identity: R, mut accumulator: F) -> R
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(R, &T) -> R,
{
    let mut result = identity;
    for element in iterable {
        result = accumulator(result, element);
    }
    result
}

pub(crate) fn flat_map<'a, T, R, C, I, J, F>(iterable: I, mut mapper: F) -> C
where
    T: 'a,
    C: Collection<R>,
    I: IntoIterator<Item = &'a T>,
    J: IntoIterator<Item = R>,
    F: FnMut(&T) -> J,
{
    let mut result = C::with_capacity(0);
    for element in iterable {
        for item in mapper(element) {
            result.push_element(item);
        }
    }
    result
}

pub(crate) fn find<'a, T, I, P>(iterable: I, mut predicate: P) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    for element in iterable {
        if predicate(element) {
            return Some(element);
        }
    }
    None
}

pub(crate) fn any<'a, T, I, P>(iterable: I, predicate: P) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    find(iterable, predicate).is_some()
}

pub(crate) fn all<'a, T, I, P>(iterable: I, mut predicate: P) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    !any(iterable, |element| !predicate(element))
}

pub(crate) fn none<'a, T, I, P>(iterable: I, predicate: P) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    !any(iterable, predicate)
}

pub(crate) fn take<'a, T, C, I>(iterable: I, count: usize) -> C
where
    T: Clone + 'a,
    C: Collection<T>,
    I: IntoIterator<Item = &'a T>,
{
    let iterator = iterable.into_iter();
    let mut result = C::with_capacity(capacity_hint(&iterator).min(count));
    for element in iterator.take(count) {
        result.push_element(element.clone());
    }
    result
}

pub(crate) fn drop<'a, T, C, I>(iterable: I, count: usize) -> C
where
    T: Clone + 'a,
    C: Collection<T>,
    I: IntoIterator<Item = &'a T>,
{
    let iterator = iterable.into_iter();
    let mut result = C::with_capacity(capacity_hint(&iterator).saturating_sub(count));
    for element in iterator.skip(count) {
        result.push_element(element.clone());
    }
    result
}

/// Combines elements pairwise until the shorter input is exhausted.
pub(crate) fn zip<'a, 'b, A, B, R, C, IA, IB, F>(
    iterable_a: IA,
    iterable_b: IB,
    mut combiner: F,
) -> C
where
    A: 'a,
    B: 'b,
    C: Collection<R>,
    IA: IntoIterator<Item = &'a A>,
    IB: IntoIterator<Item = &'b B>,
    F: FnMut(&A, &B) -> R,
{
    let iterator_a = iterable_a.into_iter();
    let iterator_b = iterable_b.into_iter();
    let capacity = capacity_hint(&iterator_a).min(capacity_hint(&iterator_b));
    let mut result = C::with_capacity(capacity);
    for (element_a, element_b) in iterator_a.zip(iterator_b) {
        result.push_element(combiner(element_a, element_b));
    }
    result
}

/// First occurrence wins; survivors keep their first-seen order.
pub(crate) fn distinct<'a, T, C, I>(iterable: I) -> C
where
    T: Clone + Hash + Eq + 'a,
    C: Collection<T>,
    I: IntoIterator<Item = &'a T>,
{
    let seen: OrderedSet<&'a T> = iterable.into_iter().collect();
    let mut result = C::with_capacity(seen.len());
    for element in seen {
        result.push_element(element.clone());
    }
    result
}

pub(crate) fn partition<'a, T, C, I, P>(iterable: I, mut predicate: P) -> (C, C)
where
    T: Clone + 'a,
    C: Collection<T>,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    let mut matching = C::with_capacity(0);
    let mut non_matching = C::with_capacity(0);
    for element in iterable {
        if predicate(element) {
            matching.push_element(element.clone());
        } else {
            non_matching.push_element(element.clone());
        }
    }
    (matching, non_matching)
}

/// Maps each element, then keeps the mapped values the predicate accepts.
pub(crate) fn map_then_filter<'a, T, R, C, I, F, P>(
    iterable: I,
    mut mapper: F,
    mut predicate: P,
) -> C
where
    T: 'a,
    C: Collection<R>,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> R,
    P: FnMut(&R) -> bool,
{
    let mut result = C::with_capacity(0);
    for element in iterable {
        let mapped = mapper(element);
        if predicate(&mapped) {
            result.push_element(mapped);
        }
    }
    result
}

/// Keeps the elements the predicate accepts, mapping only those.
pub(crate) fn filter_then_map<'a, T, R, C, I, P, F>(
    iterable: I,
    mut predicate: P,
    mut mapper: F,
) -> C
where
    T: 'a,
    C: Collection<R>,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> R,
{
    let mut result = C::with_capacity(0);
    for element in iterable {
        if predicate(element) {
            result.push_element(mapper(element));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_into_vec_and_set_share_the_skeleton() {
        let input = [1, 2, 3, 4];
        let as_vec: Vec<i32> = map(&input, |element| element % 2);
        let as_set: OrderedSet<i32> = map(&input, |element| element % 2);

        assert_eq!(as_vec, vec![1, 0, 1, 0]);
        assert_eq!(as_set.into_iter().collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn test_filter_all_with_no_predicates_keeps_everything() {
        let input = [5, 6, 7];
        let predicates: [fn(&i32) -> bool; 0] = [];
        let result: Vec<i32> = filter_all(&input, &predicates);
        assert_eq!(result, vec![5, 6, 7]);
    }

    #[test]
    fn test_all_short_circuits_on_first_failure() {
        let input = [1, 2, 3, 4];
        let mut calls = 0;
        let result = all(&input, |element| {
            calls += 1;
            *element < 2
        });
        assert!(!result);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_zip_stops_at_shorter_input() {
        let left = [1, 2, 3];
        let right = ["a", "b"];
        let result: Vec<String> = zip(&left, &right, |number, letter| format!("{letter}{number}"));
        assert_eq!(result, vec!["a1".to_string(), "b2".to_string()]);
    }

    #[test]
    fn test_distinct_keeps_first_occurrence_order() {
        let input = [3, 1, 3, 2, 1];
        let result: Vec<i32> = distinct(&input);
        assert_eq!(result, vec![3, 1, 2]);
    }

    #[test]
    fn test_drop_capacity_hint_does_not_underflow() {
        let input = [1, 2];
        let result: Vec<i32> = drop(&input, 10);
        assert!(result.is_empty());
    }
}
