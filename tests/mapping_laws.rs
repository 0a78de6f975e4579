#![cfg(feature = "mapping")]
//! Property-based tests for mapping operation laws.

use collection_ops::mapping;
use collection_ops::ordered::OrderedMap;
use proptest::prelude::*;

fn ordered(entries: Vec<(u8, i32)>) -> OrderedMap<u8, i32> {
    entries.into_iter().collect()
}

// =============================================================================
// Invert Round-Trip Law
// Description: invert(invert(m)) == m when no two keys share a value
// =============================================================================

proptest! {
    #[test]
    fn prop_invert_round_trip_without_collisions(keys in prop::collection::hash_set(any::<u8>(), 0..40)) {
        let input: OrderedMap<u8, i32> = keys
            .into_iter()
            .map(|key| (key, i32::from(key) * 3 + 1))
            .collect();
        let round_trip = mapping::invert(&mapping::invert(&input));
        prop_assert!(round_trip.iter().eq(input.iter()));
    }

    #[test]
    fn prop_invert_with_collisions_keeps_last_key(entries in prop::collection::vec((any::<u8>(), 0_i32..4), 0..40)) {
        let input = ordered(entries);
        let inverted = mapping::invert(&input);
        for (value, key) in &inverted {
            let last_key = input
                .iter()
                .filter(|(_, candidate)| *candidate == value)
                .map(|(candidate_key, _)| candidate_key)
                .last();
            prop_assert_eq!(last_key, Some(key));
        }
    }
}

// =============================================================================
// Merge Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_merge_contains_union_of_keys(
        left in prop::collection::vec((any::<u8>(), any::<i32>()), 0..30),
        right in prop::collection::vec((any::<u8>(), any::<i32>()), 0..30)
    ) {
        let left = ordered(left);
        let right = ordered(right);
        let merged = mapping::merge(&left, &right, |a, b| a.wrapping_add(*b));

        for (key, value) in &merged {
            let expected = match (left.get(key), right.get(key)) {
                (Some(a), Some(b)) => a.wrapping_add(*b),
                (Some(a), None) => *a,
                (None, Some(b)) => *b,
                (None, None) => unreachable!("merged key must come from an input"),
            };
            prop_assert_eq!(*value, expected);
        }
        prop_assert!(left.keys().chain(right.keys()).all(|key| merged.contains_key(key)));
    }
}

// =============================================================================
// Partition and Slicing Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_covers_every_entry_once(entries in prop::collection::vec((any::<u8>(), any::<i32>()), 0..50)) {
        let input = ordered(entries);
        let (matching, non_matching) = mapping::partition(&input, |_, value| *value >= 0);
        prop_assert_eq!(matching.len() + non_matching.len(), input.len());
        prop_assert!(matching.values().all(|value| *value >= 0));
        prop_assert!(non_matching.values().all(|value| *value < 0));
    }

    #[test]
    fn prop_take_and_drop_split_entries(
        entries in prop::collection::vec((any::<u8>(), any::<i32>()), 0..50),
        count in 0_u16..60
    ) {
        let input = ordered(entries);
        let taken = mapping::take(&input, count).unwrap();
        let dropped = mapping::drop(&input, count).unwrap();
        prop_assert_eq!(taken.len(), input.len().min(usize::from(count)));
        prop_assert!(taken.iter().chain(dropped.iter()).eq(input.iter()));
    }

    #[test]
    fn prop_map_values_then_reduce_matches_direct_reduce(entries in prop::collection::vec((any::<u8>(), any::<i16>()), 0..50)) {
        let input: OrderedMap<u8, i16> = entries.into_iter().collect();
        let widened = mapping::map_values(&input, |value| i64::from(*value));
        let direct = mapping::reduce(&input, 0_i64, |accumulator, _, value| accumulator + i64::from(*value));
        let mapped = mapping::reduce(&widened, 0_i64, |accumulator, _, value| accumulator + value);
        prop_assert_eq!(direct, mapped);
    }

    #[test]
    fn prop_operations_leave_input_unchanged(entries in prop::collection::vec((any::<u8>(), any::<i32>()), 0..50)) {
        let input = ordered(entries);
        let snapshot: Vec<(u8, i32)> = input.iter().map(|(key, value)| (*key, *value)).collect();

        let _ = mapping::map_keys(&input, |key| key / 2);
        let _ = mapping::filter_values(&input, |value| *value > 0);
        let _ = mapping::invert(&input);
        let _ = mapping::get_or_compute(&input, &0_u8, |_| 0);

        let after: Vec<(u8, i32)> = input.iter().map(|(key, value)| (*key, *value)).collect();
        prop_assert_eq!(after, snapshot);
    }
}
