//! Property-based tests for the sequence operations

use proptest::prelude::*;

use toolbox_slices::{filter, for_each_with_index, map, try_map, try_map_with_index};

proptest! {
    #[test]
    fn test_map_preserves_length_and_position(input in prop::collection::vec(any::<i32>(), 0..64)) {
        let output = map(&input, |v| v.wrapping_mul(3));
        prop_assert_eq!(output.len(), input.len());
        for (i, v) in input.iter().enumerate() {
            prop_assert_eq!(output[i], v.wrapping_mul(3));
        }
    }

    #[test]
    fn test_filter_is_ordered_subsequence(
        input in prop::collection::vec(any::<i16>(), 0..64),
        threshold in any::<i16>()
    ) {
        let keep = |v: &i16| *v >= threshold;
        let output = filter(&input, keep);

        // every kept element satisfies the predicate
        prop_assert!(output.iter().all(keep));
        // and appears in input order, with nothing that passes left out
        let expected: Vec<i16> = input.iter().copied().filter(|v| keep(v)).collect();
        prop_assert_eq!(&output, &expected);
        // every dropped element fails the predicate
        let dropped = input.len() - output.len();
        prop_assert_eq!(dropped, input.iter().filter(|v| !keep(*v)).count());
    }

    #[test]
    fn test_filter_identity_and_empty(input in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(filter(&input, |_| true), input.clone());
        prop_assert!(filter(&input, |_| false).is_empty());
    }

    #[test]
    fn test_try_map_stops_at_failing_index(
        input in prop::collection::vec(any::<u32>(), 1..64),
        seed in any::<prop::sample::Index>()
    ) {
        let k = seed.index(input.len());
        let mut highest_seen = None;
        let output: Result<Vec<u32>, usize> = try_map_with_index(&input, |i, v| {
            highest_seen = Some(i);
            if i == k {
                Err(i)
            } else {
                Ok(*v)
            }
        });
        prop_assert_eq!(output, Err(k));
        prop_assert_eq!(highest_seen, Some(k));
    }

    #[test]
    fn test_try_map_without_failure_equals_map(input in prop::collection::vec(any::<i64>(), 0..64)) {
        let fallible: Result<Vec<i64>, ()> = try_map(&input, |v| Ok(v.saturating_add(1)));
        prop_assert_eq!(fallible, Ok(map(&input, |v| v.saturating_add(1))));
    }

    #[test]
    fn test_for_each_with_index_visits_in_order(input in prop::collection::vec(any::<char>(), 0..64)) {
        let mut indices = Vec::new();
        for_each_with_index(&input, |i, _| indices.push(i));
        prop_assert_eq!(indices, (0..input.len()).collect::<Vec<_>>());
    }
}
