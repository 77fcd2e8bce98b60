/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Property-based tests for the instrumented algorithms.

use proptest::prelude::*;
use sortviz::algorithms::partition;
use sortviz::model::{EventKind, MAX_SIZE, MAX_VALUE, MIN_VALUE, SortEvent};
use sortviz::{Algorithm, EventLog, SortError, SortingBuffer, execute};
use std::cmp::Ordering;

// =============================================================================
// Strategies
// =============================================================================

fn any_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn any_array() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(MIN_VALUE..MAX_VALUE, 0..=MAX_SIZE)
}

/// A non-empty array with an ordered `[low, high]` subrange.
fn array_with_subrange() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    prop::collection::vec(MIN_VALUE..MAX_VALUE, 1..60).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len, 0..len).prop_map(|(values, a, b)| (values, a.min(b), a.max(b)))
    })
}

fn sorted_copy(values: &[u32]) -> Vec<u32> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}

fn record(algorithm: Algorithm, values: Vec<u32>) -> (Vec<u32>, EventLog) {
    let mut log = EventLog::new();
    let out = execute(algorithm, values, &mut log).unwrap();
    (out, log)
}

/// Orders by `key` only, so `tag` reveals the input position.
#[derive(Debug, Clone)]
struct Tagged {
    key: u32,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

// =============================================================================
// Output properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_output_is_sorted_permutation(algorithm in any_algorithm(), values in any_array()) {
        let expected = sorted_copy(&values);
        let (out, _) = record(algorithm, values);
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn prop_merge_sort_is_stable(keys in prop::collection::vec(0u32..5, 0..80)) {
        let input: Vec<Tagged> = keys
            .iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect();
        let mut log = EventLog::new();
        let out = execute(Algorithm::MergeSort, input, &mut log).unwrap();
        for pair in out.windows(2) {
            prop_assert!(pair[0].key <= pair[1].key);
            if pair[0].key == pair[1].key {
                prop_assert!(pair[0].tag < pair[1].tag);
            }
        }
    }

    #[test]
    fn prop_partition_splits_around_pivot((values, low, high) in array_with_subrange()) {
        let mut log = EventLog::new();
        let mut buffer = SortingBuffer::new(values.clone(), &mut log);
        let p = partition(&mut buffer, low, high).unwrap();
        let out = buffer.into_values();

        prop_assert!((low..=high).contains(&p));
        let pivot = out[p];
        prop_assert!(out[low..p].iter().all(|v| *v <= pivot));
        prop_assert!(out[p + 1..=high].iter().all(|v| *v >= pivot));
        prop_assert_eq!(sorted_copy(&out[low..=high]), sorted_copy(&values[low..=high]));
    }
}

// =============================================================================
// Event stream properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_single_terminal_event_last(algorithm in any_algorithm(), values in any_array()) {
        let len = values.len();
        let (_, log) = record(algorithm, values);
        prop_assert_eq!(log.count(EventKind::Sorted), 1);
        prop_assert_eq!(log.events().last(), Some(&SortEvent::sorted(len)));
    }

    #[test]
    fn prop_indices_in_bounds(algorithm in any_algorithm(), values in any_array()) {
        let len = values.len();
        let (_, log) = record(algorithm, values);
        prop_assert!(log.events().iter().all(|e| e.within(len)));
    }

    #[test]
    fn prop_event_stream_is_deterministic(algorithm in any_algorithm(), values in any_array()) {
        let (_, first) = record(algorithm, values.clone());
        let (_, second) = record(algorithm, values);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_exchanges_preserve_multiset(
        algorithm in prop::sample::select(vec![
            Algorithm::QuickSort,
            Algorithm::HeapSort,
            Algorithm::BubbleSort,
        ]),
        values in any_array(),
    ) {
        let expected = sorted_copy(&values);
        let mut violations = 0usize;
        let mut sink = |event: SortEvent, snapshot: &[u32]| -> Result<(), SortError> {
            if event.kind() == EventKind::Swap && sorted_copy(snapshot) != expected {
                violations += 1;
            }
            Ok(())
        };
        execute(algorithm, values, &mut sink).unwrap();
        prop_assert_eq!(violations, 0);
    }

    #[test]
    fn prop_bubble_sorted_input_runs_full_schedule(n in 0usize..=MAX_SIZE) {
        let values: Vec<u32> = (0..n as u32).map(|v| v + MIN_VALUE).collect();
        let (_, log) = record(Algorithm::BubbleSort, values);
        prop_assert_eq!(log.count(EventKind::Compare), n * n.saturating_sub(1) / 2);
        prop_assert_eq!(log.count(EventKind::Swap), 0);
    }
}
