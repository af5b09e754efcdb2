#![cfg(feature = "iterate")]
//! Property-based tests for `for_each_slice`.

use colltools::iterate::for_each_slice;
use proptest::prelude::*;

proptest! {
    /// Success Law: when every call succeeds every element is mutated
    #[test]
    fn prop_all_elements_mutated_on_success(
        elements in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let mut mutated = elements.clone();
        let result: Result<(), ()> = for_each_slice(&mut mutated, |_, value| {
            *value = value.wrapping_add(1);
            Ok(())
        });

        prop_assert!(result.is_ok());
        let expected: Vec<i32> = elements.iter().map(|value| value.wrapping_add(1)).collect();
        prop_assert_eq!(mutated, expected);
    }

    /// Short-Circuit Law: failing on call k keeps 0..k mutated and k.. untouched
    #[test]
    fn prop_failure_stops_iteration(
        elements in prop::collection::vec(any::<i32>(), 1..100),
        failing_seed in any::<usize>()
    ) {
        let failing_index = failing_seed % elements.len();
        let mut mutated = elements.clone();
        let mut calls = 0_usize;

        let result = for_each_slice(&mut mutated, |index, value| {
            calls += 1;
            if index == failing_index {
                return Err(format!("failed at {index}"));
            }
            *value = value.wrapping_mul(2);
            Ok(())
        });

        prop_assert_eq!(result, Err(format!("failed at {failing_index}")));
        prop_assert_eq!(calls, failing_index + 1);
        for (index, (before, after)) in elements.iter().zip(&mutated).enumerate() {
            if index < failing_index {
                prop_assert_eq!(*after, before.wrapping_mul(2));
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}
