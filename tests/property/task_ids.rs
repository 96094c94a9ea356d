//! Property-based tests for task id parsing.
//!
//! Uses proptest to verify:
//! 1. Any positive integer survives a display → parse round-trip.
//! 2. Zero never parses, no matter how it is written.
//! 3. Negative and non-numeric path segments are always rejected.

use proptest::prelude::*;
use taskboard_model::{ParseTaskIdError, TaskId};

proptest! {
    #[test]
    fn positive_ids_round_trip_through_display(raw in 1u64..) {
        let id = TaskId::from_raw(raw);
        let parsed: TaskId = id.to_string().parse().expect("valid id");
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn zero_is_rejected_with_any_number_of_leading_zeros(s in "0{1,12}") {
        prop_assert_eq!(s.parse::<TaskId>(), Err(ParseTaskIdError));
    }

    #[test]
    fn negative_segments_are_rejected(raw in 1u64..) {
        let s = format!("-{raw}");
        prop_assert_eq!(s.parse::<TaskId>(), Err(ParseTaskIdError));
    }

    #[test]
    fn alphabetic_segments_are_rejected(s in "[a-zA-Z]{1,16}") {
        prop_assert_eq!(s.parse::<TaskId>(), Err(ParseTaskIdError));
    }

    #[test]
    fn digits_with_trailing_junk_are_rejected(raw in 1u64.., junk in "[a-z]{1,8}") {
        let s = format!("{raw}{junk}");
        prop_assert_eq!(s.parse::<TaskId>(), Err(ParseTaskIdError));
    }
}
