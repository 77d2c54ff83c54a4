//! Property-based tests for the rotation engine and the stores.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use shiftplan::calendar::{cycle_index, CYCLE_LENGTH};
use shiftplan::{shift_for, Birthday, BirthdayBook, EventAnnotation, EventStore, Shift};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // Roughly 1900 to 2150.
    (-25_000i64..65_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Property: every date maps to one of the four shifts
#[test]
fn proptest_totality() {
    proptest!(|(date in any_date(), anchor in any_date())| {
        let index = cycle_index(date, anchor);
        prop_assert!(index < CYCLE_LENGTH as usize);
        prop_assert!(Shift::ALL.contains(&shift_for(date, anchor)));
    });
}

/// Property: the rotation repeats every 35 days
#[test]
fn proptest_periodicity() {
    proptest!(|(date in any_date(), anchor in any_date(), k in -20i64..20)| {
        prop_assert_eq!(
            shift_for(date, anchor),
            shift_for(date + Duration::days(CYCLE_LENGTH * k), anchor)
        );
    });
}

/// Property: the anchor itself is always an early shift
#[test]
fn proptest_anchor_identity() {
    proptest!(|(anchor in any_date())| {
        prop_assert_eq!(shift_for(anchor, anchor), Shift::Early);
    });
}

/// Property: moving date and anchor together does not change the shift
#[test]
fn proptest_anchor_shift_symmetry() {
    proptest!(|(date in any_date(), anchor in any_date(), k in -5_000i64..5_000)| {
        let offset = Duration::days(k);
        prop_assert_eq!(shift_for(date, anchor), shift_for(date + offset, anchor + offset));
    });
}

/// Property: an empty annotation is never retrievable
#[test]
fn proptest_empty_upsert_deletes() {
    proptest!(|(date in any_date(), note in "[a-z ]{0,12}")| {
        let mut store = EventStore::new();
        store.upsert(date, EventAnnotation::new().with_note(note));
        store.upsert(date, EventAnnotation::new());
        prop_assert!(store.get(date).is_none());
        prop_assert!(store.is_empty());
    });
}

/// Property: saving twice on the same day keeps one birthday with the later name
#[test]
fn proptest_birthday_uniqueness() {
    proptest!(|(month in 0u32..12, day in 1u32..29, first in "[A-Z][a-z]{1,8}", second in "[A-Z][a-z]{1,8}")| {
        let mut book = BirthdayBook::new();
        book.save(Birthday::new(month, day, first).unwrap());
        book.save(Birthday::new(month, day, second.clone()).unwrap());
        prop_assert_eq!(book.len(), 1);
        prop_assert_eq!(&book.find(month, day).unwrap().name, &second);
    });
}
