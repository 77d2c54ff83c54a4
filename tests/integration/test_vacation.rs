//! Vacation ranges and blocks.

use chrono::NaiveDate;

use shiftplan::{
    apply_range, group_anchor, group_into_blocks, remove_range, shift_for, EventAnnotation,
    EventStore, Shift, ShiftPlanError, ValidationError, VacationBlock,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_range_skips_off_days() {
    let anchor = group_anchor("1");
    let mut events = EventStore::new();

    let flagged = apply_range(&mut events, date(2025, 3, 3), date(2025, 3, 7), anchor).unwrap();
    assert_eq!(flagged, 2);

    let blocks = group_into_blocks(&events, 2025);
    assert_eq!(blocks, vec![VacationBlock::new(date(2025, 3, 6), date(2025, 3, 7))]);
    for day in [date(2025, 3, 3), date(2025, 3, 4), date(2025, 3, 5)] {
        assert!(!events.contains(day));
    }
}

#[test]
fn test_off_days_split_blocks() {
    let anchor = group_anchor("1");
    let mut events = EventStore::new();

    apply_range(&mut events, date(2025, 3, 6), date(2025, 3, 20), anchor).unwrap();

    let blocks = group_into_blocks(&events, 2025);
    assert_eq!(
        blocks,
        vec![
            VacationBlock::new(date(2025, 3, 6), date(2025, 3, 9)),
            VacationBlock::new(date(2025, 3, 11), date(2025, 3, 13)),
            VacationBlock::new(date(2025, 3, 15), date(2025, 3, 18)),
        ]
    );
    for block in &blocks {
        for day in block.start.iter_days().take_while(|d| *d <= block.end) {
            assert_ne!(shift_for(day, anchor.unwrap()), Shift::Off);
        }
    }
}

#[test]
fn test_remove_collapses_entries() {
    let anchor = group_anchor("2");
    let mut events = EventStore::new();
    apply_range(&mut events, date(2025, 8, 1), date(2025, 8, 21), anchor).unwrap();
    assert!(!events.is_empty());

    remove_range(&mut events, date(2025, 8, 1), date(2025, 8, 21)).unwrap();
    assert!(events.is_empty());
    assert!(group_into_blocks(&events, 2025).is_empty());
}

#[test]
fn test_remove_keeps_notes() {
    let anchor = group_anchor("1");
    let mut events = EventStore::new();
    events.upsert(date(2025, 3, 7), EventAnnotation::new().with_note("Übergabe"));
    apply_range(&mut events, date(2025, 3, 6), date(2025, 3, 7), anchor).unwrap();

    let cleared = remove_range(&mut events, date(2025, 3, 1), date(2025, 3, 31)).unwrap();
    assert_eq!(cleared, 2);
    assert_eq!(events.len(), 1);
    let kept = events.get(date(2025, 3, 7)).unwrap();
    assert_eq!(kept.note, "Übergabe");
    assert!(!kept.personal_vacation);
}

#[test]
fn test_blocks_limited_to_year() {
    let anchor = group_anchor("1");
    let mut events = EventStore::new();
    apply_range(&mut events, date(2024, 12, 20), date(2025, 1, 10), anchor).unwrap();

    for block in group_into_blocks(&events, 2025) {
        assert!(block.start >= date(2025, 1, 1));
    }
    for block in group_into_blocks(&events, 2024) {
        assert!(block.end <= date(2024, 12, 31));
    }
}

#[test]
fn test_reversed_range_rejected() {
    let mut events = EventStore::new();
    let err = apply_range(&mut events, date(2025, 3, 9), date(2025, 3, 6), group_anchor("1"))
        .unwrap_err();
    assert!(matches!(
        err,
        ShiftPlanError::Validation(ValidationError::InvalidRange { .. })
    ));
    assert!(events.is_empty());

    assert!(remove_range(&mut events, date(2025, 3, 9), date(2025, 3, 6)).is_err());
}

#[test]
fn test_missing_anchor_rejected() {
    let mut events = EventStore::new();
    assert!(apply_range(&mut events, date(2025, 3, 6), date(2025, 3, 9), None).is_err());
    assert!(events.is_empty());
}
