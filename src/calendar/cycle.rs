//! The 35-day shift rotation.
//!
//! A rotation starts on its anchor date (index 0) and repeats every
//! [`CYCLE_LENGTH`] days in both directions. All arithmetic is done on civil
//! dates, so daylight saving transitions can never move a day into the
//! neighbouring slot.

use chrono::{NaiveDate, NaiveDateTime};

use super::types::Shift;

/// Length of the rotation in days.
pub const CYCLE_LENGTH: i64 = 35;

use Shift::{Early as E, Midday as M, Night as N, Off as O};

/// The rotation, one entry per day starting at the anchor.
///
/// The two halves differ (4/3/4 then 3/4/3 working days); that is how the
/// roster is actually worked.
pub const SHIFT_CYCLE: [Shift; CYCLE_LENGTH as usize] = [
    E, E, E, E, O, //
    M, M, M, O, //
    N, N, N, N, O, O, O, O, O, //
    E, E, E, O, //
    M, M, M, M, O, //
    N, N, N, O, O, O, O, O,
];

/// Anchor dates of the five groups.
///
/// Each group runs the same rotation one week behind the previous one.
pub const GROUP_ANCHORS: [(&str, (i32, u32, u32)); 5] = [
    ("1", (2025, 1, 30)),
    ("2", (2025, 1, 23)),
    ("3", (2025, 1, 16)),
    ("4", (2025, 1, 9)),
    ("5", (2025, 1, 2)),
];

/// Look up the anchor date of a group by its identifier.
pub fn group_anchor(group: &str) -> Option<NaiveDate> {
    GROUP_ANCHORS
        .iter()
        .find(|(id, _)| *id == group.trim())
        .and_then(|(_, (y, m, d))| NaiveDate::from_ymd_opt(*y, *m, *d))
}

/// Identifiers of all known groups.
pub fn group_ids() -> impl Iterator<Item = &'static str> {
    GROUP_ANCHORS.iter().map(|(id, _)| *id)
}

/// Position of `date` within the rotation anchored at `anchor` (0-34).
pub fn cycle_index(date: NaiveDate, anchor: NaiveDate) -> usize {
    let offset = date.signed_duration_since(anchor).num_days();
    offset.rem_euclid(CYCLE_LENGTH) as usize
}

/// Shift worked on `date` for the rotation anchored at `anchor`.
pub fn shift_for(date: NaiveDate, anchor: NaiveDate) -> Shift {
    SHIFT_CYCLE[cycle_index(date, anchor)]
}

/// Shift for a timestamp; the time of day is ignored.
pub fn shift_at(at: NaiveDateTime, anchor: NaiveDate) -> Shift {
    shift_for(at.date(), anchor)
}
