//! Personal vacation ranges.
//!
//! Vacation is entered as a date range but stored per day, as a flag on that
//! day's annotation. Days off in the rotation are skipped when a range is
//! applied, so a block on the list view can have holes where the rotation
//! was off anyway; [`group_into_blocks`] only joins days that are adjacent.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::error::{ConfigError, Result, ValidationError};

use super::cycle::shift_for;
use super::store::EventStore;
use super::types::{DateKey, EventAnnotation, VacationBlock};

/// Largest gap, in hours, between two flagged days that still counts as
/// "the next day".
///
/// One day plus an hour, so a block spanning a daylight saving change still
/// reads as contiguous when dates come from local midnights.
pub const BLOCK_GAP_TOLERANCE_HOURS: i64 = 25;

/// [`BLOCK_GAP_TOLERANCE_HOURS`] as a duration.
pub fn block_gap_tolerance() -> Duration {
    Duration::hours(BLOCK_GAP_TOLERANCE_HOURS)
}

fn check_range(from: NaiveDate, to: NaiveDate) -> Result<()> {
    if from > to {
        return Err(ValidationError::InvalidRange { from, to }.into());
    }
    Ok(())
}

/// Flag every working day in `[from, to]` as personal vacation.
///
/// Days that are `Off` in the rotation are left untouched. Both the anchor
/// and the range are checked before the store is modified. Returns the
/// number of days flagged.
pub fn apply_range(
    store: &mut EventStore,
    from: NaiveDate,
    to: NaiveDate,
    anchor: Option<NaiveDate>,
) -> Result<usize> {
    let anchor = anchor.ok_or(ConfigError::MissingAnchor)?;
    check_range(from, to)?;

    let mut flagged = 0;
    for date in from.iter_days().take_while(|d| *d <= to) {
        if !shift_for(date, anchor).is_working() {
            continue;
        }
        let key = DateKey::new(date);
        let annotation = store
            .get(key)
            .cloned()
            .unwrap_or_else(EventAnnotation::new)
            .with_personal_vacation(true);
        store.upsert(key, annotation);
        flagged += 1;
    }

    debug!("Flagged {} vacation days between {} and {}", flagged, from, to);
    Ok(flagged)
}

/// Clear the personal vacation flag on every day in `[from, to]`.
///
/// Entries left with nothing else in them are deleted; notes and colleague
/// markers survive. The rotation is not consulted. Returns the number of
/// days cleared.
pub fn remove_range(store: &mut EventStore, from: NaiveDate, to: NaiveDate) -> Result<usize> {
    check_range(from, to)?;

    let flagged: Vec<DateKey> = store
        .in_range(from, to)
        .filter(|(_, e)| e.personal_vacation)
        .map(|(k, _)| k)
        .collect();

    for &key in &flagged {
        let now_empty = match store.get_mut(key) {
            Some(annotation) => {
                annotation.personal_vacation = false;
                annotation.is_empty()
            }
            None => continue,
        };
        if now_empty {
            store.remove(key);
        }
    }

    debug!("Cleared {} vacation days between {} and {}", flagged.len(), from, to);
    Ok(flagged.len())
}

/// Group the personal vacation days of `year` into contiguous blocks.
pub fn group_into_blocks(store: &EventStore, year: i32) -> Vec<VacationBlock> {
    let days: Vec<NaiveDate> = store
        .in_year(year)
        .filter(|(_, e)| e.personal_vacation)
        .map(|(k, _)| k.date())
        .collect();

    blocks_from_days(&days)
}

/// Partition ascending dates into runs of adjacent days.
pub fn blocks_from_days(days: &[NaiveDate]) -> Vec<VacationBlock> {
    let mut blocks = Vec::new();
    let Some(&first) = days.first() else {
        return blocks;
    };

    let tolerance = block_gap_tolerance();
    let mut start = first;
    let mut previous = first;
    for &day in &days[1..] {
        if day - previous > tolerance {
            blocks.push(VacationBlock::new(start, previous));
            start = day;
        }
        previous = day;
    }
    blocks.push(VacationBlock::new(start, previous));

    blocks
}
