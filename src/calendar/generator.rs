//! Year projection of the rotation and its overlays.
//!
//! The generator owns nothing: it reads a snapshot of the user data and the
//! holiday map and returns a fresh [`YearCalendar`]. Callers regenerate after
//! every change to the year, the anchor, the annotations, the holidays or the
//! birthdays.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, Result, ValidationError};

use super::cycle::shift_for;
use super::store::EventStore;
use super::types::{Birthday, DateKey, DayRecord, HolidayMap, Shift};

/// Everything a calendar is derived from.
#[derive(Debug, Clone, Copy)]
pub struct CalendarSnapshot<'a> {
    pub year: i32,
    pub anchor: Option<NaiveDate>,
    pub events: &'a EventStore,
    pub holidays: &'a HolidayMap,
    pub birthdays: &'a [Birthday],
}

/// Rebuild the calendar for `snapshot`.
pub fn regenerate(snapshot: &CalendarSnapshot<'_>) -> Result<YearCalendar> {
    generate(
        snapshot.year,
        snapshot.anchor,
        snapshot.events,
        snapshot.holidays,
        snapshot.birthdays,
    )
}

/// Build one [`DayRecord`] per day of `year`, January 1 to December 31.
///
/// Fails when no anchor is configured.
pub fn generate(
    year: i32,
    anchor: Option<NaiveDate>,
    events: &EventStore,
    holidays: &HolidayMap,
    birthdays: &[Birthday],
) -> Result<YearCalendar> {
    let anchor = anchor.ok_or(ConfigError::MissingAnchor)?;
    let (first, last) = year_bounds(year)?;

    // Later entries win, matching a save that replaced an earlier one.
    let birthday_index: BTreeMap<(u32, u32), &str> = birthdays
        .iter()
        .map(|b| ((b.month, b.day), b.name.as_str()))
        .collect();

    let days: Vec<DayRecord> = first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|date| {
            let key = DateKey::new(date);
            DayRecord {
                date,
                shift: shift_for(date, anchor),
                event: events.get(key).cloned(),
                holiday: holidays.get(&key).cloned(),
                birthday: birthday_index
                    .get(&(date.month0(), date.day()))
                    .map(|name| name.to_string()),
            }
        })
        .collect();

    debug!(
        "Generated {} days for {} (anchor {}, {} holidays)",
        days.len(),
        year,
        anchor,
        holidays.len()
    );

    Ok(YearCalendar { year, anchor, days })
}

fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let last = NaiveDate::from_ymd_opt(year, 12, 31);
    match (first, last) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => Err(ValidationError::YearOutOfRange(year).into()),
    }
}

/// A generated year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCalendar {
    pub year: i32,
    pub anchor: NaiveDate,
    pub days: Vec<DayRecord>,
}

impl YearCalendar {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.iter()
    }

    /// Record for `date`, if it lies in this year.
    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        if date.year() != self.year {
            return None;
        }
        self.days.get(date.ordinal0() as usize)
    }

    /// Days of `month` (1-12). Empty for an invalid month.
    pub fn month(&self, month: u32) -> &[DayRecord] {
        let Some(start) = NaiveDate::from_ymd_opt(self.year, month, 1) else {
            return &[];
        };
        let end = if month == 12 {
            self.days.len()
        } else {
            NaiveDate::from_ymd_opt(self.year, month + 1, 1)
                .map(|d| d.ordinal0() as usize)
                .unwrap_or(self.days.len())
        };
        &self.days[start.ordinal0() as usize..end]
    }

    /// Number of days per shift.
    pub fn shift_totals(&self) -> BTreeMap<Shift, usize> {
        let mut totals = BTreeMap::new();
        for day in &self.days {
            *totals.entry(day.shift).or_insert(0) += 1;
        }
        totals
    }

    /// Working days that are personal vacation.
    pub fn vacation_days(&self) -> usize {
        self.days
            .iter()
            .filter(|d| d.shift.is_working() && d.is_personal_vacation())
            .count()
    }

    pub fn into_days(self) -> Vec<DayRecord> {
        self.days
    }
}
