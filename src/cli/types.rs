//! CLI response types.
//!
//! These types are used by the CLI to format output for users.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use shiftplan::{AgendaMonth, Birthday, DayRecord, EventAnnotation, Shift, VacationBlock};
use shiftplan::config::TextTone;

/// Generated calendar, whole year or one month.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarResult {
    pub year: i32,
    pub anchor: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    pub days: Vec<DayRecord>,
    pub shift_totals: BTreeMap<Shift, usize>,
    pub vacation_days: usize,
}

/// Shift of a single date.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftResult {
    pub date: NaiveDate,
    pub anchor: NaiveDate,
    pub cycle_index: usize,
    pub shift: Shift,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<EventAnnotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

/// Outcome of saving or clearing a day.
#[derive(Debug, Clone, Serialize)]
pub struct DayResult {
    pub date: NaiveDate,
    pub shift: Shift,
    /// Annotation stored after the change, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<EventAnnotation>,
    pub message: String,
}

/// Outcome of applying or removing a vacation range.
#[derive(Debug, Clone, Serialize)]
pub struct VacationChange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days_changed: usize,
    pub message: String,
}

/// Vacation blocks of a year.
#[derive(Debug, Clone, Serialize)]
pub struct VacationList {
    pub year: i32,
    pub blocks: Vec<VacationBlock>,
    pub total_days: usize,
}

/// Outcome of a birthday change.
#[derive(Debug, Clone, Serialize)]
pub struct BirthdayChange {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

/// All birthdays in calendar order.
#[derive(Debug, Clone, Serialize)]
pub struct BirthdayList {
    pub birthdays: Vec<Birthday>,
}

/// Month-grouped agenda of a year.
#[derive(Debug, Clone, Serialize)]
pub struct AgendaResult {
    pub year: i32,
    pub months: Vec<AgendaMonth>,
}

/// One public holiday.
#[derive(Debug, Clone, Serialize)]
pub struct HolidayEntry {
    pub date: NaiveDate,
    pub name: String,
    pub shift: Shift,
}

/// Public holidays of a year.
#[derive(Debug, Clone, Serialize)]
pub struct HolidayList {
    pub year: i32,
    pub enabled: bool,
    pub region: String,
    pub holidays: Vec<HolidayEntry>,
}

/// Configured color of one shift with its readable text tone.
#[derive(Debug, Clone, Serialize)]
pub struct ColorEntry {
    pub shift: Shift,
    pub label: String,
    pub light: String,
    pub light_text: TextTone,
    pub dark: String,
    pub dark_text: TextTone,
}

/// Configured shift colors.
#[derive(Debug, Clone, Serialize)]
pub struct ColorList {
    pub colors: Vec<ColorEntry>,
}
