//! Calendar types for the shift rotation and its day annotations.
//!
//! This module defines the shift enumeration, the date key used to index
//! annotations, and the records produced when a year is projected.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ValidationError};

// ============================================================================
// Shift
// ============================================================================

/// One of the four recurring shift states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Early shift (Früh).
    Early,
    /// Midday shift (Mittag).
    Midday,
    /// Night shift (Nacht).
    Night,
    /// Day off (Frei).
    Off,
}

impl Shift {
    /// All shifts in rotation order.
    pub const ALL: [Shift; 4] = [Shift::Early, Shift::Midday, Shift::Night, Shift::Off];

    /// Stable identifier used in config files and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Early => "early",
            Shift::Midday => "midday",
            Shift::Night => "night",
            Shift::Off => "off",
        }
    }

    /// Display label as printed on the roster.
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Early => "Früh",
            Shift::Midday => "Mittag",
            Shift::Night => "Nacht",
            Shift::Off => "Frei",
        }
    }

    /// Single-character code for grid output.
    pub fn code(&self) -> char {
        match self {
            Shift::Early => 'F',
            Shift::Midday => 'M',
            Shift::Night => 'N',
            Shift::Off => '-',
        }
    }

    /// Whether this is a working day.
    pub fn is_working(&self) -> bool {
        !matches!(self, Shift::Off)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Shift::ALL
            .into_iter()
            .find(|shift| shift.as_str() == needle || shift.label().to_lowercase() == needle)
            .ok_or_else(|| ValidationError::UnknownShift(s.to_string()))
    }
}

// ============================================================================
// Date Key
// ============================================================================

/// Canonical `YYYY-MM-DD` key of a civil date.
///
/// This is both the storage key of annotations and the join key against the
/// holiday map, so it never carries a time or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a strict `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self> {
        Ok(s.parse()?)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateKey> for NaiveDate {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, Self::FORMAT)
            .map_err(|_| ValidationError::InvalidDateKey(s.to_string()))?;
        let key = Self(date);
        // chrono accepts unpadded fields; the key format does not.
        if key.to_string() != s {
            return Err(ValidationError::InvalidDateKey(s.to_string()));
        }
        Ok(key)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Public holiday names keyed by date.
pub type HolidayMap = BTreeMap<DateKey, String>;

// ============================================================================
// Event Annotation
// ============================================================================

/// User-entered annotation for a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAnnotation {
    /// Free-text note.
    #[serde(default)]
    pub note: String,
    /// A colleague is on vacation that day.
    #[serde(default, rename = "hasVacation")]
    pub colleague_vacation: bool,
    /// Names of the colleagues on vacation.
    #[serde(default)]
    pub colleagues: Vec<String>,
    /// Special absence (AFZ).
    #[serde(default, rename = "isAfz")]
    pub afz: bool,
    /// The calendar owner's own vacation.
    #[serde(default, rename = "isPersonalVacation")]
    pub personal_vacation: bool,
}

impl EventAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// An annotation carrying only the personal vacation flag.
    pub fn personal_vacation() -> Self {
        Self {
            personal_vacation: true,
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Mark a colleague as on vacation.
    pub fn with_colleague(mut self, name: impl Into<String>) -> Self {
        self.colleague_vacation = true;
        self.colleagues.push(name.into());
        self
    }

    pub fn with_afz(mut self, afz: bool) -> Self {
        self.afz = afz;
        self
    }

    pub fn with_personal_vacation(mut self, personal_vacation: bool) -> Self {
        self.personal_vacation = personal_vacation;
        self
    }

    /// True when the note is blank and no flag is set.
    pub fn is_empty(&self) -> bool {
        self.note.trim().is_empty()
            && !self.colleague_vacation
            && !self.afz
            && !self.personal_vacation
    }

    /// True when the annotation carries anything besides personal vacation.
    pub fn has_entry_content(&self) -> bool {
        !self.note.trim().is_empty() || self.colleague_vacation || self.afz
    }

    /// Drop the fields that do not apply to `shift`.
    ///
    /// Colleague vacation and AFZ only exist on working days.
    pub fn clamp_to_shift(mut self, shift: Shift) -> Self {
        if !shift.is_working() {
            self.colleague_vacation = false;
            self.colleagues.clear();
            self.afz = false;
        }
        self
    }
}

/// Fields the day editor submits for one day.
///
/// The personal vacation flag is absent on purpose; it is owned by the
/// vacation range operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEdit {
    pub note: String,
    pub colleague_vacation: bool,
    pub colleagues: Vec<String>,
    pub afz: bool,
}

impl DayEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_colleague(mut self, name: impl Into<String>) -> Self {
        self.colleague_vacation = true;
        self.colleagues.push(name.into());
        self
    }

    pub fn with_afz(mut self, afz: bool) -> Self {
        self.afz = afz;
        self
    }
}

// ============================================================================
// Birthday
// ============================================================================

/// A yearly recurring birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    /// Zero-based month (0 = January).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    pub name: String,
}

impl Birthday {
    /// Create a validated birthday. The name is trimmed.
    pub fn new(month: u32, day: u32, name: impl Into<String>) -> Result<Self> {
        if month > 11 || !(1..=31).contains(&day) {
            return Err(ValidationError::InvalidBirthday { month, day }.into());
        }
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyBirthdayName.into());
        }
        Ok(Self { month, day, name })
    }

    /// Birthday falling on the month and day of `date`.
    pub fn on(date: NaiveDate, name: impl Into<String>) -> Result<Self> {
        Self::new(date.month0(), date.day(), name)
    }

    /// Whether this birthday falls on `date`, in any year.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month0() == self.month && date.day() == self.day
    }

    /// The occurrence in `year`, if that day exists (29 February).
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month + 1, self.day)
    }
}

// ============================================================================
// Day Record
// ============================================================================

/// One generated day of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub shift: Shift,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventAnnotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl DayRecord {
    pub fn key(&self) -> DateKey {
        DateKey::new(self.date)
    }

    pub fn is_personal_vacation(&self) -> bool {
        self.event.as_ref().is_some_and(|e| e.personal_vacation)
    }

    pub fn is_afz(&self) -> bool {
        self.event.as_ref().is_some_and(|e| e.afz)
    }

    pub fn has_note(&self) -> bool {
        self.event
            .as_ref()
            .is_some_and(|e| !e.note.trim().is_empty() || e.colleague_vacation)
    }
}

// ============================================================================
// Vacation Block
// ============================================================================

/// A contiguous run of personal vacation days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationBlock {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl VacationBlock {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Calendar days covered, inclusive.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}
