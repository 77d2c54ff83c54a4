//! Day annotation and birthday storage.
//!
//! [`EventStore`] holds the user-entered annotation per civil date and never
//! keeps an empty annotation around. [`BirthdayBook`] holds at most one
//! birthday per month/day.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cycle::shift_for;
use super::types::{Birthday, DateKey, DayEdit, EventAnnotation, Shift};

// ============================================================================
// Event Store
// ============================================================================

/// Annotations keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStore {
    entries: BTreeMap<DateKey, EventAnnotation>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `annotation` under `key`, or remove the entry if it is empty.
    pub fn upsert(&mut self, key: impl Into<DateKey>, annotation: EventAnnotation) {
        let key = key.into();
        if annotation.is_empty() {
            if self.entries.remove(&key).is_some() {
                debug!("Removed empty annotation: {}", key);
            }
        } else {
            self.entries.insert(key, annotation);
            debug!("Saved annotation: {}", key);
        }
    }

    /// Remove the entry for `key`, returning it.
    pub fn remove(&mut self, key: impl Into<DateKey>) -> Option<EventAnnotation> {
        let key = key.into();
        let removed = self.entries.remove(&key);
        if removed.is_some() {
            debug!("Deleted annotation: {}", key);
        }
        removed
    }

    pub fn get(&self, key: impl Into<DateKey>) -> Option<&EventAnnotation> {
        self.entries.get(&key.into())
    }

    pub fn contains(&self, key: impl Into<DateKey>) -> bool {
        self.entries.contains_key(&key.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (DateKey, &EventAnnotation)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Entries whose date falls in `year`, ascending.
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = (DateKey, &EventAnnotation)> {
        self.iter().filter(move |(k, _)| k.year() == year)
    }

    /// Entries between `from` and `to` inclusive, ascending. Empty when
    /// `from` is after `to`.
    pub fn in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Iterator<Item = (DateKey, &EventAnnotation)> {
        (from <= to)
            .then(|| self.entries.range(DateKey::new(from)..=DateKey::new(to)))
            .into_iter()
            .flatten()
            .map(|(k, v)| (*k, v))
    }

    pub(crate) fn get_mut(&mut self, key: DateKey) -> Option<&mut EventAnnotation> {
        self.entries.get_mut(&key)
    }

    /// Shift of `date` under `anchor`, or `Off` when no anchor is configured.
    ///
    /// List views call this for every entry, so a missing anchor is not an
    /// error here.
    pub fn lookup_shift(&self, date: NaiveDate, anchor: Option<NaiveDate>) -> Shift {
        match anchor {
            Some(anchor) => shift_for(date, anchor),
            None => Shift::Off,
        }
    }

    /// Save the day editor's fields for `date`.
    ///
    /// Colleague names are trimmed and blanks dropped, fields that do not
    /// apply to `shift` are cleared, and the stored personal vacation flag
    /// is kept. Returns the annotation now stored, if any.
    pub fn save_day(
        &mut self,
        date: NaiveDate,
        shift: Shift,
        edit: DayEdit,
    ) -> Option<&EventAnnotation> {
        let key = DateKey::new(date);
        let personal_vacation = self.get(key).is_some_and(|e| e.personal_vacation);

        let colleagues: Vec<String> = edit
            .colleagues
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        let annotation = EventAnnotation {
            note: edit.note,
            colleague_vacation: edit.colleague_vacation,
            colleagues,
            afz: edit.afz,
            personal_vacation,
        }
        .clamp_to_shift(shift);

        self.upsert(key, annotation);
        self.get(key)
    }
}

impl FromIterator<(DateKey, EventAnnotation)> for EventStore {
    fn from_iter<I: IntoIterator<Item = (DateKey, EventAnnotation)>>(iter: I) -> Self {
        let mut store = EventStore::new();
        for (key, annotation) in iter {
            store.upsert(key, annotation);
        }
        store
    }
}

// ============================================================================
// Birthday Book
// ============================================================================

/// Recurring birthdays, unique per month and day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthdayBook {
    birthdays: Vec<Birthday>,
}

impl BirthdayBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a birthday, replacing any entry on the same month and day.
    pub fn save(&mut self, birthday: Birthday) {
        match self
            .birthdays
            .iter_mut()
            .find(|b| b.month == birthday.month && b.day == birthday.day)
        {
            Some(existing) => {
                debug!(
                    "Replaced birthday {}/{}: {} -> {}",
                    birthday.day,
                    birthday.month + 1,
                    existing.name,
                    birthday.name
                );
                *existing = birthday;
            }
            None => {
                debug!("Added birthday {}/{}: {}", birthday.day, birthday.month + 1, birthday.name);
                self.birthdays.push(birthday);
            }
        }
    }

    /// Delete the birthday on `month` (0-11) and `day`. No-op if absent.
    pub fn delete(&mut self, month: u32, day: u32) -> Option<Birthday> {
        let index = self
            .birthdays
            .iter()
            .position(|b| b.month == month && b.day == day)?;
        Some(self.birthdays.remove(index))
    }

    pub fn find(&self, month: u32, day: u32) -> Option<&Birthday> {
        self.birthdays
            .iter()
            .find(|b| b.month == month && b.day == day)
    }

    /// Birthday falling on `date`, in any year.
    pub fn for_date(&self, date: NaiveDate) -> Option<&Birthday> {
        self.find(date.month0(), date.day())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Birthday> {
        self.birthdays.iter()
    }

    /// Birthdays ordered by month and day.
    pub fn sorted(&self) -> Vec<&Birthday> {
        let mut sorted: Vec<&Birthday> = self.birthdays.iter().collect();
        sorted.sort_by_key(|b| (b.month, b.day));
        sorted
    }

    pub fn len(&self) -> usize {
        self.birthdays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birthdays.is_empty()
    }

    pub fn as_slice(&self) -> &[Birthday] {
        &self.birthdays
    }
}

impl From<Vec<Birthday>> for BirthdayBook {
    fn from(birthdays: Vec<Birthday>) -> Self {
        let mut book = BirthdayBook::new();
        for birthday in birthdays {
            book.save(birthday);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::cycle::group_anchor;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_upsert_empty_removes() {
        let mut store = EventStore::new();
        let day = date(2025, 4, 1);

        store.upsert(day, EventAnnotation::new().with_note("dentist"));
        assert!(store.contains(day));

        store.upsert(day, EventAnnotation::new().with_note("  "));
        assert!(store.get(day).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_upsert_empty_never_stored() {
        let mut store = EventStore::new();
        store.upsert(date(2025, 4, 2), EventAnnotation::new());
        assert!(store.get(date(2025, 4, 2)).is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = EventStore::new();
        let day = date(2025, 4, 1);
        store.upsert(day, EventAnnotation::new().with_afz(true));

        let removed = store.remove(day).unwrap();
        assert!(removed.afz);
        assert!(store.remove(day).is_none());
    }

    #[test]
    fn test_in_year_and_range() {
        let mut store = EventStore::new();
        store.upsert(date(2024, 12, 31), EventAnnotation::new().with_note("a"));
        store.upsert(date(2025, 1, 1), EventAnnotation::new().with_note("b"));
        store.upsert(date(2025, 6, 1), EventAnnotation::new().with_note("c"));

        let notes: Vec<&str> = store.in_year(2025).map(|(_, e)| e.note.as_str()).collect();
        assert_eq!(notes, vec!["b", "c"]);

        let keys: Vec<String> = store
            .in_range(date(2024, 12, 31), date(2025, 1, 1))
            .map(|(k, _)| k.to_string())
            .collect();
        assert_eq!(keys, vec!["2024-12-31", "2025-01-01"]);
    }

    #[test]
    fn test_lookup_shift_fallback() {
        let store = EventStore::new();
        let anchor = group_anchor("1");
        assert_eq!(store.lookup_shift(date(2025, 1, 30), anchor), Shift::Early);
        assert_eq!(store.lookup_shift(date(2025, 1, 30), None), Shift::Off);
    }

    #[test]
    fn test_save_day_clamps_off_day() {
        let mut store = EventStore::new();
        let day = date(2025, 1, 29);
        let edit = DayEdit::new().with_note("party").with_colleague("Jonas").with_afz(true);

        let saved = store.save_day(day, Shift::Off, edit).unwrap().clone();
        assert!(!saved.colleague_vacation);
        assert!(saved.colleagues.is_empty());
        assert!(!saved.afz);
        assert_eq!(saved.note, "party");
    }

    #[test]
    fn test_save_day_off_clamp_can_delete() {
        let mut store = EventStore::new();
        let day = date(2025, 1, 29);
        let edit = DayEdit::new().with_colleague("Jonas").with_afz(true);

        assert!(store.save_day(day, Shift::Off, edit).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_day_preserves_personal_vacation() {
        let mut store = EventStore::new();
        let day = date(2025, 3, 6);
        store.upsert(day, EventAnnotation::personal_vacation());

        let edit = DayEdit::new().with_note("flight 10:40");
        let saved = store.save_day(day, Shift::Early, edit).unwrap();
        assert!(saved.personal_vacation);
        assert_eq!(saved.note, "flight 10:40");

        // Clearing the editor keeps the vacation day
        let saved = store.save_day(day, Shift::Early, DayEdit::new()).unwrap();
        assert_eq!(saved, &EventAnnotation::personal_vacation());
    }

    #[test]
    fn test_save_day_trims_colleagues() {
        let mut store = EventStore::new();
        let edit = DayEdit {
            colleague_vacation: true,
            colleagues: vec![" Jonas ".into(), "".into(), "  ".into(), "Mia".into()],
            ..DayEdit::default()
        };
        let saved = store.save_day(date(2025, 3, 6), Shift::Early, edit).unwrap();
        assert_eq!(saved.colleagues, vec!["Jonas", "Mia"]);
    }

    #[test]
    fn test_store_json_shape() {
        let mut store = EventStore::new();
        store.upsert(date(2025, 3, 3), EventAnnotation::new().with_note("x"));

        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["2025-03-03"]["note"], "x");

        let back: EventStore = serde_json::from_value(json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn test_birthday_replace_same_day() {
        let mut book = BirthdayBook::new();
        book.save(Birthday::new(4, 12, "Anna").unwrap());
        book.save(Birthday::new(4, 12, "Ben").unwrap());

        assert_eq!(book.len(), 1);
        assert_eq!(book.find(4, 12).unwrap().name, "Ben");
    }

    #[test]
    fn test_birthday_delete() {
        let mut book = BirthdayBook::new();
        book.save(Birthday::new(0, 1, "Neujahr").unwrap());
        book.save(Birthday::new(6, 14, "Clara").unwrap());

        assert!(book.delete(3, 3).is_none());
        assert_eq!(book.len(), 2);

        assert_eq!(book.delete(0, 1).unwrap().name, "Neujahr");
        assert!(book.for_date(date(2030, 1, 1)).is_none());
        assert_eq!(book.for_date(date(2030, 7, 14)).unwrap().name, "Clara");
    }

    #[test]
    fn test_birthday_sorted() {
        let book = BirthdayBook::from(vec![
            Birthday::new(11, 24, "Z").unwrap(),
            Birthday::new(0, 2, "A").unwrap(),
            Birthday::new(0, 1, "B").unwrap(),
        ]);
        let names: Vec<&str> = book.sorted().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "Z"]);
    }
}
