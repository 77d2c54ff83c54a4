//! Month-grouped list of vacation blocks and annotated days.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::store::EventStore;
use super::types::{Birthday, EventAnnotation, Shift, VacationBlock};
use super::vacation::group_into_blocks;

/// A single annotated day on the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaEntry {
    pub date: NaiveDate,
    pub shift: Shift,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<EventAnnotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl AgendaEntry {
    /// "AFZ" for special absence days, otherwise the shift label.
    pub fn label(&self) -> &'static str {
        if self.annotation.as_ref().is_some_and(|a| a.afz) {
            "AFZ"
        } else {
            self.shift.label()
        }
    }

    /// Whether the entry holds stored data that can be deleted.
    ///
    /// Birthday-only entries are projections and have nothing to delete.
    pub fn is_deletable(&self) -> bool {
        self.annotation
            .as_ref()
            .is_some_and(|a| a.has_entry_content())
    }
}

/// One line of the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgendaItem {
    Vacation(VacationBlock),
    Entry(AgendaEntry),
}

impl AgendaItem {
    /// Sort date: block start or entry date.
    pub fn date(&self) -> NaiveDate {
        match self {
            AgendaItem::Vacation(block) => block.start,
            AgendaItem::Entry(entry) => entry.date,
        }
    }
}

/// Agenda items of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub items: Vec<AgendaItem>,
}

/// Build the agenda for `year`.
///
/// Personal vacation days collapse into blocks; every other day with a note,
/// colleague marker or AFZ becomes an entry. With `include_birthdays`, each
/// birthday is projected onto `year` and merged into that day's entry.
pub fn build_agenda(
    store: &EventStore,
    birthdays: &[Birthday],
    year: i32,
    anchor: Option<NaiveDate>,
    include_birthdays: bool,
) -> Vec<AgendaMonth> {
    let mut entries: BTreeMap<NaiveDate, AgendaEntry> = store
        .in_year(year)
        .filter(|(_, a)| a.has_entry_content())
        .map(|(key, annotation)| {
            let date = key.date();
            let entry = AgendaEntry {
                date,
                shift: store.lookup_shift(date, anchor),
                annotation: Some(annotation.clone()),
                birthday: None,
            };
            (date, entry)
        })
        .collect();

    if include_birthdays {
        for birthday in birthdays {
            let Some(date) = birthday.in_year(year) else {
                continue;
            };
            entries
                .entry(date)
                .or_insert_with(|| AgendaEntry {
                    date,
                    shift: store.lookup_shift(date, anchor),
                    annotation: None,
                    birthday: None,
                })
                .birthday = Some(birthday.name.clone());
        }
    }

    let mut items: Vec<AgendaItem> = group_into_blocks(store, year)
        .into_iter()
        .map(AgendaItem::Vacation)
        .chain(entries.into_values().map(AgendaItem::Entry))
        .collect();
    // Stable: a block starting on an entry's day stays in front of it.
    items.sort_by_key(|item| item.date());

    let mut months: Vec<AgendaMonth> = Vec::new();
    for item in items {
        let date = item.date();
        match months.last_mut() {
            Some(current) if current.year == date.year() && current.month == date.month() => {
                current.items.push(item);
            }
            _ => months.push(AgendaMonth {
                year: date.year(),
                month: date.month(),
                items: vec![item],
            }),
        }
    }
    months
}
