//! Calendar module for the shift rotation and its personal overlays.
//!
//! This module provides the calendar core:
//!
//! - **Rotation Engine**: 35-day shift pattern anchored on a group or manual date
//! - **Event Store**: per-day annotations, never holding an empty entry
//! - **Birthdays**: recurring, one per month and day
//! - **Vacation**: range apply/remove and grouping of days into blocks
//! - **Generator**: the full year as one record per day
//! - **Agenda**: month-grouped list of vacation blocks and annotated days
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Calendar Layer                       │
//! │                                                          │
//! │   EventStore ─┐                                          │
//! │   Birthdays ──┼──► generate / regenerate ──► YearCalendar│
//! │   Holidays ───┘            │                             │
//! │                            ▼                             │
//! │                    cycle::shift_for                      │
//! │                                                          │
//! │   EventStore ──► vacation::group_into_blocks ──► agenda  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use shiftplan::calendar::{apply_range, generate, group_anchor, EventStore, HolidayMap};
//!
//! let anchor = group_anchor("1");
//! let mut events = EventStore::new();
//! apply_range(&mut events, from, to, anchor)?;
//!
//! let year = generate(2025, anchor, &events, &HolidayMap::new(), &[])?;
//! ```

pub mod agenda;
pub mod cycle;
pub mod generator;
pub mod store;
pub mod types;
pub mod vacation;

pub use agenda::{build_agenda, AgendaEntry, AgendaItem, AgendaMonth};
pub use cycle::{cycle_index, group_anchor, group_ids, shift_at, shift_for, CYCLE_LENGTH};
pub use generator::{generate, regenerate, CalendarSnapshot, YearCalendar};
pub use store::{BirthdayBook, EventStore};
pub use types::{
    Birthday, DateKey, DayEdit, DayRecord, EventAnnotation, HolidayMap, Shift, VacationBlock,
};
pub use vacation::{apply_range, blocks_from_days, group_into_blocks, remove_range};
