//! Shiftplan: personal shift-work calendar
//!
//! Projects a fixed 35-day rotation onto a civil year and overlays personal
//! annotations, vacation blocks, recurring birthdays and public holidays.

pub mod calendar;
pub mod config;
pub mod error;
pub mod holidays;
pub mod state;

pub use calendar::{
    apply_range, build_agenda, generate, group_anchor, group_into_blocks, regenerate,
    remove_range, shift_for, AgendaItem, AgendaMonth, Birthday, BirthdayBook, CalendarSnapshot,
    DateKey, DayEdit, DayRecord, EventAnnotation, EventStore, HolidayMap, Shift, VacationBlock,
    YearCalendar,
};
pub use config::Config;
pub use error::{ConfigError, HolidayError, Result, ShiftPlanError, StorageError, ValidationError};
pub use holidays::{fetch_or_empty, HolidayProvider, NagerHolidayProvider, StaticHolidays};
pub use state::PlannerState;
