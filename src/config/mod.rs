//! Configuration for shiftplan.

pub mod colors;
mod settings;

pub use colors::{parse_hex, text_tone, ShiftColor, ShiftColors, TextTone};
pub use settings::{AnchorMode, CalendarConfig, Config, HolidayConfig, StorageConfig};
