//! Error types for shiftplan.

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for shiftplan operations.
#[derive(Error, Debug)]
pub enum ShiftPlanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Holiday error: {0}")]
    Holiday(#[from] HolidayError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown group: {0} (expected 1-5)")]
    UnknownGroup(String),

    #[error("Invalid start date: {0} (expected YYYY-MM-DD)")]
    InvalidStartDate(String),

    #[error("No cycle start date configured; set a group or a manual start date")]
    MissingAnchor,
}

/// Input validation errors raised before any mutation happens.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid date range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("Invalid date key: {0} (expected YYYY-MM-DD)")]
    InvalidDateKey(String),

    #[error("Invalid birthday: month {month} (0-11), day {day} (1-31)")]
    InvalidBirthday { month: u32, day: u32 },

    #[error("Birthday name must not be empty")]
    EmptyBirthdayName,

    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),

    #[error("Invalid color: {0} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Unknown shift: {0}")]
    UnknownShift(String),
}

/// Public holiday lookup errors.
#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Failed to decode holiday data: {0}")]
    Decode(String),
}

/// State file errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read state file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write state file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to parse state file: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Result type alias for shiftplan operations.
pub type Result<T> = std::result::Result<T, ShiftPlanError>;
