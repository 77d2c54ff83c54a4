//! Configuration settings for shiftplan.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::cycle::group_anchor;
use crate::error::{ConfigError, Result};

use super::colors::ShiftColors;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub colors: ShiftColors,
    pub holidays: HolidayConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            // Current directory
            PathBuf::from("shiftplan.toml"),
            PathBuf::from("config.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("shiftplan/config.toml"))
                .unwrap_or_default(),
            // Home directory
            dirs::home_dir()
                .map(|p| p.join(".shiftplan/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.is_file() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.calendar.validate()?;
        self.colors.validate()?;

        if self.holidays.enabled {
            if self.holidays.country.trim().is_empty() {
                return Err(ConfigError::MissingField("holidays.country".to_string()).into());
            }
            if self.holidays.region.trim().is_empty() {
                return Err(ConfigError::MissingField("holidays.region".to_string()).into());
            }
            if self.holidays.base_url.trim().is_empty() {
                return Err(ConfigError::MissingField("holidays.base_url".to_string()).into());
            }
        }
        if self.holidays.timeout_secs == 0 {
            return Err(ConfigError::Invalid("holidays.timeout_secs must be > 0".to_string()).into());
        }

        if self.storage.state_file.trim().is_empty() {
            return Err(ConfigError::MissingField("storage.state_file".to_string()).into());
        }

        Ok(())
    }

    /// Expand the data directory path.
    pub fn data_dir(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.storage.data_dir);
        PathBuf::from(expanded.as_ref())
    }

    /// Full path of the state file.
    pub fn state_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.state_file)
    }
}

/// How the rotation anchor is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    /// Use the fixed anchor of a group.
    #[default]
    Group,
    /// Use a manually entered start date.
    Manual,
}

/// Calendar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Year to display
    pub year: i32,
    /// Anchor mode: "group" or "manual"
    pub anchor_mode: AnchorMode,
    /// Group identifier ("1" to "5")
    pub group: String,
    /// Start date of the rotation in manual mode (YYYY-MM-DD)
    pub manual_date: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: Local::now().year(),
            anchor_mode: AnchorMode::Group,
            group: "1".to_string(),
            manual_date: None,
        }
    }
}

impl CalendarConfig {
    /// Resolve the anchor date, if one is configured.
    ///
    /// Returns `None` for an unknown group, a missing or unparsable manual
    /// date.
    pub fn resolve_anchor(&self) -> Option<NaiveDate> {
        match self.anchor_mode {
            AnchorMode::Group => group_anchor(&self.group),
            AnchorMode::Manual => self
                .manual_date
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
        }
    }

    /// Resolve the anchor date or fail with a configuration error.
    pub fn anchor(&self) -> Result<NaiveDate> {
        Ok(self.resolve_anchor().ok_or(ConfigError::MissingAnchor)?)
    }

    /// Switch to a fixed group.
    pub fn use_group(&mut self, group: impl Into<String>) {
        self.anchor_mode = AnchorMode::Group;
        self.group = group.into();
    }

    /// Switch to a manual start date.
    pub fn use_manual_date(&mut self, date: NaiveDate) {
        self.anchor_mode = AnchorMode::Manual;
        self.manual_date = Some(date.format("%Y-%m-%d").to_string());
    }

    fn validate(&self) -> Result<()> {
        match self.anchor_mode {
            AnchorMode::Group => {
                if group_anchor(&self.group).is_none() {
                    return Err(ConfigError::UnknownGroup(self.group.clone()).into());
                }
            }
            AnchorMode::Manual => {
                // A missing manual date is reported when an anchor is needed.
                if let Some(raw) = self.manual_date.as_deref().map(str::trim) {
                    if !raw.is_empty() && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_err() {
                        return Err(ConfigError::InvalidStartDate(raw.to_string()).into());
                    }
                }
            }
        }
        if NaiveDate::from_ymd_opt(self.year, 1, 1).is_none() {
            return Err(ConfigError::Invalid(format!("calendar.year {} out of range", self.year)).into());
        }
        Ok(())
    }
}

/// Public holiday overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayConfig {
    /// Fetch and show public holidays
    pub enabled: bool,
    /// ISO country code
    pub country: String,
    /// Subdivision code; holidays limited to other regions are dropped
    pub region: String,
    /// Base URL of the holiday API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            country: "DE".to_string(),
            region: "DE-SL".to_string(),
            base_url: "https://date.nager.at/api/v3".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the state file
    pub data_dir: String,
    /// File name of the annotations and birthdays
    pub state_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.local/share/shiftplan".to_string(),
            state_file: "state.json".to_string(),
        }
    }
}
