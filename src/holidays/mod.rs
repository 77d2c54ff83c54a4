//! Public holiday overlay.
//!
//! Holidays come from an external collaborator behind the
//! [`HolidayProvider`] trait. The calendar core only ever sees the resulting
//! [`HolidayMap`]; a provider that fails yields an empty map via
//! [`fetch_or_empty`].
//!
//! # Providers
//!
//! - [`NagerHolidayProvider`]: queries the Nager.Date public holiday API and
//!   keeps the holidays valid in the configured region.
//! - [`StaticHolidays`]: fixed in-memory map for offline use.

mod nager;
mod traits;

pub use nager::{holidays_for_region, NagerHolidayProvider, PublicHoliday};
pub use traits::HolidayProvider;

use async_trait::async_trait;
use tracing::warn;

use crate::calendar::types::{DateKey, HolidayMap};
use crate::config::HolidayConfig;
use crate::error::Result;

/// Fetch the holidays of `year`, absorbing any failure into an empty map.
pub async fn fetch_or_empty(provider: &dyn HolidayProvider, year: i32) -> HolidayMap {
    match provider.holidays(year).await {
        Ok(map) => map,
        Err(e) => {
            warn!("Could not fetch holidays from {} for {}: {}", provider.name(), year, e);
            HolidayMap::new()
        }
    }
}

/// Load the holiday overlay described by `config`.
///
/// A disabled overlay returns an empty map without any request.
pub async fn load_holidays(config: &HolidayConfig, year: i32) -> HolidayMap {
    if !config.enabled {
        return HolidayMap::new();
    }
    match NagerHolidayProvider::from_config(config) {
        Ok(provider) => fetch_or_empty(&provider, year).await,
        Err(e) => {
            warn!("Holiday provider unavailable: {}", e);
            HolidayMap::new()
        }
    }
}

/// In-memory holiday provider.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    holidays: HolidayMap,
}

impl StaticHolidays {
    pub fn new(holidays: HolidayMap) -> Self {
        Self { holidays }
    }

    /// Add a holiday.
    pub fn with(mut self, date: impl Into<DateKey>, name: impl Into<String>) -> Self {
        self.holidays.insert(date.into(), name.into());
        self
    }
}

#[async_trait]
impl HolidayProvider for StaticHolidays {
    async fn holidays(&self, year: i32) -> Result<HolidayMap> {
        Ok(self
            .holidays
            .iter()
            .filter(|(key, _)| key.year() == year)
            .map(|(key, name)| (*key, name.clone()))
            .collect())
    }

    fn name(&self) -> &str {
        "static"
    }
}
