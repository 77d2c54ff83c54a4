//! Holiday provider trait definitions.

use async_trait::async_trait;

use crate::calendar::types::HolidayMap;

/// Source of public holidays for one region.
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Holidays of `year`, keyed by date, valued with the localized name.
    async fn holidays(&self, year: i32) -> crate::error::Result<HolidayMap>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "holidays"
    }
}
