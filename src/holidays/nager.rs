//! Nager.Date public holiday provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::calendar::types::{DateKey, HolidayMap};
use crate::config::HolidayConfig;
use crate::error::{HolidayError, Result};

use super::HolidayProvider;

/// One entry of the `PublicHolidays` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    pub date: DateKey,
    pub local_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub counties: Option<Vec<String>>,
}

impl PublicHoliday {
    /// Whether the holiday applies in `region` (e.g. `DE-SL`).
    pub fn applies_to(&self, region: &str) -> bool {
        self.global
            || self
                .counties
                .as_ref()
                .is_some_and(|c| c.iter().any(|code| code == region))
    }
}

/// Keep the holidays valid in `region`, keyed by date with the local name.
pub fn holidays_for_region(holidays: Vec<PublicHoliday>, region: &str) -> HolidayMap {
    holidays
        .into_iter()
        .filter(|h| h.applies_to(region))
        .map(|h| (h.date, h.local_name))
        .collect()
}

/// Holiday provider backed by the Nager.Date API.
pub struct NagerHolidayProvider {
    client: Client,
    base_url: String,
    country: String,
    region: String,
}

impl NagerHolidayProvider {
    /// Create a provider from configuration.
    pub fn from_config(config: &HolidayConfig) -> Result<Self> {
        Self::new(
            &config.base_url,
            &config.country,
            &config.region,
            config.timeout_secs,
        )
    }

    /// Create a provider with explicit parameters.
    pub fn new(base_url: &str, country: &str, region: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| HolidayError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            country: country.to_string(),
            region: region.to_string(),
        })
    }

    fn url(&self, year: i32) -> String {
        format!("{}/PublicHolidays/{}/{}", self.base_url, year, self.country)
    }
}

#[async_trait]
impl HolidayProvider for NagerHolidayProvider {
    async fn holidays(&self, year: i32) -> Result<HolidayMap> {
        let url = self.url(year);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                HolidayError::Http("Request timed out".to_string())
            } else if e.is_connect() {
                HolidayError::Http(format!("Connection failed: {}", e))
            } else {
                HolidayError::Http(format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HolidayError::Status(status.as_u16()).into());
        }

        let holidays: Vec<PublicHoliday> = response
            .json()
            .await
            .map_err(|e| HolidayError::Decode(e.to_string()))?;

        let map = holidays_for_region(holidays, &self.region);
        debug!("Fetched {} holidays for {} {}", map.len(), year, self.region);
        Ok(map)
    }

    fn name(&self) -> &str {
        "nager"
    }
}
