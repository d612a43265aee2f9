//! Exchange rate provider abstraction

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

use super::error::RateError;
use super::rates::RatePayload;

/// Currency code to display name, as published by the provider.
pub type CurrencyCatalog = BTreeMap<String, String>;

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_currencies(&self) -> Result<CurrencyCatalog, RateError>;

    async fn fetch_latest_rate(&self, from: &str, to: &str) -> Result<RatePayload, RateError>;

    async fn fetch_historical_rate(
        &self,
        date: NaiveDate,
        from: &str,
        to: &str,
    ) -> Result<RatePayload, RateError>;

    async fn fetch_rate_range_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        from: &str,
        to: &str,
    ) -> Result<RatePayload, RateError>;

    /// Rates from `start` through today in the local calendar.
    async fn fetch_rate_range(
        &self,
        start: NaiveDate,
        from: &str,
        to: &str,
    ) -> Result<RatePayload, RateError> {
        let today = Local::now().date_naive();
        self.fetch_rate_range_between(start, today, from, to).await
    }
}
