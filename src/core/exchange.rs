//! Request-level rate flows on top of a [`RateProvider`].
//!
//! Each call fetches sequentially and keeps nothing between calls.

use chrono::{Duration, Local, NaiveDate};
use tracing::debug;

use super::error::RateError;
use super::provider::RateProvider;
use super::rates::{RatePoint, Trend, extract_rate, extract_trend};

/// Sorted list of the currency codes the provider supports.
pub async fn list_currency_codes(provider: &dyn RateProvider) -> Result<Vec<String>, RateError> {
    let catalog = provider.fetch_currencies().await?;
    // BTreeMap keys are already in order.
    Ok(catalog.into_keys().collect())
}

pub async fn latest_rate(
    provider: &dyn RateProvider,
    from: &str,
    to: &str,
) -> Result<RatePoint, RateError> {
    let payload = provider.fetch_latest_rate(from, to).await?;
    extract_rate(&payload, to)
}

pub async fn historical_rate(
    provider: &dyn RateProvider,
    date: NaiveDate,
    from: &str,
    to: &str,
) -> Result<RatePoint, RateError> {
    let payload = provider.fetch_historical_rate(date, from, to).await?;
    extract_rate(&payload, to)
}

/// First day of a trend window of `years` ending on `today`.
pub fn trend_start(today: NaiveDate, years: u32) -> NaiveDate {
    today - Duration::days(365 * i64::from(years))
}

/// Rates for the last `years` through today, ascending by date.
///
/// The window is computed at call time, so it rolls forward day by day.
pub async fn rate_trend(
    provider: &dyn RateProvider,
    from: &str,
    to: &str,
    years: u32,
) -> Result<Trend, RateError> {
    let start = trend_start(Local::now().date_naive(), years);
    debug!(%start, years, "Fetching rate trend");
    let payload = provider.fetch_rate_range(start, from, to).await?;
    extract_trend(&payload, to)
}
