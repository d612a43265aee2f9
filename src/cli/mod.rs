pub mod chart;
pub mod convert;
pub mod currencies;
pub mod inverse;
pub mod latest;
pub mod setup;
pub mod ui;

use crate::core::config::DefaultsConfig;
use crate::core::{RateProvider, catalog, exchange};
use anyhow::{Context, Result};

/// Fetches the catalog and resolves the currency pair for a command.
pub(crate) async fn select_pair(
    provider: &dyn RateProvider,
    defaults: &DefaultsConfig,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<(String, String)> {
    let codes = exchange::list_currency_codes(provider)
        .await
        .context("Failed to fetch currencies")?;
    let pair = catalog::resolve_pair(&codes, from, to, &defaults.from, &defaults.to)?;
    Ok(pair)
}
