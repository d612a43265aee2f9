use super::{select_pair, ui};
use crate::core::config::AppConfig;
use crate::core::format::format_conversion;
use crate::core::{RateProvider, exchange};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

pub struct ConvertArgs {
    pub amount: Option<f64>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<NaiveDate>,
}

pub async fn run(
    provider: &dyn RateProvider,
    config: &AppConfig,
    args: ConvertArgs,
) -> Result<()> {
    let (from, to) = select_pair(
        provider,
        &config.defaults,
        args.from.as_deref(),
        args.to.as_deref(),
    )
    .await?;
    let amount = args.amount.unwrap_or(config.defaults.amount);
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let pb = ui::new_spinner(format!("Fetching {from}/{to} rate for {date}"));
    let result = exchange::historical_rate(provider, date, &from, &to).await;
    pb.finish_and_clear();
    let point = result.context("Failed to fetch historical rate")?;

    // The provider answers with the closest working day, which is the date shown.
    println!(
        "{}",
        format_conversion(&point.date, &from, &to, point.rate, Some(amount))
    );
    Ok(())
}
