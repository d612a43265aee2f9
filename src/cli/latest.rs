use super::{chart, select_pair, ui};
use crate::core::config::AppConfig;
use crate::core::format::format_conversion;
use crate::core::{RateError, RatePoint, RateProvider, Trend, exchange};
use anyhow::{Context, Result};

const CHART_HEIGHT: usize = 12;
// Room for the y axis labels and the axis itself.
const CHART_MARGIN: usize = 14;

pub struct LatestArgs {
    pub amount: Option<f64>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub show_chart: bool,
}

pub async fn run(provider: &dyn RateProvider, config: &AppConfig, args: LatestArgs) -> Result<()> {
    let (from, to) = select_pair(
        provider,
        &config.defaults,
        args.from.as_deref(),
        args.to.as_deref(),
    )
    .await?;
    let amount = args.amount.unwrap_or(config.defaults.amount);

    let pb = ui::new_spinner(format!("Fetching latest {from}/{to} rate"));
    let result = fetch(provider, &from, &to, args.show_chart, config.trend.years).await;
    pb.finish_and_clear();
    let (point, trend) = result.context("Failed to fetch latest rate or trend")?;

    println!(
        "{}",
        format_conversion(&point.date, &from, &to, point.rate, Some(amount))
    );
    if let Some(trend) = trend {
        let width = ui::terminal_width().saturating_sub(CHART_MARGIN).max(10);
        println!("\n{}", render_trend(&trend, config.trend.years, width));
    }
    Ok(())
}

/// Fetches everything the command prints, so a failure leaves no partial output.
async fn fetch(
    provider: &dyn RateProvider,
    from: &str,
    to: &str,
    with_trend: bool,
    years: u32,
) -> Result<(RatePoint, Option<Trend>), RateError> {
    let point = exchange::latest_rate(provider, from, to).await?;
    let trend = if with_trend {
        Some(exchange::rate_trend(provider, from, to, years).await?)
    } else {
        None
    };
    Ok((point, trend))
}

pub fn render_trend(trend: &Trend, years: u32, width: usize) -> String {
    let unit = if years == 1 { "year" } else { "years" };
    let title = ui::style_text(
        &format!("Rate Trend Over the Last {years} {unit}"),
        ui::StyleType::Title,
    );
    if trend.is_empty() {
        return format!(
            "{title}\n{}",
            ui::style_text("No trend data available.", ui::StyleType::Subtle)
        );
    }
    format!(
        "{title}\n\n{}\n\n{}",
        chart::render_line_chart(trend, width, CHART_HEIGHT),
        chart::render_trend_summary(trend)
    )
}
