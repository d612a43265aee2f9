use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::config::FrankfurterConfig;
use crate::core::error::RateError;
use crate::core::provider::{CurrencyCatalog, RateProvider};
use crate::core::rates::RatePayload;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client for the Frankfurter exchange rate API.
pub struct FrankfurterProvider {
    base_url: String,
    client: reqwest::Client,
}

impl FrankfurterProvider {
    pub fn new(config: &FrankfurterConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fxconv/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(FrankfurterProvider {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json(&self, endpoint: &str) -> Result<Value, RateError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting {}", url);

        let transport = |source| RateError::Transport {
            url: url.clone(),
            source,
        };
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;

        debug!(status = %response.status(), "Received Frankfurter response");

        let text = response.text().await.map_err(transport)?;
        serde_json::from_str(&text).map_err(|e| {
            RateError::malformed(format!("failed to parse JSON response from {url}: {e}"))
        })
    }

    async fn get_payload(&self, endpoint: &str) -> Result<RatePayload, RateError> {
        let value = self.get_json(endpoint).await?;
        RatePayload::from_json(&value)
    }
}

fn pair_query(from: &str, to: &str) -> String {
    format!("?from={from}&to={to}")
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    async fn fetch_currencies(&self) -> Result<CurrencyCatalog, RateError> {
        let value = self.get_json("/currencies").await?;
        serde_json::from_value(value)
            .map_err(|e| RateError::malformed(format!("unexpected currency catalog: {e}")))
    }

    #[instrument(name = "FrankfurterLatest", skip(self))]
    async fn fetch_latest_rate(&self, from: &str, to: &str) -> Result<RatePayload, RateError> {
        self.get_payload(&format!("/latest{}", pair_query(from, to)))
            .await
    }

    #[instrument(name = "FrankfurterHistorical", skip(self))]
    async fn fetch_historical_rate(
        &self,
        date: NaiveDate,
        from: &str,
        to: &str,
    ) -> Result<RatePayload, RateError> {
        let endpoint = format!("/{}{}", date.format(DATE_FORMAT), pair_query(from, to));
        self.get_payload(&endpoint).await
    }

    #[instrument(name = "FrankfurterRange", skip(self))]
    async fn fetch_rate_range_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        from: &str,
        to: &str,
    ) -> Result<RatePayload, RateError> {
        let endpoint = format!(
            "/{}..{}{}",
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT),
            pair_query(from, to)
        );
        self.get_payload(&endpoint).await
    }
}
