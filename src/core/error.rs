//! Error types for rate fetching, normalization and conversion.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    /// Network failure or non-2xx status from the provider.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider response lacks the structure we rely on.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{}", missing_currency_message(.currency, .date))]
    MissingCurrency {
        currency: String,
        date: Option<String>,
    },

    #[error("Rate cannot be zero for inverse computation")]
    ZeroRate,

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Provider returned no currencies")]
    EmptyCatalog,
}

fn missing_currency_message(currency: &str, date: &Option<String>) -> String {
    match date {
        Some(date) => format!("Target currency '{currency}' not in rates for {date}"),
        None => format!("Target currency '{currency}' not in rates"),
    }
}

impl RateError {
    pub fn malformed(message: impl Into<String>) -> Self {
        RateError::MalformedResponse(message.into())
    }
}
