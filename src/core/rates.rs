//! Normalization of provider payloads into rate points and trends.
//!
//! The provider answers with one of two shapes:
//! - single date: `{"date": "YYYY-MM-DD", "rates": {"USD": 0.65}}`
//! - date range: `{"rates": {"YYYY-MM-DD": {"USD": 0.65}, ...}}`
//!
//! The shape is decided once in [`RatePayload::from_json`].

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::error::RateError;

/// Ordered mapping of ISO date to rate, ascending by date.
pub type Trend = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq)]
pub enum RatePayload {
    SingleDate {
        date: Option<String>,
        rates: BTreeMap<String, f64>,
    },
    Range {
        rates: BTreeMap<String, BTreeMap<String, f64>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatePoint {
    pub date: String,
    pub rate: f64,
}

impl RatePayload {
    pub fn from_json(value: &Value) -> Result<Self, RateError> {
        let root = value
            .as_object()
            .ok_or_else(|| RateError::malformed("expected a JSON object"))?;
        let rates = match root.get("rates") {
            Some(Value::Object(rates)) => rates,
            _ => return Err(RateError::malformed("'rates' not found")),
        };

        let is_range = rates.values().next().is_some_and(Value::is_object);
        if is_range {
            let mut days = BTreeMap::new();
            for (date, day_rates) in rates {
                let day_rates = day_rates.as_object().ok_or_else(|| {
                    RateError::malformed(format!("rates for {date} are not an object"))
                })?;
                days.insert(date.clone(), parse_rate_map(day_rates)?);
            }
            return Ok(RatePayload::Range { rates: days });
        }

        let date = match root.get("date") {
            Some(Value::String(date)) => Some(date.clone()),
            Some(Value::Null) | None => None,
            Some(other) => {
                return Err(RateError::malformed(format!(
                    "'date' is not a string: {other}"
                )));
            }
        };
        Ok(RatePayload::SingleDate {
            date,
            rates: parse_rate_map(rates)?,
        })
    }
}

fn parse_rate_map(rates: &Map<String, Value>) -> Result<BTreeMap<String, f64>, RateError> {
    rates
        .iter()
        .map(|(code, value)| {
            value
                .as_f64()
                .filter(|rate| rate.is_finite())
                .map(|rate| (code.clone(), rate))
                .ok_or_else(|| RateError::malformed(format!("rate for {code} is not a number")))
        })
        .collect()
}

/// Extracts the `(date, rate)` pair for `target`.
///
/// Range payloads resolve to their most recent date. A missing target is an
/// error in both shapes.
pub fn extract_rate(payload: &RatePayload, target: &str) -> Result<RatePoint, RateError> {
    match payload {
        RatePayload::Range { rates } => {
            // BTreeMap keys are sorted, and ISO dates sort chronologically.
            let (last_date, day_rates) = rates
                .iter()
                .next_back()
                .ok_or_else(|| RateError::malformed("empty date range"))?;
            let rate = day_rates
                .get(target)
                .ok_or_else(|| RateError::MissingCurrency {
                    currency: target.to_string(),
                    date: Some(last_date.clone()),
                })?;
            Ok(RatePoint {
                date: last_date.clone(),
                rate: *rate,
            })
        }
        RatePayload::SingleDate { date, rates } => {
            let date = date.as_ref().ok_or_else(|| {
                RateError::malformed("'date' not found for single-date payload")
            })?;
            let rate = rates.get(target).ok_or_else(|| RateError::MissingCurrency {
                currency: target.to_string(),
                date: None,
            })?;
            Ok(RatePoint {
                date: date.clone(),
                rate: *rate,
            })
        }
    }
}

/// Builds the date-ordered series of `target` rates from a range payload.
///
/// Dates that do not quote `target` are skipped.
pub fn extract_trend(payload: &RatePayload, target: &str) -> Result<Trend, RateError> {
    match payload {
        RatePayload::Range { rates } => Ok(rates
            .iter()
            .filter_map(|(date, day_rates)| {
                day_rates.get(target).map(|rate| (date.clone(), *rate))
            })
            .collect()),
        // An empty range carries no nested objects and parses as single-date.
        RatePayload::SingleDate { rates, .. } if rates.is_empty() => Ok(Trend::new()),
        RatePayload::SingleDate { .. } => Err(RateError::malformed(
            "expected date-range rates for trend data",
        )),
    }
}
