//! Core rate logic: provider abstraction, payload normalization and formatting

pub mod catalog;
pub mod config;
pub mod error;
pub mod exchange;
pub mod format;
pub mod log;
pub mod provider;
pub mod rates;

// Re-export main types for cleaner imports
pub use error::RateError;
pub use provider::{CurrencyCatalog, RateProvider};
pub use rates::{RatePayload, RatePoint, Trend};
